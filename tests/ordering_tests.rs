use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use pathseg::PathSegment;

fn hash_of(segment: &PathSegment) -> u64 {
    let mut hasher = DefaultHasher::new();
    segment.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equality_is_structural() {
    let one = PathSegment::name("one");
    let two = PathSegment::name("one");
    assert_eq!(one, two, "independently built roots should be equal");

    let deep_one = one.append_index(2).expect("index 2 should be accepted");
    let deep_two = two.append_index(2).expect("index 2 should be accepted");
    assert_eq!(
        deep_one, deep_two,
        "equality must ignore parent object identity"
    );

    let clone_parented = one.append_index(2).expect("index 2 should be accepted");
    assert_eq!(deep_one, clone_parented);
}

#[test]
fn test_equality_is_kind_agnostic() {
    let as_name = PathSegment::name("one")
        .append_index(2)
        .expect("index 2 should be accepted")
        .append_name("3");
    let as_index = PathSegment::name("one")
        .append_index(2)
        .expect("index 2 should be accepted")
        .append_index(3)
        .expect("index 3 should be accepted");
    assert_eq!(as_name, as_index, "same depth and rendering means equal");
}

#[test]
fn test_inequality() {
    let shallow = PathSegment::name("a");
    let deep = shallow.append_name("a");
    assert_ne!(shallow, deep, "different depths are never equal");
    assert_ne!(PathSegment::name("a"), PathSegment::name("b"));
    assert_ne!(PathSegment::missing(), PathSegment::name("a"));
    assert_eq!(PathSegment::missing(), PathSegment::missing());
}

#[test]
fn test_hash_agrees_with_equality() {
    let name = PathSegment::name("one")
        .append_index(2)
        .expect("index 2 should be accepted")
        .append_name("3");
    let index = PathSegment::name("one")
        .append_index(2)
        .expect("index 2 should be accepted")
        .append_index(3)
        .expect("index 3 should be accepted");

    assert_eq!(hash_of(&name), hash_of(&index));

    let mut set = HashSet::new();
    set.insert(name);
    set.insert(index);
    assert_eq!(set.len(), 1, "equal segments must collapse in a set");
}

#[test]
fn test_ordering_is_depth_major() {
    let shallow = PathSegment::name("zzz");
    let deep = PathSegment::name("aaa").append_name("aaa");
    assert_eq!(shallow.cmp(&deep), Ordering::Less);
    assert_eq!(deep.cmp(&shallow), Ordering::Greater);
}

#[test]
fn test_ordering_falls_back_to_rendered_sign() {
    let a = PathSegment::name("alpha");
    let b = PathSegment::name("beta");
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);
    assert_eq!(a.cmp(&PathSegment::name("alpha")), Ordering::Equal);

    let same = PathSegment::name("alpha");
    let clone = same.clone();
    assert_eq!(same.cmp(&clone), Ordering::Equal);
}

#[test]
fn test_sorting() {
    let one = PathSegment::name("one");
    let nested = one.append_name("two");
    let other = PathSegment::name("apple");
    let missing = PathSegment::missing();

    let mut paths = vec![nested.clone(), one.clone(), other.clone(), missing.clone()];
    paths.sort();
    assert_eq!(paths, vec![missing, other, one, nested]);
}
