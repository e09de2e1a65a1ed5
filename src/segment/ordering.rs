//! Structural equality, hashing and ordering.
//!
//! Two segments are equal when their depths match and their rendered forms
//! match character for character, regardless of node identity, parent
//! identity or kind. An index step `3` equals a name step `"3"` at the
//! same depth when the full ancestries render identically.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::types::PathSegment;

impl PartialEq for PathSegment {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.depth() == other.depth() && self.as_str() == other.as_str()
    }
}

impl Eq for PathSegment {}

impl Hash for PathSegment {
    /// Rendered form first, then depth, consistent with [`PartialEq`].
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
        self.depth().hash(state);
    }
}

impl PartialOrd for PathSegment {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathSegment {
    /// Depth ascending, then the sign of the lexicographic comparison of the
    /// rendered forms. Identical handles short-circuit to `Equal`.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.depth()
            .cmp(&other.depth())
            .then_with(|| self.as_str().cmp(other.as_str()))
    }
}
