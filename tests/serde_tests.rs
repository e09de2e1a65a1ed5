use pathseg::PathSegment;

#[test]
fn test_serializes_as_rendered_string() {
    let path = PathSegment::name("foo")
        .append_name("bar")
        .append_index(0)
        .expect("index 0 should be accepted");
    let json = serde_json::to_string(&path).expect("serialization should succeed");
    assert_eq!(json, "\"/foo/bar/0\"");
}

#[test]
fn test_missing_serializes_as_empty_string() {
    let json =
        serde_json::to_string(&PathSegment::missing()).expect("serialization should succeed");
    assert_eq!(json, "\"\"");

    let back: PathSegment = serde_json::from_str("\"\"").expect("deserialization should succeed");
    assert!(back.is_missing());
}

#[test]
fn test_round_trip() {
    let path = PathSegment::name("store")
        .append_name("book")
        .append_index(3)
        .expect("index 3 should be accepted");
    let json = serde_json::to_string(&path).expect("serialization should succeed");
    let back: PathSegment = serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(back, path);
}

#[test]
fn test_escaped_values_keep_rendered_form() {
    // Parsing never unescapes, so the round trip preserves the rendered
    // string rather than the original value.
    let path = PathSegment::name("~/");
    let json = serde_json::to_string(&path).expect("serialization should succeed");
    assert_eq!(json, "\"/~0~1\"");

    let back: PathSegment = serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(back.value(), "~0~1");
    assert_ne!(back, path);
}

#[test]
fn test_rejects_malformed_path() {
    let result: Result<PathSegment, _> = serde_json::from_str("\"no-slash\"");
    assert!(result.is_err(), "paths must start with '/'");
}
