//! Serde support: segments serialize as their rendered string form.
//!
//! The wire format is exactly the [`Display`](std::fmt::Display) form, so a
//! serialized path deserializes back equal whenever its values are free of
//! escape sequences (parsing never unescapes).

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::PathSegment;

impl Serialize for PathSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct PathSegmentVisitor;

impl Visitor<'_> for PathSegmentVisitor {
    type Value = PathSegment;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a path string starting with '/', or the empty string")
    }

    fn visit_str<E>(self, value: &str) -> Result<PathSegment, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for PathSegment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PathSegmentVisitor)
    }
}
