//! Minimal read-only contract for segments of a linear hierarchy.

/// Read-only surface every segment of a linear hierarchy exposes.
///
/// A segment carries a value, a reference to the preceding segment and its
/// distance from the root. Implementations must never surface an absent
/// segment: methods that would otherwise have nothing to return resolve to a
/// missing sentinel value instead, so callers can chain lookups without
/// unwrapping at every step.
pub trait Segment: Ord {
    /// The type of value each segment carries.
    type Value: ?Sized;

    /// This segment's own value.
    fn value(&self) -> &Self::Value;

    /// The preceding segment; the missing sentinel when there is none.
    fn parent(&self) -> Self;

    /// Distance from the root: `0` for root segments, `-1` for the missing
    /// sentinel.
    fn depth(&self) -> i32;
}
