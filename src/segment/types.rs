//! Core types for persistent path segments.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::parser;
use crate::capability::Segment;

/// Kind tag for the closed set of segment variants.
///
/// Exactly one of the classification predicates holds for every segment:
/// a step is a name, an index or the missing sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A field-name step.
    Name,
    /// An array-index step, carrying the backing index.
    Index(i64),
    /// The missing sentinel.
    Missing,
}

impl SegmentKind {
    /// `true` for field-name steps.
    #[inline]
    #[must_use]
    pub fn is_name(&self) -> bool {
        matches!(self, SegmentKind::Name)
    }

    /// `true` for array-index steps.
    #[inline]
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, SegmentKind::Index(_))
    }

    /// `true` for the missing sentinel.
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, SegmentKind::Missing)
    }
}

/// One step of a hierarchical path.
///
/// A `PathSegment` is a cheaply clonable handle over an immutable node. The
/// node records its own textual value, its depth, its RFC 6901 rendering
/// (computed once at construction) and a shared reference to its parent, so
/// any number of descendant chains may hang off the same ancestor nodes
/// without copying them.
///
/// "No parent" and "no match" are represented by the process-wide missing
/// sentinel ([`PathSegment::missing`]), never by an absent value: every
/// accessor that returns a segment returns a usable one.
#[derive(Debug, Clone)]
pub struct PathSegment {
    pub(crate) inner: Arc<SegmentNode>,
}

#[derive(Debug)]
pub(crate) struct SegmentNode {
    pub(crate) kind: SegmentKind,
    pub(crate) value: String,
    /// `None` only inside the sentinel; [`PathSegment::parent`] resolves it
    /// back to the sentinel so callers never observe the absence.
    pub(crate) parent: Option<PathSegment>,
    pub(crate) depth: i32,
    /// RFC 6901 rendering, `parent.rendered + "/" + escape(value)`.
    pub(crate) rendered: String,
}

/// The unique process-wide missing sentinel.
static MISSING: Lazy<PathSegment> = Lazy::new(|| PathSegment {
    inner: Arc::new(SegmentNode {
        kind: SegmentKind::Missing,
        value: String::new(),
        parent: None,
        depth: -1,
        rendered: String::new(),
    }),
});

impl PathSegment {
    /// The missing sentinel: depth `-1`, empty value, empty rendering, and
    /// its own parent.
    #[inline]
    #[must_use]
    pub fn missing() -> Self {
        MISSING.clone()
    }

    /// Creates a root field-name segment (depth 0, parent missing).
    #[must_use]
    pub fn name(value: impl Into<String>) -> Self {
        Self::missing().append_name(value)
    }

    /// Creates a root index segment (depth 0, parent missing).
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NegativeIndex`](crate::PathError::NegativeIndex)
    /// if `index` is negative.
    pub fn index(index: i64) -> crate::PathResult<Self> {
        Self::missing().append_index(index)
    }

    /// Internal constructor for a child node hanging off `self`.
    ///
    /// `value` must already be the canonical textual form for `kind`
    /// (decimal digits for a validated non-negative index).
    pub(crate) fn child(&self, kind: SegmentKind, value: String) -> Self {
        let rendered = format!("{}/{}", self.inner.rendered, parser::escape(&value));
        PathSegment {
            inner: Arc::new(SegmentNode {
                kind,
                value,
                parent: Some(self.clone()),
                depth: self.inner.depth + 1,
                rendered,
            }),
        }
    }

    /// This segment's own textual value. Indices render in decimal; the
    /// missing sentinel carries the empty string.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.inner.value
    }

    /// The preceding segment, or the missing sentinel for roots. The
    /// sentinel is its own parent.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> PathSegment {
        match &self.inner.parent {
            Some(parent) => parent.clone(),
            None => Self::missing(),
        }
    }

    /// Distance from the root: 0 for root segments, -1 for the sentinel.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.inner.depth
    }

    /// The kind tag of this segment.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &SegmentKind {
        &self.inner.kind
    }

    /// The memoized RFC 6901 rendering of the whole chain.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner.rendered
    }

    /// `true` for field-name steps.
    #[inline]
    #[must_use]
    pub fn is_name(&self) -> bool {
        self.inner.kind.is_name()
    }

    /// `true` for array-index steps.
    #[inline]
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.inner.kind.is_index()
    }

    /// `true` for the missing sentinel.
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.inner.kind.is_missing()
    }

    /// The backing index for index steps, `None` otherwise.
    #[inline]
    #[must_use]
    pub fn array_index(&self) -> Option<i64> {
        match self.inner.kind {
            SegmentKind::Index(index) => Some(index),
            _ => None,
        }
    }

    /// `false` when the parent is the missing sentinel.
    #[inline]
    #[must_use]
    pub fn has_parent(&self) -> bool {
        !self.parent().is_missing()
    }

    /// Whether both handles point at the same node.
    #[inline]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for PathSegment {
    /// The missing sentinel.
    #[inline]
    fn default() -> Self {
        Self::missing()
    }
}

impl Segment for PathSegment {
    type Value = str;

    #[inline]
    fn value(&self) -> &str {
        PathSegment::value(self)
    }

    #[inline]
    fn parent(&self) -> Self {
        PathSegment::parent(self)
    }

    #[inline]
    fn depth(&self) -> i32 {
        PathSegment::depth(self)
    }
}
