//! Append, splice, search and containment operations.

use super::types::{PathSegment, SegmentKind};
use crate::error::{PathError, PathResult};

impl PathSegment {
    /// Appends a field-name step, returning a new segment with `self` as its
    /// parent and depth `self.depth() + 1`. `self` is not modified.
    #[must_use]
    pub fn append_name(&self, name: impl Into<String>) -> PathSegment {
        self.child(SegmentKind::Name, name.into())
    }

    /// Appends an array-index step, returning a new segment with `self` as
    /// its parent and depth `self.depth() + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NegativeIndex`] if `index` is negative.
    pub fn append_index(&self, index: i64) -> PathResult<PathSegment> {
        if index < 0 {
            return Err(PathError::NegativeIndex { index });
        }
        Ok(self.child(SegmentKind::Index(index), index.to_string()))
    }

    /// Appends only this segment's own value onto `base`, preserving this
    /// segment's kind and discarding its ancestry.
    ///
    /// The missing sentinel appends nothing: its `append_to` returns `base`
    /// unchanged. A missing `base` yields a fresh root (depth 0) step.
    #[must_use]
    pub fn append_to(&self, base: &PathSegment) -> PathSegment {
        match self.kind() {
            SegmentKind::Missing => base.clone(),
            SegmentKind::Name => base.append_name(self.value()),
            // Index already validated non-negative at construction.
            SegmentKind::Index(index) => {
                base.child(SegmentKind::Index(*index), self.value().to_string())
            }
        }
    }

    /// Splices a single step: a new segment carrying only `segment`'s own
    /// value and kind, with `self` as its parent.
    ///
    /// This is the reverse orientation of [`append_to`](Self::append_to);
    /// `/foo.append_value(/a/b)` yields `/foo/b`. A missing argument returns
    /// `self` unchanged, and a missing receiver yields a depth-0 root of the
    /// argument's kind.
    #[must_use]
    pub fn append_value(&self, segment: &PathSegment) -> PathSegment {
        segment.append_to(self)
    }

    /// Splices a whole chain: every step of `path`, root to leaf, re-parented
    /// onto `self` with its original kind and value preserved.
    ///
    /// The result is a brand-new chain of depth
    /// `self.depth() + path.depth() + 1`; neither `self`'s nor `path`'s nodes
    /// are touched. A missing `path` returns `self` unchanged.
    #[must_use]
    pub fn append_path(&self, path: &PathSegment) -> PathSegment {
        if path.is_missing() {
            return self.clone();
        }
        let mut result = self.clone();
        for step in path {
            result = step.append_to(&result);
        }
        result
    }

    /// Returns the segment at the given depth, walking upward from `self`
    /// until the depth matches.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::DepthOutOfBounds`] unless
    /// `0 <= depth <= self.depth()`.
    pub fn get(&self, depth: i32) -> PathResult<PathSegment> {
        if depth < 0 || depth > self.depth() {
            return Err(PathError::DepthOutOfBounds {
                depth,
                max: self.depth(),
            });
        }
        let mut result = self.clone();
        while result.depth() > depth {
            result = result.parent();
        }
        Ok(result)
    }

    /// Searches leaf-first (the [`reverse_iter`](Self::reverse_iter) order,
    /// including `self`) for a segment whose own value equals `value`.
    /// Returns the missing sentinel when nothing matches.
    #[must_use]
    pub fn find(&self, value: &str) -> PathSegment {
        for segment in self.reverse_iter() {
            if segment.value() == value {
                return segment;
            }
        }
        PathSegment::missing()
    }

    /// [`find`](Self::find) with the decimal rendering of `index`.
    #[must_use]
    pub fn find_index(&self, index: i64) -> PathSegment {
        self.find(&index.to_string())
    }

    /// Whether any segment in this chain has the given value.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        !self.find(value).is_missing()
    }

    /// Whether any segment in this chain has the decimal value of `index`.
    #[must_use]
    pub fn contains_index(&self, index: i64) -> bool {
        !self.find_index(index).is_missing()
    }

    /// Whether `path`'s value sequence occurs as a contiguous run ending at
    /// `self` or one of its ancestors.
    ///
    /// Naive sliding match over the two chains, leaf-first: on a value match
    /// the pattern cursor moves one step toward its root (succeeding once it
    /// matched at depth 0); on a mismatch it rewinds to the pattern leaf. The
    /// chain cursor always advances one parent, and the scan stops once the
    /// remaining chain is shorter than the pattern. Values are compared
    /// whole, so `/foo/barbaz` does not contain `/foo/bar`. A missing `path`
    /// is never contained. O(depth(self) × depth(path)) worst case.
    #[must_use]
    pub fn contains_path(&self, path: &PathSegment) -> bool {
        let mut chain = self.clone();
        let mut pattern = path.clone();
        while !chain.is_missing() && path.depth() <= chain.depth() {
            if pattern.value() == chain.value() {
                if pattern.depth() == 0 {
                    return true;
                }
                pattern = pattern.parent();
            } else {
                pattern = path.clone();
            }
            chain = chain.parent();
        }
        false
    }

    /// Materializes the chain into a dense vector indexed by depth: slot 0 is
    /// the root and the last slot is `self`. The sentinel yields an empty
    /// vector.
    ///
    /// Built with a single parent walk, writing each node into its
    /// depth-indexed slot.
    #[must_use]
    pub fn to_vec(&self) -> Vec<PathSegment> {
        if self.is_missing() {
            return Vec::new();
        }
        // depth >= 0 here, so the cast is safe.
        let len = (self.depth() + 1) as usize;
        let mut result = vec![PathSegment::missing(); len];
        let mut current = self.clone();
        while !current.is_missing() {
            result[current.depth() as usize] = current.clone();
            current = current.parent();
        }
        result
    }
}
