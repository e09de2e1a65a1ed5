//! Persistent path segments with structural sharing.
//!
//! This module implements the path-node abstraction: each [`PathSegment`] is
//! an immutable node holding a value, a depth and a shared reference to its
//! parent. Appending produces new nodes that share their ancestry with the
//! base they were built from; nothing is ever mutated after construction, so
//! chains can be shared freely across threads.
//!
//! Rendering follows RFC 6901: a path prints as `/` followed by its escaped
//! step values joined by `/`, root first. The rendered form is memoized at
//! construction and drives equality, hashing and ordering.

pub mod iter;
pub mod operations;
pub mod ordering;
pub mod parser;
pub mod ser;
pub mod types;

pub use iter::{Iter, ReverseIter};
pub use parser::{escape, unescape};
pub use types::{PathSegment, SegmentKind};
