//! # pathseg
//!
//! Persistent hierarchical path segments with RFC 6901 (JSON Pointer)
//! compatible rendering and structural sharing.
//!
//! A path is an ordered sequence of typed steps (field names or array
//! indices) addressing a location inside a tree-like document. Every step is
//! an immutable node holding its own value, its depth and a single shared
//! reference to its parent, so independently built paths share their common
//! ancestors instead of copying them.
//!
//! ## Features
//!
//! - **Structural sharing**: appending never copies or mutates existing
//!   nodes; clones are cheap reference bumps
//! - **Kind-preserving splicing**: re-parent single steps or whole chains
//!   onto another base while keeping each step's name/index kind
//! - **RFC 6901 rendering**: `~` escapes to `~0` and `/` to `~1`, memoized
//!   once at construction
//! - **Structural equality, hashing and ordering** over the rendered form
//! - **Missing sentinel**: "no path" and "no match" are values, never `None`
//!
//! ## Usage
//!
//! ```rust
//! use pathseg::{PathResult, PathSegment};
//!
//! fn main() -> PathResult<()> {
//!     let path = PathSegment::name("foo").append_name("bar").append_index(0)?;
//!     assert_eq!(path.to_string(), "/foo/bar/0");
//!     assert_eq!(path.depth(), 2);
//!
//!     // Parsing accepts anything rendered from values free of `~` and `/`.
//!     let parsed: PathSegment = "/foo/bar/0".parse()?;
//!     assert_eq!(parsed, path);
//!
//!     // Ancestors stay reachable through the shared chain.
//!     assert_eq!(path.get(1)?.to_string(), "/foo/bar");
//!     assert!(path.find("foo").is_name());
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod capability;
pub mod error;
pub mod segment;

pub use capability::Segment;
pub use error::{PathError, PathResult};
pub use segment::{Iter, PathSegment, ReverseIter, SegmentKind, escape, unescape};
