//! Error types for segment construction, lookup and parsing.

pub mod types;

pub use types::{PathError, PathResult};
