//! # include-graph
//!
//! Static include dependency graphs for flat file collections.
//!
//! The engine answers one question:
//!
//! > Given these files, which of them **depend on which others**, and
//! > what happens to those dependencies when a file moves?
//!
//! ## Core Contract
//!
//! 1. Scan every file's raw text for `#include` directives
//! 2. Resolve each target to a concrete file via an ordered fallback
//!    strategy (relative path, then filename, then case-insensitive
//!    suffix)
//! 3. Derive views over the resulting graph: bounded reachability for
//!    highlighting, and move simulation for breakage prediction
//!
//! ## Architecture
//!
//! ```text
//! FileSet → build_graph → DependencyGraph → reachability (highlight)
//!              ↑ scan + resolve         └→ simulate_move (what-if)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same file set → isomorphic graph, equal [`DependencyGraph::fingerprint`]
//! - Ambiguous filename matches break ties by file-set iteration order
//! - All operations are pure, synchronous, and total: unresolved
//!   includes, unknown move sources, and absent focal nodes are normal
//!   outcomes, never errors
//!
//! The engine is a computation library: no I/O, no persistence, no
//! coordinates. Fetching content, rendering layouts, and summarizing
//! comments belong to external collaborators.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod canonical;
pub mod reach;
pub mod resolve;
pub mod sandbox;
pub mod scan;
pub mod types;

// Re-exports
pub use builder::{build_graph, NODE_SIZE_FLOOR};
pub use canonical::canonical_hash_hex;
pub use reach::{reachability, Direction, Reachability};
pub use resolve::{normalize_segments, resolve, Resolution, Strategy};
pub use sandbox::simulate_move;
pub use scan::{extract_comments, extract_includes, Comment, CommentKind};
pub use types::{
    DependencyGraph, FileId, FileSet, FileSetError, GraphEdge, GraphNode, SourceFile, ROOT_GROUP,
};

/// Schema version for all engine types.
/// Increment on breaking changes to any fingerprinted type.
pub const ENGINE_SCHEMA_VERSION: &str = "1.0.0";
