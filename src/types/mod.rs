//! Core types for the dependency engine.

pub mod file;
pub mod graph;

pub use file::{FileId, FileSet, FileSetError, SourceFile};
pub use graph::{DependencyGraph, GraphEdge, GraphNode, ROOT_GROUP};
