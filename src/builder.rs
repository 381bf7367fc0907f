//! Dependency graph construction.
//!
//! One pass per file: a display-augmented node for every file, then an
//! edge for every include that resolves to a different file in the set.
//! The builder is a pure function of the file set; it mutates nothing
//! and the result is independent of traversal order.

use crate::resolve::resolve;
use crate::types::{DependencyGraph, FileSet, GraphEdge, GraphNode, ROOT_GROUP};

/// Minimum display size, so zero-byte files remain visible in layout.
pub const NODE_SIZE_FLOOR: f64 = 4.0;

/// Dampened display size: floor plus the square root of the byte size.
///
/// Layout-only; no algorithm reads this value.
fn display_size(bytes: u64) -> f64 {
    NODE_SIZE_FLOOR + (bytes as f64).sqrt()
}

fn node_for(file: &crate::types::SourceFile) -> GraphNode {
    let dir = file.dir();
    GraphNode {
        id: file.path.clone(),
        group: if dir.is_empty() {
            ROOT_GROUP.to_string()
        } else {
            dir.to_string()
        },
        size: display_size(file.size),
        churn: file.churn,
        is_broken: false,
    }
}

/// Build the dependency graph for a file set.
///
/// Every file becomes a node; every include target that resolves to a
/// file other than the declaring one becomes an edge, de-duplicated per
/// ordered pair. Self-edges are never created; unresolved includes
/// contribute nothing. An empty file set yields an empty graph.
pub fn build_graph(files: &FileSet) -> DependencyGraph {
    let mut graph = DependencyGraph::new(files.clone());

    for file in files.iter() {
        graph.add_node(node_for(file));
    }

    for file in files.iter() {
        let dir = file.dir();
        for target in &file.includes {
            if let Some(resolution) = resolve(target, dir, files) {
                if resolution.path != file.path {
                    graph.add_edge(GraphEdge::new(file.path.clone(), resolution.path));
                }
            }
        }
    }

    tracing::debug!(
        files = files.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built dependency graph"
    );

    graph
}
