//! Bounded reachability over the dependency graph ("impact analysis").
//!
//! Breadth-first expansion from a focal node, bounded by a hop limit
//! and a direction policy. The result is advisory and display-only: it
//! never mutates the graph and is discarded when the query changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::{DependencyGraph, FileId, GraphEdge};

/// Which edges a traversal may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Follow edges out of the frontier (what the focal file depends on).
    Outbound,
    /// Follow edges into the frontier (what depends on the focal file).
    Inbound,
    /// Follow edges in both directions.
    Both,
}

/// Result of one bounded reachability query.
///
/// Ephemeral: scoped to a single highlight query, not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reachability {
    /// All visited node identities, always including the start node.
    pub nodes: BTreeSet<FileId>,
    /// Edges traversed to reach new nodes, plus edges found between two
    /// nodes of the same level (still relevant to display).
    pub edges: BTreeSet<GraphEdge>,
}

impl Reachability {
    /// Check whether a node was reached.
    pub fn contains(&self, id: &FileId) -> bool {
        self.nodes.contains(id)
    }
}

/// Compute the set of nodes reachable from `start` within `depth` hops.
///
/// Expands level by level; a visited node is never re-expanded, and the
/// walk halts early once a level yields no new nodes. A `start` absent
/// from the graph is a degenerate query: the result is `{start}` with
/// no edges, not an error. `depth = 0` likewise returns only `start`.
pub fn reachability(
    graph: &DependencyGraph,
    start: &FileId,
    direction: Direction,
    depth: u32,
) -> Reachability {
    let mut visited: BTreeSet<FileId> = BTreeSet::new();
    let mut edges: BTreeSet<GraphEdge> = BTreeSet::new();
    let mut frontier: BTreeSet<FileId> = BTreeSet::new();

    visited.insert(start.clone());
    frontier.insert(start.clone());

    for _ in 0..depth {
        let mut next: BTreeSet<FileId> = BTreeSet::new();

        for id in &frontier {
            for (edge, neighbor) in neighbors(graph, id, direction) {
                if !visited.contains(&neighbor) {
                    next.insert(neighbor);
                    edges.insert(edge);
                } else if frontier.contains(&neighbor) {
                    // Edge between two nodes of the same level.
                    edges.insert(edge);
                }
            }
        }

        if next.is_empty() {
            break;
        }

        visited.extend(next.iter().cloned());
        frontier = next;
    }

    tracing::debug!(
        start = %start,
        ?direction,
        depth,
        reached = visited.len(),
        "computed reachability"
    );

    Reachability {
        nodes: visited,
        edges,
    }
}

/// Permitted (edge, neighbor) pairs for one node under a direction
/// policy. Neighbor is the far endpoint; the edge keeps its stored
/// orientation.
fn neighbors<'a>(
    graph: &'a DependencyGraph,
    id: &'a FileId,
    direction: Direction,
) -> impl Iterator<Item = (GraphEdge, FileId)> + 'a {
    let outbound = matches!(direction, Direction::Outbound | Direction::Both);
    let inbound = matches!(direction, Direction::Inbound | Direction::Both);

    let out = graph
        .targets_of(id)
        .filter(move |_| outbound)
        .map(move |target| {
            (
                GraphEdge::new(id.clone(), target.clone()),
                target.clone(),
            )
        });
    let inn = graph
        .sources_of(id)
        .filter(move |_| inbound)
        .map(move |source| {
            (
                GraphEdge::new(source.clone(), id.clone()),
                source.clone(),
            )
        });

    out.chain(inn)
}
