//! Dependency graph types.
//!
//! A `DependencyGraph` is a pure function of its input file set: nodes
//! are files, edges are resolved include relationships. Rebuilding from
//! the same files yields an isomorphic graph (see
//! [`DependencyGraph::fingerprint`]).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::canonical::canonical_hash_hex;
use crate::ENGINE_SCHEMA_VERSION;

use super::file::{FileId, FileSet, SourceFile};

/// Group sentinel for files with no containing directory.
pub const ROOT_GROUP: &str = "root";

/// Quantization factor for display sizes in fingerprints.
/// Sizes are multiplied by this value and rounded to i64 so the hash is
/// stable across float serialization settings.
const SIZE_QUANTIZATION_FACTOR: f64 = 1_000_000.0;

/// Directed edge in the dependency graph.
///
/// Represents one resolved include relationship from the declaring file
/// to the included file. Implements `Ord` for deterministic ordering:
/// (source, target).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Declaring file (the one containing the include directive).
    pub source: FileId,
    /// Included file (the resolution target).
    pub target: FileId,
}

impl GraphEdge {
    /// Create a new edge.
    pub fn new(source: FileId, target: FileId) -> Self {
        Self { source, target }
    }
}

// Canonical ordering: source, then target
impl PartialOrd for GraphEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GraphEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.source.cmp(&other.source) {
            std::cmp::Ordering::Equal => self.target.cmp(&other.target),
            ord => ord,
        }
    }
}

/// Display-augmented view of a source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Node identity (the file path).
    pub id: FileId,
    /// Containing directory, or [`ROOT_GROUP`] for top-level files.
    pub group: String,
    /// Dampened display size. Layout-only; never used for algorithmic
    /// decisions.
    pub size: f64,
    /// Recent-revision count for display color-coding, if computed.
    pub churn: Option<u64>,
    /// True only when a simulated move left this node with at least one
    /// include that no longer resolves. Always false in a normal build.
    pub is_broken: bool,
}

/// Directed dependency graph over a file set.
///
/// Owns a snapshot of the files it was derived from; there are no
/// back-references from files to graphs.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: BTreeMap<FileId, GraphNode>,
    edges: BTreeSet<GraphEdge>,
    /// Source -> targets adjacency.
    outgoing: BTreeMap<FileId, BTreeSet<FileId>>,
    /// Target -> sources adjacency.
    incoming: BTreeMap<FileId, BTreeSet<FileId>>,
    files: FileSet,
}

impl DependencyGraph {
    /// Create an empty graph over a file-set snapshot.
    pub(crate) fn new(files: FileSet) -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeSet::new(),
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
            files,
        }
    }

    /// Add a node to the graph.
    pub(crate) fn add_node(&mut self, node: GraphNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Add an edge, de-duplicating repeated pairs.
    ///
    /// Both endpoints must already be present as nodes; self-edges are
    /// the caller's responsibility to filter.
    pub(crate) fn add_edge(&mut self, edge: GraphEdge) {
        debug_assert!(self.nodes.contains_key(&edge.source));
        debug_assert!(self.nodes.contains_key(&edge.target));

        self.outgoing
            .entry(edge.source.clone())
            .or_default()
            .insert(edge.target.clone());
        self.incoming
            .entry(edge.target.clone())
            .or_default()
            .insert(edge.source.clone());
        self.edges.insert(edge);
    }

    /// Mark a node as broken (sandbox use only).
    pub(crate) fn mark_broken(&mut self, id: &FileId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.is_broken = true;
        }
    }

    /// Get a node by identity.
    pub fn node(&self, id: &FileId) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Iterate nodes in canonical (path) order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Iterate edges in canonical (source, target) order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter()
    }

    /// Check whether a specific edge exists.
    pub fn has_edge(&self, source: &FileId, target: &FileId) -> bool {
        self.outgoing
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Targets of a node's outbound edges.
    pub fn targets_of(&self, id: &FileId) -> impl Iterator<Item = &FileId> {
        self.outgoing.get(id).into_iter().flatten()
    }

    /// Sources of a node's inbound edges.
    pub fn sources_of(&self, id: &FileId) -> impl Iterator<Item = &FileId> {
        self.incoming.get(id).into_iter().flatten()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up the underlying source file for a node.
    pub fn file(&self, id: &FileId) -> Option<&SourceFile> {
        self.files.get(id)
    }

    /// The file-set snapshot this graph was derived from.
    pub fn files(&self) -> &FileSet {
        &self.files
    }

    /// Any node flagged broken by a simulated move.
    pub fn broken_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values().filter(|n| n.is_broken)
    }

    /// Canonical fingerprint of the graph shape.
    ///
    /// Hashes sorted nodes (sizes quantized) and sorted edges. Two
    /// builds over the same file set produce equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let nodes: Vec<QuantizedNode> = self.nodes.values().map(QuantizedNode::from).collect();
        let edges: Vec<&GraphEdge> = self.edges.iter().collect();
        canonical_hash_hex(&(ENGINE_SCHEMA_VERSION, &nodes, &edges))
    }
}

/// Quantized node representation for deterministic hashing.
#[derive(Serialize)]
struct QuantizedNode<'a> {
    id: &'a FileId,
    group: &'a str,
    size: i64,
    churn: Option<u64>,
    is_broken: bool,
}

impl<'a> From<&'a GraphNode> for QuantizedNode<'a> {
    fn from(node: &'a GraphNode) -> Self {
        Self {
            id: &node.id,
            group: &node.group,
            size: (node.size * SIZE_QUANTIZATION_FACTOR).round() as i64,
            churn: node.churn,
            is_broken: node.is_broken,
        }
    }
}
