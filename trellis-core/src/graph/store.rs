//! Graph Store
//!
//! The store holds the current graph as an adjacency map and exposes the
//! lookups the traversal engine needs. It is passive: the engine borrows it
//! read-only for the duration of a run, and the host application mutates it
//! only between runs.
//!
//! # Symmetric neighbor lookup
//!
//! Input construction may be asymmetric: free-form text like `0: 1, 2` lists
//! an edge only on one side, and nothing forces the author to also write
//! `1: 0`. An edge `{a, b}` therefore counts as present when *either* side
//! mentions the other, and `neighbors` merges both directions before
//! deduplicating. The same rule defines the node set: a node exists if it is
//! an adjacency key or appears in any neighbor list.

use indexmap::IndexMap;
use smallvec::SmallVec;
use std::collections::BTreeSet;
use thiserror::Error;

use super::id::{EdgeKey, NodeId};

/// A rejected edge-editing request. The graph is left unchanged in every
/// case; the message is surfaced to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// One of the requested endpoints is not a node in the graph.
    #[error("node {0} does not exist")]
    UnknownEndpoint(NodeId),

    /// The edge is already present (in either direction).
    #[error("edge between {0} and {1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    /// Self-loops are not representable.
    #[error("cannot add edge from node {0} to itself")]
    SelfLoop(NodeId),
}

/// Adjacency-map graph over undirected edges.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Neighbor lists in input order. Iteration order is stable so that
    /// renderers see a consistent layout, but traversal order never depends
    /// on it: the engine sorts neighbors by id.
    adjacency: IndexMap<NodeId, Vec<NodeId>>,
}

impl GraphStore {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `id` exists as an adjacency key, with no neighbors yet.
    pub fn insert_node(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    /// Record `neighbor` in `node`'s list, creating the entry if needed.
    ///
    /// This is the raw building block used by the parsers; it does not
    /// validate. Interactive editing goes through [`GraphStore::add_edge`].
    pub(crate) fn insert_neighbor(&mut self, node: NodeId, neighbor: NodeId) {
        self.adjacency.entry(node).or_default().push(neighbor);
    }

    /// Whether `id` is part of the graph's node set (a key, or referenced
    /// by any edge).
    pub fn contains(&self, id: &NodeId) -> bool {
        self.adjacency.contains_key(id)
            || self.adjacency.values().any(|list| list.contains(id))
    }

    /// All node ids in the graph, in ascending order.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        let mut set: BTreeSet<NodeId> = self.adjacency.keys().cloned().collect();
        for list in self.adjacency.values() {
            set.extend(list.iter().cloned());
        }
        set
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Neighbors of `id`, merged from both directions, deduplicated, in
    /// ascending id order. Self-mentions from sloppy input are dropped.
    pub fn neighbors(&self, id: &NodeId) -> SmallVec<[NodeId; 8]> {
        let mut out: SmallVec<[NodeId; 8]> = SmallVec::new();
        if let Some(list) = self.adjacency.get(id) {
            out.extend(list.iter().cloned());
        }
        for (node, list) in &self.adjacency {
            if node != id && list.contains(id) {
                out.push(node.clone());
            }
        }
        out.retain(|n| *n != *id);
        out.sort();
        out.dedup();
        out
    }

    /// All edges as canonical keys, in ascending order.
    pub fn edges(&self) -> BTreeSet<EdgeKey> {
        let mut set = BTreeSet::new();
        for (node, list) in &self.adjacency {
            for neighbor in list {
                if neighbor != node {
                    set.insert(EdgeKey::new(node.clone(), neighbor.clone()));
                }
            }
        }
        set
    }

    /// Number of distinct (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Add a fresh node and return its id: one past the largest numeric id,
    /// or `0` for a graph with no numeric ids.
    pub fn add_node(&mut self) -> NodeId {
        let next = self
            .nodes()
            .iter()
            .filter_map(NodeId::as_num)
            .max()
            .map_or(0, |max| max + 1);
        let id = NodeId::Num(next);
        self.insert_node(id.clone());
        id
    }

    /// Add the undirected edge `{a, b}`.
    ///
    /// Fails without touching the graph when an endpoint is unknown, the
    /// edge already exists in either direction, or `a == b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !self.contains(&a) {
            return Err(GraphError::UnknownEndpoint(a));
        }
        if !self.contains(&b) {
            return Err(GraphError::UnknownEndpoint(b));
        }
        if self.neighbors(&a).contains(&b) {
            return Err(GraphError::DuplicateEdge(a, b));
        }
        self.insert_neighbor(a, b);
        Ok(())
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Whether the graph has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
