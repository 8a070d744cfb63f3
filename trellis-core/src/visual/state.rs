//! Visual State
//!
//! Per-node and per-edge annotations, kept separate from the graph
//! structure itself. The traversal engine is the only writer during a run;
//! a renderer may read at any time, so the state is usually shared behind
//! a [`SharedVisual`] lock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::graph::{EdgeKey, GraphStore, NodeId};

/// Visual status of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    /// Not yet reached by the current run.
    #[default]
    Unvisited,

    /// Currently being visited (the highlighted node).
    Visiting,

    /// Fully processed.
    Visited,
}

/// Visual status of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStatus {
    /// Not yet touched by the current run.
    #[default]
    Unvisited,

    /// Currently being followed (the highlighted edge).
    Traversing,

    /// Followed to reach a previously unvisited node.
    TreeEdge,

    /// Led to a node that was already visited when the edge was examined.
    CrossEdge,
}

/// Mutable annotation layer over a graph.
///
/// Statuses default to `Unvisited`: a node or edge with no entry reads as
/// unvisited, so a fresh `VisualState` is valid for any graph.
#[derive(Debug, Clone, Default)]
pub struct VisualState {
    nodes: HashMap<NodeId, NodeStatus>,
    edges: HashMap<EdgeKey, EdgeStatus>,
}

/// Visual state shared between the engine (writer) and a renderer (reader).
pub type SharedVisual = Arc<RwLock<VisualState>>;

impl VisualState {
    /// Create an empty (all-unvisited) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every node and edge of `graph` to `Unvisited`.
    ///
    /// Called at the start of every traversal run and by the host's reset
    /// command. Entries for nodes no longer in the graph are discarded.
    pub fn reset(&mut self, graph: &GraphStore) {
        self.nodes.clear();
        self.edges.clear();
        for node in graph.nodes() {
            self.nodes.insert(node, NodeStatus::Unvisited);
        }
        for edge in graph.edges() {
            self.edges.insert(edge, EdgeStatus::Unvisited);
        }
    }

    /// Status of `id`, defaulting to `Unvisited`.
    pub fn node_status(&self, id: &NodeId) -> NodeStatus {
        self.nodes.get(id).copied().unwrap_or_default()
    }

    /// Status of the edge `key`, defaulting to `Unvisited`.
    pub fn edge_status(&self, key: &EdgeKey) -> EdgeStatus {
        self.edges.get(key).copied().unwrap_or_default()
    }

    /// Set the status of a node.
    pub fn set_node(&mut self, id: NodeId, status: NodeStatus) {
        self.nodes.insert(id, status);
    }

    /// Set the status of an edge.
    pub fn set_edge(&mut self, key: EdgeKey, status: EdgeStatus) {
        self.edges.insert(key, status);
    }

    /// Whether every annotation is `Unvisited`.
    pub fn is_all_unvisited(&self) -> bool {
        self.nodes.values().all(|s| *s == NodeStatus::Unvisited)
            && self.edges.values().all(|s| *s == EdgeStatus::Unvisited)
    }
}
