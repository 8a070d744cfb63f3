//! Graph Input Parsing
//!
//! Two input forms are accepted:
//!
//! 1. Free-form adjacency-list text, one line per source node:
//!
//!    ```text
//!    0: 1, 2
//!    1: 0, 3
//!    A: B
//!    ```
//!
//!    Tolerance is deliberate: blank lines and lines without exactly one
//!    colon are skipped without surfacing an error, so pasted text with
//!    stray headings or comments still loads.
//!
//! 2. A structured node-list + edge-list document ([`GraphSpec`]), the form
//!    produced by interactive editors. Node positions ride along for the
//!    renderer's benefit; the store itself never sees them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::id::NodeId;
use super::store::GraphStore;

/// Parse adjacency-list text into a graph.
///
/// Never fails: malformed lines are dropped (with a debug event), and empty
/// input yields an empty graph. Neighbor tokens equal to the source node are
/// dropped too, since self-loops are not representable.
pub fn parse_adjacency(text: &str) -> GraphStore {
    let mut graph = GraphStore::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ':');
        let (node, rest) = match (parts.next(), parts.next()) {
            (Some(node), Some(rest)) if !node.trim().is_empty() && !rest.contains(':') => {
                (node.trim(), rest)
            }
            _ => {
                debug!(line, "skipping malformed adjacency line");
                continue;
            }
        };

        let node: NodeId = node.into();
        graph.insert_node(node.clone());
        for token in rest.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let neighbor: NodeId = token.into();
            if neighbor == node {
                debug!(%node, "dropping self-loop in adjacency line");
                continue;
            }
            graph.insert_neighbor(node.clone(), neighbor);
        }
    }

    graph
}

/// A node in the structured input form. The position is display metadata
/// owned by the renderer; the graph store ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// An edge in the structured input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: NodeId,
    pub target: NodeId,
}

/// Structured graph document: explicit node list plus edge list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Parse a `GraphSpec` from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the adjacency store this document describes. Self-loop edges
    /// are dropped with a debug event, matching the text parser's tolerance.
    pub fn to_store(&self) -> GraphStore {
        let mut graph = GraphStore::new();
        for node in &self.nodes {
            graph.insert_node(node.id.clone());
        }
        for edge in &self.edges {
            if edge.source == edge.target {
                debug!(node = %edge.source, "dropping self-loop edge in graph spec");
                continue;
            }
            graph.insert_neighbor(edge.source.clone(), edge.target.clone());
        }
        graph
    }
}
