//! Graph Identifiers
//!
//! This module defines the identifier types used throughout the graph:
//! node ids and the canonical undirected edge key derived from them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a node in the graph.
///
/// Ids come from two places: interactive editing, which hands out numeric
/// ids, and free-form adjacency-list text, where any token is a valid id.
/// Numeric tokens are stored as `Num` so that `10` sorts after `2` and so
/// that "next id = max + 1" is well defined; everything else is a `Name`.
///
/// The total order (numerics first, then names, each compared in their own
/// domain) is what "ascending identifier order" means for traversal and
/// what `min`/`max` means for edge canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Numeric identifier, as produced by interactive `add_node`.
    Num(u64),

    /// Symbolic identifier, as produced by adjacency-list text.
    Name(String),
}

impl NodeId {
    /// The numeric value, if this id is numeric.
    pub fn as_num(&self) -> Option<u64> {
        match self {
            NodeId::Num(n) => Some(*n),
            NodeId::Name(_) => None,
        }
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NodeId::Num(a), NodeId::Num(b)) => a.cmp(b),
            (NodeId::Name(a), NodeId::Name(b)) => a.cmp(b),
            (NodeId::Num(_), NodeId::Name(_)) => Ordering::Less,
            (NodeId::Name(_), NodeId::Num(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Num(n) => write!(f, "{n}"),
            NodeId::Name(s) => f.write_str(s),
        }
    }
}

impl From<&str> for NodeId {
    /// Every token is a valid id; numeric tokens become `Num`.
    fn from(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) => NodeId::Num(n),
            Err(_) => NodeId::Name(s.to_string()),
        }
    }
}

impl FromStr for NodeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl From<u64> for NodeId {
    fn from(n: u64) -> Self {
        NodeId::Num(n)
    }
}

/// Canonical key for an undirected edge.
///
/// The two endpoints are stored as `(min, max)` so that `{a, b}` and
/// `{b, a}` map to the same key. This is what deduplication and the
/// per-edge visual status are keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: NodeId,
    hi: NodeId,
}

impl EdgeKey {
    /// Build the canonical key for the edge between `a` and `b`.
    ///
    /// Callers guarantee `a != b`; edge construction rejects self-loops
    /// before a key is ever built.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller endpoint.
    pub fn lo(&self) -> &NodeId {
        &self.lo
    }

    /// The larger endpoint.
    pub fn hi(&self) -> &NodeId {
        &self.hi
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}
