//! Graph Model
//!
//! This module implements the graph the visualizer traverses: an undirected
//! graph held as an adjacency map, plus the two input forms that build one.
//!
//! # Overview
//!
//! - Nodes are identified by [`NodeId`], which orders numeric ids
//!   numerically and symbolic ids lexicographically.
//! - Edges are undirected and canonicalized as [`EdgeKey`] (min, max) pairs
//!   for deduplication and per-edge visual status.
//! - [`GraphStore`] is the passive container: the traversal engine borrows
//!   it read-only during a run, and neighbor lookup is defensively
//!   symmetric because input construction may list an edge on one side only.
//!
//! # Design Decisions
//!
//! 1. The adjacency map is an `IndexMap` so render iteration is stable,
//!    but traversal determinism never relies on it: the engine sorts
//!    neighbors by id.
//!
//! 2. Parsing is tolerant by design. Malformed adjacency lines and
//!    self-loops are dropped with a debug event, never an error.

mod id;
mod parse;
mod store;

pub use id::{EdgeKey, NodeId};
pub use parse::{parse_adjacency, EdgeSpec, GraphSpec, NodeSpec};
pub use store::{GraphError, GraphStore};
