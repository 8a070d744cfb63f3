//! Trellis Core
//!
//! This crate provides the core engine for Trellis, an educational,
//! interactively-animated graph traversal visualizer. It implements:
//!
//! - An undirected graph store built from adjacency-list text or a
//!   structured node/edge document
//! - A visual annotation layer (node and edge statuses) plus the
//!   visitation-order log
//! - Animated BFS and DFS as suspendable step sequences with timed delays,
//!   an in-flight guard, and cooperative cancellation
//! - A session type exposing the commands a host UI wires its controls to
//!
//! Rendering itself stays outside the crate: anything implementing
//! [`render::Renderer`] receives a (graph, visual state) snapshot after
//! every visible step and maps statuses to its own output.
//!
//! # Architecture
//!
//! - `graph`: node/edge identifiers, the adjacency store, input parsing
//! - `visual`: per-node and per-edge statuses, the traversal log
//! - `engine`: the BFS/DFS step sequences, pacing, cancellation
//! - `render`: the renderer contract
//! - `session`: host-facing command surface tying the pieces together
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_core::{NullRenderer, Session};
//!
//! let mut session = Session::new(NullRenderer);
//! session.load_text("0: 1, 2\n1: 0, 3\n2: 0, 3\n3: 1, 2");
//!
//! let log = session.run_bfs(&0u64.into()).await?;
//! println!("{log}"); // 0 -> 1 -> 2 -> 3
//! ```

pub mod engine;
pub mod graph;
pub mod render;
pub mod session;
pub mod visual;

pub use engine::{
    Algorithm, CancelHandle, TraversalEngine, TraversalError, DEFAULT_STEP_DELAY,
};
pub use graph::{parse_adjacency, EdgeKey, GraphError, GraphSpec, GraphStore, NodeId};
pub use render::{NullRenderer, Renderer};
pub use session::Session;
pub use visual::{EdgeStatus, NodeStatus, SharedVisual, TraversalLog, VisualState};
