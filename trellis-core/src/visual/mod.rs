//! Visualization State
//!
//! The annotation layer the traversal engine mutates and renderers read:
//! per-node and per-edge statuses plus the visitation-order log. Nothing in
//! here knows about pixels; a renderer maps these statuses to colors.

mod log;
mod state;

pub use log::TraversalLog;
pub use state::{EdgeStatus, NodeStatus, SharedVisual, VisualState};
