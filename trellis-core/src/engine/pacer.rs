//! Step Pacing
//!
//! A traversal run is a sequence of (mutate, render, suspend) steps. The
//! [`Pacer`] bundles everything one step needs: the graph being read, the
//! shared visual state being written, the renderer, the base delay, and the
//! cancel flag checked at every suspension point.
//!
//! Suspension happens *only* inside [`Pacer::pause`], never mid-mutation,
//! so a renderer always observes a consistent snapshot. Tests run with a
//! zero base delay, which skips the timer but still honors cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use super::TraversalError;
use crate::graph::{EdgeKey, GraphStore, NodeId};
use crate::render::Renderer;
use crate::visual::{EdgeStatus, NodeStatus, VisualState};

/// How long a suspension point lasts, relative to the base step delay.
///
/// Primary steps (a node being visited) take a full beat; secondary
/// sub-steps (edge highlights, mark-as-visited) take half of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Beat {
    Full,
    Half,
}

/// Cloneable cancellation flag for an in-flight traversal.
///
/// Raising it makes the next suspension point abort the run with
/// [`TraversalError::Cancelled`], leaving the visual state wherever the run
/// got to. The flag is re-armed when a new run starts.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Create a fresh, unraised handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the in-flight run stop at its next suspension point.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Lower the flag for a new run.
    pub(crate) fn rearm(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Everything one animation step needs, borrowed for the duration of a run.
pub(crate) struct Pacer<'a, R: Renderer> {
    graph: &'a GraphStore,
    visual: &'a RwLock<VisualState>,
    renderer: &'a R,
    base_delay: Duration,
    cancel: &'a CancelHandle,
}

impl<'a, R: Renderer> Pacer<'a, R> {
    pub(crate) fn new(
        graph: &'a GraphStore,
        visual: &'a RwLock<VisualState>,
        renderer: &'a R,
        base_delay: Duration,
        cancel: &'a CancelHandle,
    ) -> Self {
        Self {
            graph,
            visual,
            renderer,
            base_delay,
            cancel,
        }
    }

    /// The graph this run is traversing.
    pub(crate) fn graph(&self) -> &GraphStore {
        self.graph
    }

    /// Set a node's visual status. The write lock is released before this
    /// returns; no lock is ever held across a suspension point.
    pub(crate) fn mark_node(&self, id: &NodeId, status: NodeStatus) {
        self.visual.write().set_node(id.clone(), status);
    }

    /// Set an edge's visual status.
    pub(crate) fn mark_edge(&self, key: EdgeKey, status: EdgeStatus) {
        self.visual.write().set_edge(key, status);
    }

    /// Reset the visual state for this run's graph.
    pub(crate) fn reset_visual(&self) {
        self.visual.write().reset(self.graph);
    }

    /// Hand the renderer a snapshot of the current state.
    pub(crate) fn render(&self) {
        let visual = self.visual.read();
        self.renderer.render(self.graph, &visual);
    }

    /// Suspend for a full or half beat, then check for cancellation.
    ///
    /// Cancellation is also checked before sleeping, so a flag raised while
    /// the run was between steps (or a zero-delay test run) still aborts at
    /// the very next suspension point.
    pub(crate) async fn pause(&self, beat: Beat) -> Result<(), TraversalError> {
        if self.cancel.is_cancelled() {
            return Err(TraversalError::Cancelled);
        }
        let delay = match beat {
            Beat::Full => self.base_delay,
            Beat::Half => self.base_delay / 2,
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.cancel.is_cancelled() {
            return Err(TraversalError::Cancelled);
        }
        Ok(())
    }
}
