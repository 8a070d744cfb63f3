//! Traversal Engine
//!
//! The engine drives everything: it reads the graph, writes the visual
//! state, asks the renderer to draw, and suspends between visible steps.
//!
//! # How It Works
//!
//! 1. A run begins by taking the in-flight guard. Only one traversal may
//!    execute against a graph/visual-state pair at a time; a second trigger
//!    while one is live fails with [`TraversalError::AlreadyRunning`]
//!    instead of interleaving animations.
//!
//! 2. The start node is validated *before* any state is touched, so a bad
//!    start leaves the visualization exactly as it was.
//!
//! 3. The visual state and log are reset, and the algorithm plays out as a
//!    sequence of (mutate, render, suspend) steps paced by the step delay.
//!    Primary steps last a full delay, secondary sub-steps half of one.
//!
//! 4. At every suspension point the cancel flag is checked. Cancellation
//!    aborts the loop and leaves the visual state partial; there is no
//!    rollback.
//!
//! # Determinism
//!
//! Neighbor exploration is in ascending id order for both algorithms (DFS
//! achieves it by pushing in descending order onto its LIFO stack), so the
//! same graph and start node always produce the same log.

mod bfs;
mod dfs;
mod pacer;

pub use pacer::CancelHandle;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use thiserror::Error;

use crate::graph::{GraphStore, NodeId};
use crate::render::Renderer;
use crate::visual::{TraversalLog, VisualState};
use pacer::Pacer;

/// Base delay between primary animation steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);

/// Why a traversal run did not complete. None of these are fatal to the
/// host; they degrade to a status message and a safe state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The requested start node is not part of the graph's node set.
    /// Raised before any visual state is mutated.
    #[error("start node {0} not found in the graph")]
    StartNodeNotFound(NodeId),

    /// Another traversal is already in flight against this engine.
    #[error("a traversal is already running")]
    AlreadyRunning,

    /// The run was cancelled at a suspension point. The visual state is
    /// left wherever the run got to.
    #[error("traversal cancelled")]
    Cancelled,
}

/// Which algorithm a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
}

/// Releases the in-flight flag when a run ends, however it ends.
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, TraversalError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| Self(flag))
            .map_err(|_| TraversalError::AlreadyRunning)
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The animated traversal engine.
///
/// Owns the renderer and the pacing/cancellation machinery; borrows the
/// graph read-only and the visual state through its lock for each run.
pub struct TraversalEngine<R: Renderer> {
    renderer: R,
    step_delay: Duration,
    running: AtomicBool,
    cancel: CancelHandle,
}

impl<R: Renderer> TraversalEngine<R> {
    /// Create an engine with the default step delay.
    pub fn new(renderer: R) -> Self {
        Self::with_step_delay(renderer, DEFAULT_STEP_DELAY)
    }

    /// Create an engine with a custom step delay. Tests use
    /// `Duration::ZERO` to decouple correctness from wall-clock time.
    pub fn with_step_delay(renderer: R, step_delay: Duration) -> Self {
        Self {
            renderer,
            step_delay,
            running: AtomicBool::new(false),
            cancel: CancelHandle::new(),
        }
    }

    /// The renderer this engine draws through.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Current base step delay.
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Change the base step delay. Takes effect from the next run.
    pub fn set_step_delay(&mut self, delay: Duration) {
        self.step_delay = delay;
    }

    /// Handle for cancelling an in-flight run from outside.
    ///
    /// The handle stays valid across runs; the flag is re-armed each time a
    /// run starts.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Whether a run is currently in flight.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run an animated breadth-first traversal from `start`.
    ///
    /// On success the log holds every node reachable from `start`, in
    /// non-decreasing distance order.
    pub async fn run_bfs(
        &self,
        graph: &GraphStore,
        visual: &RwLock<VisualState>,
        log: &mut TraversalLog,
        start: &NodeId,
    ) -> Result<(), TraversalError> {
        self.run(Algorithm::Bfs, graph, visual, log, start).await
    }

    /// Run an animated depth-first traversal from `start`.
    pub async fn run_dfs(
        &self,
        graph: &GraphStore,
        visual: &RwLock<VisualState>,
        log: &mut TraversalLog,
        start: &NodeId,
    ) -> Result<(), TraversalError> {
        self.run(Algorithm::Dfs, graph, visual, log, start).await
    }

    /// Shared run prologue: guard, start validation, state reset.
    async fn run(
        &self,
        algorithm: Algorithm,
        graph: &GraphStore,
        visual: &RwLock<VisualState>,
        log: &mut TraversalLog,
        start: &NodeId,
    ) -> Result<(), TraversalError> {
        let _guard = RunGuard::acquire(&self.running)?;
        if !graph.contains(start) {
            return Err(TraversalError::StartNodeNotFound(start.clone()));
        }
        self.cancel.rearm();

        let pacer = Pacer::new(graph, visual, &self.renderer, self.step_delay, &self.cancel);
        log.clear();
        pacer.reset_visual();
        pacer.render();

        match algorithm {
            Algorithm::Bfs => bfs::run(&pacer, log, start).await,
            Algorithm::Dfs => dfs::run(&pacer, log, start).await,
        }
    }
}
