//! Renderer Contract
//!
//! The engine never draws. After every visible mutation it hands the graph
//! and a visual-state snapshot to a [`Renderer`], which maps statuses to
//! whatever output it owns (canvas, terminal, test recording).
//!
//! `render` must be synchronous and idempotent: calling it twice with
//! unchanged state produces unchanged output. The engine relies on this and
//! re-renders freely.

use crate::graph::GraphStore;
use crate::visual::VisualState;

/// Sink for visual-state snapshots.
pub trait Renderer {
    /// Draw the graph with its current annotations.
    fn render(&self, graph: &GraphStore, visual: &VisualState);
}

/// Renderer that draws nothing. Useful for headless runs and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _graph: &GraphStore, _visual: &VisualState) {}
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, graph: &GraphStore, visual: &VisualState) {
        (**self).render(graph, visual);
    }
}
