//! Traversal Session
//!
//! A session is the host-facing surface: it owns the graph, the shared
//! visual state, and the engine, and exposes the commands a UI wires its
//! controls to. There is no hidden module-level state; everything lives in
//! the session the host constructs.
//!
//! Graph-editing commands redraw immediately, mirroring an interactive
//! editor. Failed edits report an error and change nothing.

use std::time::Duration;

use tracing::info;

use crate::engine::{CancelHandle, TraversalEngine, TraversalError};
use crate::graph::{parse_adjacency, GraphError, GraphSpec, GraphStore, NodeId};
use crate::render::Renderer;
use crate::visual::{SharedVisual, TraversalLog};

/// One visualizer instance: graph, annotations, engine, renderer.
pub struct Session<R: Renderer> {
    graph: GraphStore,
    /// Snapshot taken at construction/load time, restored by `reset_graph`.
    initial: GraphStore,
    visual: SharedVisual,
    log: TraversalLog,
    engine: TraversalEngine<R>,
}

impl<R: Renderer> Session<R> {
    /// Create a session over an empty graph, with the default step delay.
    pub fn new(renderer: R) -> Self {
        Self::with_graph(GraphStore::new(), renderer)
    }

    /// Create a session over `graph`. The graph is also remembered as the
    /// initial state for [`Session::reset_graph`].
    pub fn with_graph(graph: GraphStore, renderer: R) -> Self {
        let mut session = Self {
            initial: graph.clone(),
            graph,
            visual: SharedVisual::default(),
            log: TraversalLog::new(),
            engine: TraversalEngine::new(renderer),
        };
        session.reset_visualization();
        session
    }

    /// Override the animation step delay (tests pass `Duration::ZERO`).
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.engine.set_step_delay(delay);
        self
    }

    /// Parse adjacency-list text and replace the graph with the result.
    /// Also becomes the new initial state; visuals and log are reset.
    pub fn load_text(&mut self, text: &str) {
        self.install_graph(parse_adjacency(text));
    }

    /// Replace the graph from a structured node/edge document.
    pub fn load_spec(&mut self, spec: &GraphSpec) {
        self.install_graph(spec.to_store());
    }

    /// Run an animated BFS from `start`, returning the visitation order.
    pub async fn run_bfs(&mut self, start: &NodeId) -> Result<TraversalLog, TraversalError> {
        self.engine
            .run_bfs(&self.graph, &self.visual, &mut self.log, start)
            .await?;
        Ok(self.log.clone())
    }

    /// Run an animated DFS from `start`, returning the visitation order.
    pub async fn run_dfs(&mut self, start: &NodeId) -> Result<TraversalLog, TraversalError> {
        self.engine
            .run_dfs(&self.graph, &self.visual, &mut self.log, start)
            .await?;
        Ok(self.log.clone())
    }

    /// Clear all highlights and the log, then redraw.
    pub fn reset_visualization(&mut self) {
        self.visual.write().reset(&self.graph);
        self.log.clear();
        self.redraw();
    }

    /// Restore the graph the session was constructed or last loaded with.
    pub fn reset_graph(&mut self) {
        info!("resetting graph to initial state");
        self.graph = self.initial.clone();
        self.reset_visualization();
    }

    /// Remove every node and edge, then redraw.
    pub fn clear_graph(&mut self) {
        info!("clearing graph");
        self.graph.clear();
        self.reset_visualization();
    }

    /// Add a fresh node (next numeric id) and redraw.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.graph.add_node();
        info!(node = %id, "added node");
        self.visual.write().reset(&self.graph);
        self.redraw();
        id
    }

    /// Add the undirected edge `{a, b}` and redraw. On failure the graph
    /// is unchanged and nothing is redrawn.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.graph.add_edge(a.clone(), b.clone())?;
        info!(source = %a, target = %b, "added edge");
        self.visual.write().reset(&self.graph);
        self.redraw();
        Ok(())
    }

    /// The current graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Shared handle to the visual state, for renderers that poll.
    pub fn visual(&self) -> SharedVisual {
        self.visual.clone()
    }

    /// The last run's visitation order.
    pub fn log(&self) -> &TraversalLog {
        &self.log
    }

    /// Handle for cancelling an in-flight run.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.engine.cancel_handle()
    }

    fn install_graph(&mut self, graph: GraphStore) {
        self.initial = graph.clone();
        self.graph = graph;
        self.reset_visualization();
    }

    fn redraw(&self) {
        let visual = self.visual.read();
        self.engine.renderer().render(&self.graph, &visual);
    }
}
