//! Integration Tests for the Traversal Visualizer
//!
//! These tests drive whole sessions the way a host UI would: load a graph,
//! trigger traversals, edit the graph, and observe the rendered snapshots.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use trellis_core::{
    EdgeKey, EdgeStatus, GraphError, GraphSpec, GraphStore, NodeId, NodeStatus, NullRenderer,
    Renderer, Session, TraversalError, VisualState,
};

/// Renderer that records a status snapshot of every frame it is handed.
#[derive(Clone, Default)]
struct RecordingRenderer {
    frames: Arc<Mutex<Vec<HashMap<NodeId, NodeStatus>>>>,
}

impl RecordingRenderer {
    fn frames(&self) -> Vec<HashMap<NodeId, NodeStatus>> {
        self.frames.lock().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, graph: &GraphStore, visual: &VisualState) {
        let snapshot = graph
            .nodes()
            .into_iter()
            .map(|id| {
                let status = visual.node_status(&id);
                (id, status)
            })
            .collect();
        self.frames.lock().push(snapshot);
    }
}

const SAMPLE: &str = "0: 1, 2\n1: 0, 3\n2: 0, 3\n3: 1, 2, 4\n4: 3, 5\n5: 4";

fn sample_session() -> Session<NullRenderer> {
    let mut session = Session::new(NullRenderer).with_step_delay(Duration::ZERO);
    session.load_text(SAMPLE);
    session
}

fn ids(log: &trellis_core::TraversalLog) -> Vec<u64> {
    log.as_slice().iter().filter_map(NodeId::as_num).collect()
}

/// The reference scenario: BFS visits 0,1,2,3,4,5.
#[tokio::test]
async fn bfs_reference_scenario() {
    let mut session = sample_session();
    let log = session.run_bfs(&0u64.into()).await.unwrap();
    assert_eq!(ids(&log), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(log.to_string(), "0 -> 1 -> 2 -> 3 -> 4 -> 5");
}

/// The reference scenario: DFS visits 0,1,3,2,4,5 via the reversed-push rule.
#[tokio::test]
async fn dfs_reference_scenario() {
    let mut session = sample_session();
    let log = session.run_dfs(&0u64.into()).await.unwrap();
    assert_eq!(ids(&log), vec![0, 1, 3, 2, 4, 5]);
}

/// BFS visits every reachable node exactly once; the log length equals the
/// size of the reachable set.
#[tokio::test]
async fn bfs_covers_reachable_set_exactly_once() {
    let mut session = sample_session();
    let log = session.run_bfs(&0u64.into()).await.unwrap();

    assert_eq!(log.len(), session.graph().node_count());
    let mut seen = ids(&log);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), log.len());
}

/// BFS layer property: nodes closer to the start appear earlier in the log.
#[tokio::test]
async fn bfs_visits_in_nondecreasing_distance_order() {
    // Distances from 0: {0:0, 1:1, 2:1, 3:2, 4:3, 5:4}.
    let dist: HashMap<u64, usize> =
        [(0, 0), (1, 1), (2, 1), (3, 2), (4, 3), (5, 4)].into_iter().collect();

    let mut session = sample_session();
    let log = session.run_bfs(&0u64.into()).await.unwrap();
    let order = ids(&log);

    for pair in order.windows(2) {
        assert!(
            dist[&pair[0]] <= dist[&pair[1]],
            "{} (dist {}) visited before {} (dist {})",
            pair[0],
            dist[&pair[0]],
            pair[1],
            dist[&pair[1]]
        );
    }
}

/// A missing start node fails both algorithms and mutates nothing.
#[tokio::test]
async fn missing_start_node_is_reported_not_fatal() {
    let mut session = sample_session();
    let start: NodeId = "Z".into();

    let bfs = session.run_bfs(&start).await;
    assert_eq!(bfs, Err(TraversalError::StartNodeNotFound(start.clone())));
    let dfs = session.run_dfs(&start).await;
    assert_eq!(dfs, Err(TraversalError::StartNodeNotFound(start)));

    assert!(session.visual().read().is_all_unvisited());
    assert!(session.log().is_empty());
}

/// Resetting the visualization and re-running produces an identical log.
#[tokio::test]
async fn rerun_after_reset_is_idempotent() {
    let mut session = sample_session();
    let first = session.run_dfs(&0u64.into()).await.unwrap();

    session.reset_visualization();
    assert!(session.visual().read().is_all_unvisited());

    let second = session.run_dfs(&0u64.into()).await.unwrap();
    assert_eq!(first, second);
}

/// Interactive editing: add_node hands out max numeric id + 1.
#[tokio::test]
async fn add_node_assigns_next_numeric_id() {
    let mut session = Session::new(NullRenderer).with_step_delay(Duration::ZERO);
    session.load_text("0: 2\n2: 0, 5\n5: 2");

    assert_eq!(session.add_node(), NodeId::Num(6));
}

/// Interactive editing: the reverse duplicate of an existing edge is
/// rejected and the edge count is unchanged.
#[tokio::test]
async fn duplicate_edge_is_rejected_in_both_directions() {
    let mut session = Session::new(NullRenderer).with_step_delay(Duration::ZERO);
    let a = session.add_node();
    let b = session.add_node();

    session.add_edge(a.clone(), b.clone()).unwrap();
    assert_eq!(session.graph().edge_count(), 1);

    assert_eq!(
        session.add_edge(b.clone(), a.clone()),
        Err(GraphError::DuplicateEdge(b, a))
    );
    assert_eq!(session.graph().edge_count(), 1);
}

/// Interactive editing: self-loops and unknown endpoints are no-ops.
#[tokio::test]
async fn invalid_edge_requests_change_nothing() {
    let mut session = Session::new(NullRenderer).with_step_delay(Duration::ZERO);
    let a = session.add_node();

    assert_eq!(
        session.add_edge(a.clone(), a.clone()),
        Err(GraphError::SelfLoop(a.clone()))
    );
    assert_eq!(
        session.add_edge(a, NodeId::Num(99)),
        Err(GraphError::UnknownEndpoint(NodeId::Num(99)))
    );
    assert_eq!(session.graph().edge_count(), 0);
}

/// clear_graph empties everything; reset_graph restores the loaded graph.
#[tokio::test]
async fn clear_and_reset_graph() {
    let mut session = sample_session();
    assert_eq!(session.graph().node_count(), 6);

    session.clear_graph();
    assert!(session.graph().is_empty());

    session.reset_graph();
    assert_eq!(session.graph().node_count(), 6);
    let log = session.run_bfs(&0u64.into()).await.unwrap();
    assert_eq!(log.len(), 6);
}

/// Structured (node-list + edge-list) input drives the same engine.
#[tokio::test]
async fn structured_input_matches_text_input() {
    let json = r#"{
        "nodes": [
            { "id": 0, "x": 100.0, "y": 100.0 },
            { "id": 1, "x": 250.0, "y": 100.0 },
            { "id": 2, "x": 100.0, "y": 250.0 },
            { "id": 3, "x": 250.0, "y": 250.0 },
            { "id": 4, "x": 400.0, "y": 175.0 },
            { "id": 5, "x": 550.0, "y": 175.0 }
        ],
        "edges": [
            { "source": 0, "target": 1 },
            { "source": 0, "target": 2 },
            { "source": 1, "target": 3 },
            { "source": 2, "target": 3 },
            { "source": 3, "target": 4 },
            { "source": 4, "target": 5 }
        ]
    }"#;
    let spec = GraphSpec::from_json(json).unwrap();

    let mut session = Session::new(NullRenderer).with_step_delay(Duration::ZERO);
    session.load_spec(&spec);

    let log = session.run_bfs(&0u64.into()).await.unwrap();
    assert_eq!(ids(&log), vec![0, 1, 2, 3, 4, 5]);
}

/// Every node moves Unvisited -> Visiting -> Visited across the rendered
/// frames, and the final frame shows the whole reachable set visited.
#[tokio::test]
async fn rendered_frames_show_status_lifecycle() {
    let renderer = RecordingRenderer::default();
    let mut session =
        Session::with_graph(trellis_core::parse_adjacency(SAMPLE), renderer.clone())
            .with_step_delay(Duration::ZERO);

    session.run_bfs(&0u64.into()).await.unwrap();
    let frames = renderer.frames();
    assert!(!frames.is_empty());

    for node in session.graph().nodes() {
        let statuses: Vec<NodeStatus> = frames
            .iter()
            .filter_map(|frame| frame.get(&node).copied())
            .collect();
        let first_visiting = statuses.iter().position(|s| *s == NodeStatus::Visiting);
        let first_visited = statuses.iter().position(|s| *s == NodeStatus::Visited);

        let visiting = first_visiting.expect("node was never highlighted");
        let visited = first_visited.expect("node was never marked visited");
        assert!(visiting < visited, "node {node} visited before highlighted");
        // Never regresses to Visiting after being marked Visited.
        assert!(statuses[visited..].iter().all(|s| *s == NodeStatus::Visited));
    }

    let last = frames.last().unwrap();
    assert!(last.values().all(|s| *s == NodeStatus::Visited));
}

/// Edge statuses are keyed canonically: a back edge examined from the
/// higher-id side lands on the same (min, max) key, not a self-pairing.
#[tokio::test]
async fn back_edges_are_recorded_under_canonical_keys() {
    // Triangle: 0-1, 0-2, 1-2. DFS from 0 follows 0-1 then 1-2; the edges
    // back to 0 are examined from the higher-id side.
    let mut session = Session::new(NullRenderer).with_step_delay(Duration::ZERO);
    session.load_text("0: 1, 2\n1: 0, 2\n2: 0, 1");

    session.run_dfs(&0u64.into()).await.unwrap();

    let visual = session.visual();
    let state = visual.read();
    for (a, b) in [(0u64, 1u64), (0, 2), (1, 2)] {
        let status = state.edge_status(&EdgeKey::new(a.into(), b.into()));
        assert_ne!(
            status,
            EdgeStatus::Unvisited,
            "edge {a}-{b} was never annotated"
        );
    }
}

/// Cancellation through the session handle aborts the run at a suspension
/// point and leaves a partial log.
#[tokio::test]
async fn cancel_handle_aborts_in_flight_run() {
    let mut session = Session::new(NullRenderer).with_step_delay(Duration::from_millis(5));
    session.load_text(SAMPLE);
    let cancel = session.cancel_handle();

    let start: NodeId = 0u64.into();
    let run = session.run_bfs(&start);
    tokio::pin!(run);

    // Let the run reach its first suspension point, then cancel it.
    let first = futures_poll_once(run.as_mut()).await;
    assert!(first.is_none());
    cancel.cancel();

    assert_eq!(run.await, Err(TraversalError::Cancelled));
}

/// Poll a future exactly once, returning its output if it completed.
async fn futures_poll_once<F: std::future::Future>(
    mut fut: std::pin::Pin<&mut F>,
) -> Option<F::Output> {
    use std::task::Poll;
    std::future::poll_fn(move |cx| match fut.as_mut().poll(cx) {
        Poll::Ready(out) => Poll::Ready(Some(out)),
        Poll::Pending => Poll::Ready(None),
    })
    .await
}
