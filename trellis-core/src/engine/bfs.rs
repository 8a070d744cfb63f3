//! Breadth-First Traversal
//!
//! FIFO-frontier traversal with the animation steps interleaved. Membership
//! in the visited set is recorded the moment a neighbor is discovered,
//! *before* its animation plays, so a node adjacent to two frontier nodes
//! is never enqueued twice.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info};

use super::pacer::{Beat, Pacer};
use super::TraversalError;
use crate::graph::{EdgeKey, NodeId};
use crate::render::Renderer;
use crate::visual::{EdgeStatus, NodeStatus, TraversalLog};

pub(crate) async fn run<R: Renderer>(
    pacer: &Pacer<'_, R>,
    log: &mut TraversalLog,
    start: &NodeId,
) -> Result<(), TraversalError> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    info!(node = %start, "running BFS");
    pacer.mark_node(start, NodeStatus::Visiting);
    pacer.render();
    pacer.pause(Beat::Full).await?;

    pacer.mark_node(start, NodeStatus::Visited);
    pacer.render();
    pacer.pause(Beat::Half).await?;

    log.push(start.clone());
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        // Ascending id order keeps the visitation order deterministic.
        for neighbor in pacer.graph().neighbors(&current) {
            let key = EdgeKey::new(current.clone(), neighbor.clone());
            if visited.insert(neighbor.clone()) {
                debug!(node = %neighbor, "discovered via tree edge");
                pacer.mark_edge(key.clone(), EdgeStatus::Traversing);
                pacer.render();
                pacer.pause(Beat::Half).await?;

                info!(node = %neighbor, "visiting node");
                pacer.mark_node(&neighbor, NodeStatus::Visiting);
                pacer.render();
                pacer.pause(Beat::Full).await?;

                pacer.mark_node(&neighbor, NodeStatus::Visited);
                pacer.render();
                pacer.pause(Beat::Half).await?;

                log.push(neighbor.clone());
                queue.push_back(neighbor);

                pacer.mark_edge(key, EdgeStatus::TreeEdge);
                pacer.render();
            } else {
                // Far endpoint already visited: a cross edge in an
                // undirected BFS. Not followed, only shown.
                pacer.mark_edge(key, EdgeStatus::CrossEdge);
                pacer.render();
                pacer.pause(Beat::Half).await?;
            }
        }
    }

    info!(path = %log, "BFS complete");
    Ok(())
}
