//! Depth-First Traversal
//!
//! Explicit-stack traversal, equivalent in visit order to the recursive
//! form but without recursion-depth concerns.
//!
//! # Push order
//!
//! Neighbors are pushed in *descending* id order so that the LIFO stack
//! pops them in ascending order. This mirrors sorting a neighbor list and
//! reversing it before pushing, and it is what makes the visit order
//! deterministic. A node can sit on the stack more than once when several
//! edges reach it; stale entries are skipped on pop, with no animation.

use std::collections::HashSet;

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
    let mut stack: Vec<NodeId> = vec![start.clone()];

    info!(node = %start, "running DFS");

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            // Reached earlier through another edge; nothing to animate.
            debug!(node = %current, "skipping stale stack entry");
            continue;
        }

        info!(node = %current, "visiting node");
        pacer.mark_node(&current, NodeStatus::Visiting);
        pacer.render();
        pacer.pause(Beat::Full).await?;

        pacer.mark_node(&current, NodeStatus::Visited);
        pacer.render();
        pacer.pause(Beat::Half).await?;

        log.push(current.clone());

        // Descending here + LIFO pop = ascending exploration order.
        for neighbor in pacer.graph().neighbors(&current).into_iter().rev() {
            let key = EdgeKey::new(current.clone(), neighbor.clone());
            if !visited.contains(&neighbor) {
                pacer.mark_edge(key.clone(), EdgeStatus::Traversing);
                pacer.render();
                pacer.pause(Beat::Half).await?;

                stack.push(neighbor);

                pacer.mark_edge(key, EdgeStatus::TreeEdge);
                pacer.render();
            } else {
                // Back edge: far endpoint already visited.
                pacer.mark_edge(key, EdgeStatus::CrossEdge);
                pacer.render();
                pacer.pause(Beat::Half).await?;
            }
        }
    }

    info!(path = %log, "DFS complete");
    Ok(())
}
