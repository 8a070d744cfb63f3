//! Traversal Log
//!
//! The ordered record of which nodes a run visited, in the order they were
//! first highlighted. Append-only during a run, cleared at run start.

use std::fmt;

use crate::graph::NodeId;

/// Visitation order of a traversal run.
///
/// `Display` renders the arrow form shown to the user: `0 -> 1 -> 3`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalLog {
    order: Vec<NodeId>,
}

impl TraversalLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the previous run's record.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Append the next visited node.
    pub fn push(&mut self, id: NodeId) {
        self.order.push(id);
    }

    /// The visitation order so far.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.order
    }

    /// Number of nodes visited so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of `id` in the visitation order, if it was visited.
    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.order.iter().position(|n| n == id)
    }
}

impl fmt::Display for TraversalLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.order.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TraversalLog {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_arrow_separated_path() {
        let mut log = TraversalLog::new();
        log.push(NodeId::Num(0));
        log.push(NodeId::Num(1));
        log.push(NodeId::Name("end".to_string()));
        assert_eq!(log.to_string(), "0 -> 1 -> end");
    }

    #[test]
    fn empty_log_renders_empty_string() {
        assert_eq!(TraversalLog::new().to_string(), "");
    }

    #[test]
    fn clear_discards_previous_run() {
        let mut log = TraversalLog::new();
        log.push(NodeId::Num(0));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn position_reports_visitation_index() {
        let mut log = TraversalLog::new();
        log.push(NodeId::Num(4));
        log.push(NodeId::Num(2));
        assert_eq!(log.position(&NodeId::Num(2)), Some(1));
        assert_eq!(log.position(&NodeId::Num(9)), None);
    }
}
