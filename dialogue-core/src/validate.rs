//! Structural validation of a loaded dialogue graph.

use crate::engine::DialogueEngine;

impl DialogueEngine {
    /// Check the graph for dangling references.
    ///
    /// Read-only: the traversal position is untouched. Returns
    /// human-readable problem descriptions; an empty list means the
    /// graph is structurally sound. Two checks run in a fixed order:
    ///
    /// 1. The starting id must resolve to a node.
    /// 2. Every response target must resolve to a node, reported in
    ///    node load order, then response order.
    ///
    /// An empty target string is not flagged — it marks the end of a
    /// conversation, not a dangling reference. Findings are warnings
    /// by design: traversal still works after them, and it is the
    /// caller's choice whether to block on a non-empty list.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.nodes.contains_key(self.starting_id.as_str()) {
            errors.push(format!(
                "Starting dialogue '{}' not found",
                self.starting_id
            ));
        }

        for node_id in &self.node_order {
            if let Some(node) = self.nodes.get(node_id) {
                for response in &node.responses {
                    let target = response.next_dialogue.as_str();
                    if !target.is_empty() && !self.nodes.contains_key(target) {
                        errors.push(format!(
                            "Dialogue '{}' references non-existent dialogue '{}'",
                            node.id, target
                        ));
                    }
                }
            }
        }

        errors
    }
}
