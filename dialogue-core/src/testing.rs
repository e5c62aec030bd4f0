//! Testing utilities for dialogue graphs.
//!
//! This module provides tools for integration testing:
//! - `DialogueHarness` for scripted traversal without a front end
//! - Assertion helpers for verifying traversal state

use crate::document::sample_document;
use crate::engine::DialogueEngine;

/// A harness that walks a dialogue graph in tests.
///
/// Wraps an engine with panicking constructors and a chainable
/// `choose`, so a test scenario reads as a script.
pub struct DialogueHarness {
    /// The engine under test.
    pub engine: DialogueEngine,
}

impl DialogueHarness {
    /// Build a harness from inline JSON.
    ///
    /// Panics on a malformed document; intended for tests only.
    pub fn from_json(json: &str) -> Self {
        let mut engine = DialogueEngine::new();
        engine
            .load_from_str(json)
            .expect("harness document should parse");
        Self { engine }
    }

    /// Harness over the built-in sample conversation.
    pub fn sample() -> Self {
        let mut engine = DialogueEngine::new();
        engine.load_document(sample_document());
        Self { engine }
    }

    /// Follow a response, panicking when the engine reports a miss.
    pub fn choose(&mut self, response_id: &str) -> &mut Self {
        if let Err(e) = self.engine.choose_response(response_id) {
            panic!("choose '{response_id}' failed: {e}");
        }
        self
    }

    /// Return to the starting node.
    pub fn reset(&mut self) -> &mut Self {
        self.engine.reset();
        self
    }

    /// Id of the resolved current node, if any.
    pub fn current_id(&self) -> Option<&str> {
        self.engine.current_dialogue().map(|n| n.id.as_str())
    }

    /// Speaker name on the current node, if any.
    pub fn speaker(&self) -> Option<&str> {
        self.engine
            .current_dialogue()
            .map(|n| n.npc_name.as_str())
    }

    /// Number of responses on the current node (0 when none resolves).
    pub fn response_count(&self) -> usize {
        self.engine.response_options().len()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the harness is positioned at the given node.
#[track_caller]
pub fn assert_at(harness: &DialogueHarness, node_id: &str) {
    assert_eq!(
        harness.current_id(),
        Some(node_id),
        "Expected to be at dialogue '{node_id}', got {:?}",
        harness.current_id()
    );
}

/// Assert no node resolves for the current position.
#[track_caller]
pub fn assert_no_active_dialogue(harness: &DialogueHarness) {
    assert!(
        harness.current_id().is_none(),
        "Expected no active dialogue, but at '{}'",
        harness.current_id().unwrap_or_default()
    );
}

/// Assert the loaded graph validates clean.
#[track_caller]
pub fn assert_valid(harness: &DialogueHarness) {
    let errors = harness.engine.validate();
    assert!(
        errors.is_empty(),
        "Expected a valid dialogue graph, got: {errors:?}"
    );
}
