//! QA tests for traversal and validation.
//!
//! These tests verify the traversal contract a front end leans on:
//! - Selection moves the pointer, misses leave it alone
//! - Dangling targets are survivable and reset recovers
//! - Validation reports are ordered and complete
//!
//! Run with: `cargo test -p dialogue-core --test qa_traversal`

use dialogue_core::testing::{assert_at, assert_no_active_dialogue, assert_valid};
use dialogue_core::{DialogueEngine, DialogueHarness, TraversalError};

#[test]
fn test_end_to_end_conversation() {
    let mut harness = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "n1",
            "dialogues": [
                {"id": "n1", "npc_name": "A", "text": "hi", "responses": [
                    {"id": "r1", "text": "bye", "next_dialogue": "n2"}
                ]},
                {"id": "n2", "npc_name": "A", "text": "done", "responses": []}
            ]
        }"#,
    );

    assert_valid(&harness);
    assert_at(&harness, "n1");

    harness.choose("r1");
    assert_at(&harness, "n2");

    // Terminal but valid: zero responses, still resettable.
    assert_eq!(harness.response_count(), 0);
    harness.reset();
    assert_at(&harness, "n1");
}

#[test]
fn test_miss_is_an_idempotent_no_op() {
    let mut harness = DialogueHarness::sample();

    for _ in 0..3 {
        let err = harness.engine.choose_response("absent").unwrap_err();
        assert!(matches!(err, TraversalError::UnknownResponse { .. }));
        assert_at(&harness, "greeting");
    }
}

#[test]
fn test_response_options_follow_display_order() {
    let harness = DialogueHarness::sample();
    let options = harness.engine.response_options();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0], ("r1", "I'm here to see the captain."));
    assert_eq!(options[1], ("r2", "Just passing through."));
}

#[test]
fn test_dangling_target_then_reset() {
    let mut harness = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "n1",
            "dialogues": [
                {"id": "n1", "npc_name": "A", "text": "hi", "responses": [
                    {"id": "r1", "text": "jump", "next_dialogue": "nowhere"}
                ]}
            ]
        }"#,
    );

    // The transition succeeds; the dangle shows up on the next query.
    harness.choose("r1");
    assert_no_active_dialogue(&harness);
    assert_eq!(harness.engine.current_id(), "nowhere");

    // Choosing from a dangling position is an invalid-state miss.
    let err = harness.engine.choose_response("r1").unwrap_err();
    assert!(matches!(err, TraversalError::NoActiveDialogue));

    harness.reset();
    assert_at(&harness, "n1");
}

#[test]
fn test_empty_target_ends_conversation() {
    let mut harness = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "n1",
            "dialogues": [
                {"id": "n1", "npc_name": "A", "text": "hi", "responses": [
                    {"id": "r1", "text": "leave", "next_dialogue": ""}
                ]}
            ]
        }"#,
    );

    // An empty target is the documented end marker, not a defect.
    assert_valid(&harness);

    harness.choose("r1");
    assert_no_active_dialogue(&harness);
    harness.reset();
    assert_at(&harness, "n1");
}

#[test]
fn test_cyclic_graphs_traverse_fine() {
    let mut harness = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "a",
            "dialogues": [
                {"id": "a", "npc_name": "A", "text": "ping", "responses": [
                    {"id": "go", "text": "to b", "next_dialogue": "b"}
                ]},
                {"id": "b", "npc_name": "B", "text": "pong", "responses": [
                    {"id": "go", "text": "to a", "next_dialogue": "a"}
                ]}
            ]
        }"#,
    );

    assert_valid(&harness);
    harness.choose("go").choose("go").choose("go");
    assert_at(&harness, "b");
}

#[test]
fn test_validator_exact_message_counts() {
    // One dangling edge target.
    let dangling_edge = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "X",
            "dialogues": [
                {"id": "X", "npc_name": "A", "text": "hi", "responses": [
                    {"id": "r1", "text": "go", "next_dialogue": "Y"}
                ]}
            ]
        }"#,
    );
    let errors = dangling_edge.engine.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'X'") && errors[0].contains("'Y'"));

    // One missing starting node.
    let missing_start = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "Z",
            "dialogues": [{"id": "n1", "npc_name": "A", "text": "hi"}]
        }"#,
    );
    let errors = missing_start.engine.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'Z'"));

    // Both: exactly two messages, starting-node check first.
    let both = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "Z",
            "dialogues": [
                {"id": "X", "npc_name": "A", "text": "hi", "responses": [
                    {"id": "r1", "text": "go", "next_dialogue": "Y"}
                ]}
            ]
        }"#,
    );
    let errors = both.engine.validate();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("'Z'"));
    assert!(errors[1].contains("'Y'"));
}

#[test]
fn test_warnings_do_not_block_traversal() {
    let mut harness = DialogueHarness::from_json(
        r#"{
            "starting_dialogue": "n1",
            "dialogues": [
                {"id": "n1", "npc_name": "A", "text": "hi", "responses": [
                    {"id": "ok", "text": "fine", "next_dialogue": "n2"},
                    {"id": "bad", "text": "broken", "next_dialogue": "gone"}
                ]},
                {"id": "n2", "npc_name": "A", "text": "done"}
            ]
        }"#,
    );

    assert_eq!(harness.engine.validate().len(), 1);

    // The intact path still works after the warning.
    harness.choose("ok");
    assert_at(&harness, "n2");
}

#[test]
fn test_independent_engine_instances() {
    let mut first = DialogueHarness::sample();
    let second = DialogueHarness::sample();

    first.choose("r1");

    assert_at(&first, "captain");
    assert_at(&second, "greeting");
}

#[test]
fn test_reset_before_any_load_is_harmless() {
    let mut engine = DialogueEngine::new();
    engine.reset();
    assert!(engine.current_dialogue().is_none());
    assert_eq!(engine.current_id(), "");
}
