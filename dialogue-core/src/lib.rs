//! Dialogue tree engine.
//!
//! This crate provides:
//! - A typed loader for the JSON dialogue document format
//! - An in-memory dialogue graph with O(1) node lookup
//! - A traversal state machine driven by response selection
//! - Structural validation of dangling references
//!
//! Front ends (console, web, test harnesses) are consumers only: the
//! engine answers "what is the current node" and "what happens if the
//! player picks response R", and renders nothing itself.
//!
//! # Quick Start
//!
//! ```
//! use dialogue_core::{sample_document, DialogueEngine};
//!
//! let mut engine = DialogueEngine::new();
//! engine.load_document(sample_document());
//!
//! let node = engine.current_dialogue().expect("sample has a start");
//! println!("{}: {}", node.npc_name, node.text);
//!
//! for (id, label) in engine.response_options() {
//!     println!("  [{id}] {label}");
//! }
//!
//! engine.choose_response("r1").expect("r1 exists");
//! engine.reset();
//! ```

pub mod document;
pub mod engine;
pub mod testing;

mod validate;

// Primary public API
pub use document::{
    sample_document, DialogueDocument, DialogueNode, LoadError, Quest, Response,
};
pub use engine::{DialogueEngine, TraversalError};
pub use testing::DialogueHarness;
