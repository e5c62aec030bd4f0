//! Dialogue document wire format and loading.
//!
//! Typed model of the JSON dialogue format shared by every front end:
//! a starting node id, the dialogue node records, and optional quest
//! records. Parsing is strict at the boundary — either the required
//! fields all arrive typed, or the whole load fails with a
//! [`LoadError`] and nothing escapes half-built.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from reading, parsing, or writing a dialogue document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A complete dialogue document as stored on disk.
///
/// `starting_dialogue` and `dialogues` are required; a document missing
/// either fails to parse. `quests` defaults to empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueDocument {
    /// Id of the node a fresh conversation starts at.
    pub starting_dialogue: String,

    /// All dialogue nodes, in authoring order.
    pub dialogues: Vec<DialogueNode>,

    /// Quest records carried alongside the graph.
    #[serde(default)]
    pub quests: Vec<Quest>,
}

/// A single dialogue screen: who speaks, what they say, and the
/// responses the player may pick from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueNode {
    /// Unique id across the document.
    pub id: String,

    /// Display name of the speaker.
    pub npc_name: String,

    /// Body text spoken by the NPC.
    pub text: String,

    /// Selectable responses, in display order. A node with none is a
    /// valid end of conversation.
    #[serde(default)]
    pub responses: Vec<Response>,
}

/// A selectable response on a dialogue node.
///
/// `id` only has to be unique within its owning node. `next_dialogue`
/// is a reference by id, resolved when the response is followed rather
/// than at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub id: String,

    /// Label shown to the player.
    pub text: String,

    /// Id of the node this response leads to. Empty means the
    /// conversation ends here.
    pub next_dialogue: String,
}

/// A quest record attached to a dialogue document.
///
/// The engine stores these keyed by id but never interprets them;
/// any fields beyond `id` pass through opaquely for front ends to use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,

    /// Everything else the record carried, untouched.
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl DialogueDocument {
    /// Parse a document from a JSON string.
    ///
    /// Used by embedding contexts that have no filesystem path, such
    /// as a browser upload handed over as text.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to a JSON file.
    ///
    /// The engine never mutates documents; this exists so an editing
    /// front end can persist a finished document it assembled itself.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let content = self.to_json_pretty()?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Create a small built-in sample conversation.
///
/// Three nodes and one quest record; used by the example, the test
/// harness, and the console front end's demo mode.
pub fn sample_document() -> DialogueDocument {
    DialogueDocument {
        starting_dialogue: "greeting".to_string(),
        dialogues: vec![
            DialogueNode {
                id: "greeting".to_string(),
                npc_name: "Gate Guard".to_string(),
                text: "Halt! State your business in the city.".to_string(),
                responses: vec![
                    Response {
                        id: "r1".to_string(),
                        text: "I'm here to see the captain.".to_string(),
                        next_dialogue: "captain".to_string(),
                    },
                    Response {
                        id: "r2".to_string(),
                        text: "Just passing through.".to_string(),
                        next_dialogue: "farewell".to_string(),
                    },
                ],
            },
            DialogueNode {
                id: "captain".to_string(),
                npc_name: "Gate Guard".to_string(),
                text: "The captain is expecting you. Take this pass and head straight to the keep.".to_string(),
                responses: vec![Response {
                    id: "r1".to_string(),
                    text: "Thank you.".to_string(),
                    next_dialogue: "farewell".to_string(),
                }],
            },
            DialogueNode {
                id: "farewell".to_string(),
                npc_name: "Gate Guard".to_string(),
                text: "Move along, and keep out of trouble.".to_string(),
                responses: Vec::new(),
            },
        ],
        quests: vec![Quest {
            id: "gate_pass".to_string(),
            data: {
                let mut data = serde_json::Map::new();
                data.insert(
                    "name".to_string(),
                    serde_json::Value::String("Deliver the gate pass".to_string()),
                );
                data.insert("reward_gold".to_string(), serde_json::Value::from(50));
                data
            },
        }],
    }
}
