//! DialogueEngine - the graph store and traversal state machine.
//!
//! One engine instance owns one loaded graph and one "current node"
//! pointer. Instances are fully independent; each session or request
//! context should own its own rather than share a process-wide one.

use crate::document::{DialogueDocument, DialogueNode, LoadError, Quest};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors from traversal operations.
///
/// Both variants are recoverable: callers re-prompt or [`reset`]
/// rather than abort.
///
/// [`reset`]: DialogueEngine::reset
#[derive(Debug, Error)]
pub enum TraversalError {
    /// The current id is unset or does not resolve to a node.
    #[error("no active dialogue")]
    NoActiveDialogue,

    /// The current node has no response with the requested id.
    #[error("dialogue '{dialogue_id}' has no response '{response_id}'")]
    UnknownResponse {
        dialogue_id: String,
        response_id: String,
    },
}

/// A dialogue graph plus the traversal position within it.
///
/// Created empty ("unloaded"); a successful load populates the node
/// and quest maps and positions the current pointer at the starting
/// node. A later load fully replaces all of it — there are no merge
/// semantics. Node content is immutable once loaded; the only thing
/// the engine ever mutates afterwards is which node is current.
#[derive(Debug, Default)]
pub struct DialogueEngine {
    /// Nodes keyed by id. Duplicate ids in a document resolve
    /// last-seen-wins, matching the source format's behavior.
    pub(crate) nodes: HashMap<String, DialogueNode>,

    /// Node ids in load order (first occurrence), so validation output
    /// is deterministic.
    pub(crate) node_order: Vec<String>,

    /// Quest records keyed by id. Inert: stored for front ends, never
    /// interpreted by the engine.
    pub(crate) quests: HashMap<String, Quest>,

    /// Fixed at load time; the target of every reset.
    pub(crate) starting_id: String,

    /// The only mutable traversal state. May dangle if a response
    /// pointed at a nonexistent node and was followed anyway; lookups
    /// then report no active dialogue instead of failing hard.
    pub(crate) current_id: String,
}

impl DialogueEngine {
    /// Create an engine with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an already-parsed document, replacing any prior state.
    ///
    /// The current pointer is set to the document's starting id. Quest
    /// records are replaced too — a document without quests leaves the
    /// quest map empty.
    pub fn load_document(&mut self, document: DialogueDocument) {
        self.nodes = HashMap::with_capacity(document.dialogues.len());
        self.node_order = Vec::with_capacity(document.dialogues.len());
        for node in document.dialogues {
            let id = node.id.clone();
            // Later entries overwrite earlier ones, but the first
            // occurrence keeps its place in the load order.
            if self.nodes.insert(id.clone(), node).is_some() {
                continue;
            }
            self.node_order.push(id);
        }

        self.quests = document
            .quests
            .into_iter()
            .map(|q| (q.id.clone(), q))
            .collect();

        self.starting_id = document.starting_dialogue;
        self.current_id = self.starting_id.clone();
    }

    /// Parse a JSON string and load it.
    ///
    /// Atomic: the document is fully parsed before any engine state is
    /// touched, so a failed load leaves prior state intact.
    pub fn load_from_str(&mut self, json: &str) -> Result<(), LoadError> {
        let document = DialogueDocument::from_json_str(json)?;
        self.load_document(document);
        Ok(())
    }

    /// Read a JSON file and load it. Same atomicity as
    /// [`load_from_str`](Self::load_from_str).
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let document = DialogueDocument::from_json_file(path)?;
        self.load_document(document);
        Ok(())
    }

    /// Get the current dialogue node.
    ///
    /// Returns `None` when nothing is loaded or when the current id
    /// dangles (a followed response pointed at a nonexistent node).
    /// That is an expected, recoverable outcome — a well-behaved
    /// caller resets on observing it.
    pub fn current_dialogue(&self) -> Option<&DialogueNode> {
        self.nodes.get(self.current_id.as_str())
    }

    /// (response id, label) pairs for the current node, in display
    /// order. Empty when there is no active dialogue.
    pub fn response_options(&self) -> Vec<(&str, &str)> {
        self.current_dialogue()
            .map(|node| {
                node.responses
                    .iter()
                    .map(|r| (r.id.as_str(), r.text.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Follow a response on the current node.
    ///
    /// Response ids are only required unique within a node; the scan
    /// is in display order and the first match wins. The target id is
    /// not checked for existence here — a dangling target surfaces on
    /// the next [`current_dialogue`](Self::current_dialogue) call.
    /// On failure the current position is unchanged.
    pub fn choose_response(&mut self, response_id: &str) -> Result<(), TraversalError> {
        let node = self
            .current_dialogue()
            .ok_or(TraversalError::NoActiveDialogue)?;

        let target = node
            .responses
            .iter()
            .find(|r| r.id == response_id)
            .map(|r| r.next_dialogue.clone())
            .ok_or_else(|| TraversalError::UnknownResponse {
                dialogue_id: node.id.clone(),
                response_id: response_id.to_string(),
            })?;

        self.current_id = target;
        Ok(())
    }

    /// Return to the starting node. Always succeeds, even from a
    /// dangling position, because the starting id is fixed at load.
    pub fn reset(&mut self) {
        self.current_id = self.starting_id.clone();
    }

    /// Look up any node by id.
    pub fn node(&self, id: &str) -> Option<&DialogueNode> {
        self.nodes.get(id)
    }

    /// Look up a quest record by id.
    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// All quest records, keyed by id.
    pub fn quests(&self) -> &HashMap<String, Quest> {
        &self.quests
    }

    /// Id of the starting node, empty before the first load.
    pub fn starting_id(&self) -> &str {
        &self.starting_id
    }

    /// Id the current pointer holds. May be empty (unloaded, or a
    /// conversation that ended) or dangling; use
    /// [`current_dialogue`](Self::current_dialogue) to resolve it.
    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    /// Whether a document has been loaded.
    pub fn is_loaded(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of distinct nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
