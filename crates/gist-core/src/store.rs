//! In-memory text repository.
//!
//! The store is shared by every request handler. All access goes through
//! a single `RwLock`: listings and lookups take the read side, inserts and
//! deletes the write side. Auto-assigned ids are computed while the write
//! lock is held, so two concurrent inserts can never receive the same id.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::id::TextId;
use crate::samples;

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Storage for texts keyed by [`TextId`].
pub trait TextRepository: Send + Sync {
    /// Snapshot of every stored text, ordered by id.
    fn list(&self) -> BTreeMap<TextId, String>;

    /// Fetch one text.
    fn get(&self, id: &TextId) -> Option<String>;

    /// Store `content` under `id`, replacing any previous content.
    ///
    /// With `id == None` the store picks one greater than the largest
    /// numeric id currently stored, or `1` if there is none. Returns the
    /// id the text was stored under.
    fn insert(&self, id: Option<TextId>, content: String) -> TextId;

    /// Remove a text.
    fn delete(&self, id: &TextId) -> DeleteOutcome;

    /// Number of stored texts.
    fn len(&self) -> usize;

    /// Whether the store holds no texts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe in-memory [`TextRepository`].
///
/// Contents live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTextStore {
    texts: RwLock<BTreeMap<TextId, String>>,
}

impl MemoryTextStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the bundled sample texts.
    pub fn with_samples() -> Self {
        let texts = samples::samples()
            .into_iter()
            .map(|(id, text)| (id, text.to_string()))
            .collect();
        Self {
            texts: RwLock::new(texts),
        }
    }

    fn next_numeric_id(texts: &BTreeMap<TextId, String>) -> TextId {
        let max = texts.keys().filter_map(TextId::as_numeric).max();
        TextId::Numeric(max.map_or(1, |n| n.saturating_add(1)))
    }
}

impl TextRepository for MemoryTextStore {
    fn list(&self) -> BTreeMap<TextId, String> {
        self.texts.read().clone()
    }

    fn get(&self, id: &TextId) -> Option<String> {
        self.texts.read().get(id).cloned()
    }

    fn insert(&self, id: Option<TextId>, content: String) -> TextId {
        let mut texts = self.texts.write();
        let id = id.unwrap_or_else(|| Self::next_numeric_id(&texts));
        let replaced = texts.insert(id.clone(), content).is_some();
        debug!(text_id = %id, replaced, "Stored text");
        id
    }

    fn delete(&self, id: &TextId) -> DeleteOutcome {
        match self.texts.write().remove(id) {
            Some(_) => {
                debug!(text_id = %id, "Deleted text");
                DeleteOutcome::Deleted
            }
            None => DeleteOutcome::NotFound,
        }
    }

    fn len(&self) -> usize {
        self.texts.read().len()
    }
}
