//! Append-only container for finalized drawings.

use super::shape::{Drawing, DrawingId};
use serde::Serialize;

/// All finalized drawings of the session, in creation order.
///
/// Only append and clear-all are exposed: drawings are never edited in place and
/// cannot be removed one at a time. Callers only ever get shared references.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DrawingStore {
    /// First = bottom layer, last = top layer
    drawings: Vec<Drawing>,
}

impl DrawingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a drawing on top of the existing ones. No deduplication, no limit.
    pub fn append(&mut self, drawing: Drawing) {
        self.drawings.push(drawing);
    }

    /// Removes every drawing.
    pub fn clear(&mut self) {
        self.drawings.clear();
    }

    pub fn count(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Drawing> {
        self.drawings.iter()
    }

    pub fn as_slice(&self) -> &[Drawing] {
        &self.drawings
    }

    pub fn get(&self, id: DrawingId) -> Option<&Drawing> {
        self.drawings.iter().find(|drawing| drawing.id == id)
    }

    pub fn last(&self) -> Option<&Drawing> {
        self.drawings.last()
    }
}
