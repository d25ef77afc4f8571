//! Renderer — the capability through which the engine describes the stack
//!
//! The engine hands over declarative snapshots; it never touches rendering
//! technology. The DOM layer (or anything else) diffs snapshots however it
//! likes.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use nr_core::ProviderTag;

use crate::rotation::SlotPosition;

/// One rendered card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub name: String,
    pub image: String,
    /// Provider display label
    pub provider: String,
    /// RTP badge text, hidden when `None`
    pub rtp: Option<String>,
    pub position: SlotPosition,
    /// Winning highlight after a settle
    pub winning: bool,
}

/// Declarative state of the whole stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSnapshot {
    /// Cards in stack index order (up to 3; fewer on undersized pools)
    pub cards: Vec<CardView>,
    /// Shuffle animation running
    pub spinning: bool,
    /// Lock presentation
    pub locked: bool,
    /// Active provider
    pub provider: ProviderTag,
}

/// Applies stack snapshots to some presentation layer
pub trait Renderer {
    fn apply(&mut self, snapshot: &StackSnapshot);
}

/// Renderer that discards everything
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn apply(&mut self, _snapshot: &StackSnapshot) {}
}

/// Renderer that records every snapshot, for tests
///
/// Clones share the same recording, mirroring [`nr_stage::RecordingCueSink`].
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    snapshots: Arc<Mutex<Vec<StackSnapshot>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All snapshots applied so far
    pub fn snapshots(&self) -> Vec<StackSnapshot> {
        self.snapshots.lock().clone()
    }

    /// The most recent snapshot
    pub fn last(&self) -> Option<StackSnapshot> {
        self.snapshots.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.snapshots.lock().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn apply(&mut self, snapshot: &StackSnapshot) {
        self.snapshots.lock().push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_shares_storage() {
        let recorder = RecordingRenderer::new();
        let mut handle = recorder.clone();

        let snapshot = StackSnapshot {
            cards: vec![],
            spinning: false,
            locked: true,
            provider: ProviderTag::Jili,
        };
        handle.apply(&snapshot);

        assert_eq!(recorder.snapshots().len(), 1);
        assert!(recorder.last().unwrap().locked);
    }
}
