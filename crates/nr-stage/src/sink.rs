//! CueSink — the capability through which the engine emits cues

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cue::CueEvent;

/// Receives cue events from the engine
///
/// Fire-and-forget: no return value, no blocking. Implementations map cues
/// onto whatever audio/visual technology the host uses.
pub trait CueSink {
    fn emit(&mut self, event: CueEvent);
}

/// Sink that discards everything
pub struct NullCueSink;

impl CueSink for NullCueSink {
    fn emit(&mut self, _event: CueEvent) {}
}

/// Sink that records every cue, for tests and tracing
///
/// Cloning yields a handle onto the same underlying recording, so a test
/// can hand one clone to the engine and inspect through another.
#[derive(Clone, Default)]
pub struct RecordingCueSink {
    events: Arc<Mutex<Vec<CueEvent>>>,
}

impl RecordingCueSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<CueEvent> {
        self.events.lock().clone()
    }

    /// Count of recorded cues with the given type name
    pub fn count_of(&self, type_name: &str) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| e.type_name() == type_name)
            .count()
    }

    /// Drop everything recorded
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl CueSink for RecordingCueSink {
    fn emit(&mut self, event: CueEvent) {
        self.events.lock().push(event);
    }
}
