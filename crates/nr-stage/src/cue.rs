//! Cue — the canonical side-effect events, with timeline timestamps

use serde::{Deserialize, Serialize};

/// Which side of the screen a notification appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSide {
    Left,
    Right,
}

/// Canonical cue — the universal language of the landing page's side effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cue {
    /// Short tick while the reels shuffle
    SpinTick,

    /// Thud when the column settles on its final cards
    ColumnStop,

    /// Lock button toggled
    LockToggle { locked: bool },

    /// Celebration chord at the finale
    JackpotChord,

    /// Parameterized confetti burst at the finale
    ConfettiBurst {
        particle_count: u32,
        spread: f32,
        origin_y: f32,
        colors: Vec<String>,
    },

    /// A fake win notification appears
    NotificationShow {
        /// Which of the staggered notifications (0-based)
        index: u8,
        name: String,
        amount: String,
        side: NotificationSide,
        /// Horizontal inset from the chosen edge, percent of viewport
        inset_pct: f32,
        /// Vertical position, percent of viewport
        top_pct: f32,
    },

    /// A fake win notification self-removes
    NotificationExpire { index: u8 },
}

impl Cue {
    /// The confetti burst the landing page fires on settle
    pub fn confetti_default() -> Self {
        Cue::ConfettiBurst {
            particle_count: 150,
            spread: 70.0,
            origin_y: 0.6,
            colors: vec![
                "#00f3ff".to_string(),
                "#bc13fe".to_string(),
                "#ffd700".to_string(),
            ],
        }
    }

    /// Cue type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Cue::SpinTick => "spin_tick",
            Cue::ColumnStop => "column_stop",
            Cue::LockToggle { .. } => "lock_toggle",
            Cue::JackpotChord => "jackpot_chord",
            Cue::ConfettiBurst { .. } => "confetti_burst",
            Cue::NotificationShow { .. } => "notification_show",
            Cue::NotificationExpire { .. } => "notification_expire",
        }
    }
}

/// A cue occurrence with its position on the spin timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueEvent {
    /// The canonical cue
    pub cue: Cue,

    /// Timestamp in milliseconds (from engine start)
    pub timestamp_ms: f64,
}

impl CueEvent {
    /// Create a new cue event
    pub fn new(cue: Cue, timestamp_ms: f64) -> Self {
        Self { cue, timestamp_ms }
    }

    /// Cue type name
    pub fn type_name(&self) -> &'static str {
        self.cue.type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_event_creation() {
        let event = CueEvent::new(Cue::ColumnStop, 3000.0);
        assert_eq!(event.timestamp_ms, 3000.0);
        assert_eq!(event.type_name(), "column_stop");
    }

    #[test]
    fn test_confetti_defaults() {
        let Cue::ConfettiBurst {
            particle_count,
            spread,
            origin_y,
            colors,
        } = Cue::confetti_default()
        else {
            panic!("expected confetti burst");
        };

        assert_eq!(particle_count, 150);
        assert_eq!(spread, 70.0);
        assert_eq!(origin_y, 0.6);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_cue_serialization_is_tagged() {
        let json = serde_json::to_string(&Cue::LockToggle { locked: true }).unwrap();
        assert!(json.contains("\"type\":\"lock_toggle\""));
        assert!(json.contains("\"locked\":true"));
    }
}
