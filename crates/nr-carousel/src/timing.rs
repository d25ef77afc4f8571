//! Spin timing configuration

use serde::{Deserialize, Serialize};

/// Timing of the spin/settle sequence
///
/// Defaults mirror the landing page: a 3 s spin ticking every 100 ms with a
/// tick sound every 200 ms, three notifications staggered 400/1200/2000 ms
/// after settle, and the jackpot finale a full spin duration after settle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Total shuffle duration before the column stops (ms)
    pub spin_duration_ms: f64,

    /// Interval between shuffle frames (ms)
    pub tick_interval_ms: f64,

    /// Elapsed-time cadence of the tick sound (ms)
    pub tick_sound_every_ms: f64,

    /// Delay from settle to the first notification (ms)
    pub notification_first_delay_ms: f64,

    /// Spacing between consecutive notifications (ms)
    pub notification_spacing_ms: f64,

    /// How long each notification stays up (ms)
    pub notification_display_ms: f64,

    /// Notifications spawned per winning settle
    pub notification_count: u8,

    /// Delay from settle to the jackpot chord + confetti (ms)
    pub finale_delay_ms: f64,
}

impl SpinTiming {
    /// Landing page timing
    pub fn normal() -> Self {
        Self {
            spin_duration_ms: 3000.0,
            tick_interval_ms: 100.0,
            tick_sound_every_ms: 200.0,
            notification_first_delay_ms: 400.0,
            notification_spacing_ms: 800.0,
            notification_display_ms: 3000.0,
            notification_count: 3,
            finale_delay_ms: 3000.0,
        }
    }

    /// Scale every duration by a factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            spin_duration_ms: self.spin_duration_ms * factor,
            tick_interval_ms: self.tick_interval_ms * factor,
            tick_sound_every_ms: self.tick_sound_every_ms * factor,
            notification_first_delay_ms: self.notification_first_delay_ms * factor,
            notification_spacing_ms: self.notification_spacing_ms * factor,
            notification_display_ms: self.notification_display_ms * factor,
            notification_count: self.notification_count,
            finale_delay_ms: self.finale_delay_ms * factor,
        }
    }

    /// Number of shuffle ticks in a full spin
    pub fn total_ticks(&self) -> u32 {
        (self.spin_duration_ms / self.tick_interval_ms).round() as u32
    }

    /// Ticks between tick sounds
    pub fn sound_period_ticks(&self) -> u32 {
        (self.tick_sound_every_ms / self.tick_interval_ms).round().max(1.0) as u32
    }

    /// Offset from settle start of the i-th notification
    pub fn notification_offset_ms(&self, index: u8) -> f64 {
        self.notification_first_delay_ms + index as f64 * self.notification_spacing_ms
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_timing() {
        let t = SpinTiming::normal();
        assert_eq!(t.total_ticks(), 30);
        assert_eq!(t.sound_period_ticks(), 2);
        assert_eq!(t.notification_offset_ms(0), 400.0);
        assert_eq!(t.notification_offset_ms(1), 1200.0);
        assert_eq!(t.notification_offset_ms(2), 2000.0);
    }

    #[test]
    fn test_scaled_preserves_tick_count() {
        let t = SpinTiming::normal().scaled(0.5);
        assert_eq!(t.spin_duration_ms, 1500.0);
        assert_eq!(t.total_ticks(), 30);
        assert_eq!(t.notification_count, 3);
    }
}
