//! Fake win notifications
//!
//! After a winning settle the page spawns exactly three ephemeral "X won
//! +N MMK" toasts, staggered at fixed offsets, each placed at a random spot
//! within a horizontal edge band and a vertical band, each self-removing on
//! its own countdown.

use rand::Rng;
use rand::prelude::SliceRandom;

use nr_stage::{Cue, NotificationSide};

/// Names shown in fake win notifications
pub const WINNER_NAMES: [&str; 7] = [
    "Josh", "Alex", "Mg Mg", "Ko Ko", "Aung Aung", "Su Su", "Zaw Zaw",
];

/// Amounts shown in fake win notifications (MMK)
pub const WIN_AMOUNTS: [&str; 6] = [
    "4,000", "15,000", "100,000", "50,000", "20,000", "5,000",
];

/// Horizontal inset band from the chosen edge (percent)
const INSET_MIN_PCT: f32 = 10.0;
const INSET_SPAN_PCT: f32 = 15.0;

/// Vertical band (percent from top)
const TOP_MIN_PCT: f32 = 40.0;
const TOP_SPAN_PCT: f32 = 20.0;

/// Roll one notification's content and placement
pub fn sample_notification<R: Rng>(rng: &mut R, index: u8) -> Cue {
    let name = WINNER_NAMES.choose(rng).copied().unwrap_or(WINNER_NAMES[0]);
    let amount = WIN_AMOUNTS.choose(rng).copied().unwrap_or(WIN_AMOUNTS[0]);

    let side = if rng.gen_bool(0.5) {
        NotificationSide::Left
    } else {
        NotificationSide::Right
    };

    Cue::NotificationShow {
        index,
        name: name.to_string(),
        amount: amount.to_string(),
        side,
        inset_pct: INSET_MIN_PCT + rng.gen_range(0.0..INSET_SPAN_PCT),
        top_pct: TOP_MIN_PCT + rng.gen_range(0.0..TOP_SPAN_PCT),
    }
}
