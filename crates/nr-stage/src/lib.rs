//! # nr-stage — Cue taxonomy for NeonReels
//!
//! A Cue is NOT a sound and NOT an animation. A Cue is the SEMANTIC MEANING
//! of a side effect the carousel engine requests at a transition point:
//! a tick of the spin, the column stop thud, the jackpot chord, a confetti
//! burst, a fake win notification appearing or expiring.
//!
//! The audio and visual layers subscribe to cues; the engine never calls
//! into rendering or audio technology directly.

mod cue;
mod sink;

pub use cue::*;
pub use sink::*;
