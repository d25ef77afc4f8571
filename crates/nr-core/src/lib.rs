//! nr-core: Shared types for NeonReels
//!
//! This crate provides the foundational data model used across the NeonReels
//! crates: game entries, provider tags, site presentation config, and the
//! provider-grouped catalog the carousel engine draws its pools from.

mod catalog;
mod error;
mod provider;

pub use catalog::*;
pub use error::*;
pub use provider::*;
