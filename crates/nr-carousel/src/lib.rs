//! # nr-carousel — Carousel/Slot-Spin Engine for NeonReels
//!
//! Owns the three-card stack's content and arrangement and runs the timed
//! spin/settle sequence of the landing page's slot machine carousel.
//!
//! ## Architecture
//!
//! ```text
//! CarouselEngine
//!     │
//!     ├── ProviderCatalog (per-provider game pools, nr-core)
//!     ├── RotationOrder   (left / active / right permutation)
//!     ├── Scheduler       (single-timeline timer wheel)
//!     └── SpinTiming      (tick cadence, settle, notification offsets)
//!           │
//!           v
//!     Renderer::apply(StackSnapshot) + CueSink::emit(CueEvent)
//! ```
//!
//! The engine is driven by time: the host calls `advance_until(now_ms)` and
//! the scheduler replays due tasks in timeline order. Under a manual clock
//! the whole spin is deterministic and unit-testable.

pub mod engine;
pub mod notifications;
pub mod render;
pub mod rotation;
pub mod scheduler;
pub mod timing;

pub use engine::*;
pub use notifications::*;
pub use render::*;
pub use rotation::*;
pub use scheduler::*;
pub use timing::*;
