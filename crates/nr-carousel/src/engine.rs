//! Carousel Engine — the spin/settle state machine
//!
//! Owns the three-card stack, the rotation order, the lock flag, and the
//! scheduler that runs the timed spin sequence. All side effects go out
//! through the [`Renderer`] and [`CueSink`] capabilities; all invalid calls
//! (spin while locked, provider switch mid-spin) are silent no-ops, since
//! they represent normal UI races.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use nr_core::{GameEntry, ProviderCatalog, ProviderTag};
use nr_stage::{Cue, CueEvent, CueSink};

use crate::notifications::sample_notification;
use crate::render::{CardView, Renderer, StackSnapshot};
use crate::rotation::{Direction, RotationOrder, SlotPosition};
use crate::scheduler::{DueTask, Scheduler, SpinTask, TaskId};
use crate::timing::SpinTiming;

/// Cards in a full stack
pub const STACK_SIZE: usize = 3;

/// Engine lifecycle state
///
/// Idle → Spinning on a spin trigger (unless locked); Spinning → Settling
/// when the tick loop completes; Settling → Idle at the finale. The state
/// guard is the only re-entrancy protection, and the only one needed:
/// everything runs on one timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    Idle,
    Spinning,
    Settling,
}

/// State of one in-flight spin
#[derive(Debug)]
struct SpinSequence {
    tick_task: TaskId,
    ticks_elapsed: u32,
    /// Final stack, selected once at spin start
    final_result: Vec<GameEntry>,
}

/// The carousel/slot-spin interaction engine
pub struct CarouselEngine {
    catalog: ProviderCatalog,
    provider: ProviderTag,
    timing: SpinTiming,
    rng: StdRng,
    scheduler: Scheduler,
    state: EngineState,
    locked: bool,
    rotation: RotationOrder,
    cards: Vec<GameEntry>,
    winning_card: Option<usize>,
    spin: Option<SpinSequence>,
    notification_tasks: Vec<TaskId>,
    renderer: Box<dyn Renderer>,
    cues: Box<dyn CueSink>,
}

impl CarouselEngine {
    /// Create an engine over a catalog
    ///
    /// An empty catalog is not an error: the engine simply stays inert
    /// (every selection is a no-op) until real data is loaded.
    pub fn new(
        catalog: ProviderCatalog,
        provider: ProviderTag,
        renderer: Box<dyn Renderer>,
        cues: Box<dyn CueSink>,
    ) -> Self {
        if catalog.is_empty() {
            log::warn!("Carousel engine created with an empty catalog");
        }

        Self {
            catalog,
            provider,
            timing: SpinTiming::normal(),
            rng: StdRng::from_entropy(),
            scheduler: Scheduler::new(),
            state: EngineState::Idle,
            locked: false,
            rotation: RotationOrder::identity(),
            cards: Vec::new(),
            winning_card: None,
            spin: None,
            notification_tasks: Vec::new(),
            renderer,
            cues,
        }
    }

    /// Override the spin timing
    pub fn with_timing(mut self, timing: SpinTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Seed the RNG for reproducible sequences
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn provider(&self) -> ProviderTag {
        self.provider
    }

    /// The entries currently displayed, in stack index order
    pub fn displayed(&self) -> &[GameEntry] {
        &self.cards
    }

    pub fn rotation(&self) -> RotationOrder {
        self.rotation
    }

    pub fn timing(&self) -> &SpinTiming {
        &self.timing
    }

    /// Current timeline position (ms)
    pub fn now_ms(&self) -> f64 {
        self.scheduler.now()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OPERATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Build the initial stack from the active provider's pool
    ///
    /// Undersized pools yield fewer cards; an empty pool yields an empty
    /// stack. Never panics.
    pub fn init_stack(&mut self) {
        if self.state != EngineState::Idle {
            return;
        }
        self.rebuild_stack();
        self.render();
    }

    /// Rotate the stack — the only user-driven navigation while idle
    pub fn rotate(&mut self, direction: Direction) {
        if self.state != EngineState::Idle || self.cards.is_empty() {
            return;
        }
        self.rotation.rotate(direction);
        self.winning_card = None;
        self.render();
    }

    /// Toggle the lock flag
    pub fn set_lock(&mut self, locked: bool) {
        if self.state != EngineState::Idle || self.locked == locked {
            return;
        }
        self.locked = locked;
        let now = self.scheduler.now();
        self.emit(Cue::LockToggle { locked }, now);
        self.render();
    }

    /// Switch the active provider and rebuild the stack from its pool
    pub fn set_provider(&mut self, tag: ProviderTag) {
        if self.state != EngineState::Idle || self.locked || tag == self.provider {
            return;
        }
        self.provider = tag;
        self.rebuild_stack();
        self.render();
    }

    /// Start the spin sequence
    ///
    /// While locked the call completes immediately with the displayed cards
    /// untouched — a skipped spin, not an error. Re-entry while Spinning or
    /// Settling is ignored, so two rapid triggers produce exactly one tick
    /// loop.
    pub fn trigger_spin(&mut self) {
        if self.state != EngineState::Idle {
            return;
        }
        if self.locked {
            log::debug!("Spin skipped: stack is locked");
            return;
        }
        if self.catalog.pool(self.provider).is_empty() {
            log::warn!("Spin skipped: no games loaded for provider {}", self.provider);
            return;
        }

        self.rebuild_stack();

        let mut final_result = self.pick_unique(STACK_SIZE);
        self.fill_rtp(&mut final_result);

        self.state = EngineState::Spinning;
        let tick_task = self.scheduler.every(self.timing.tick_interval_ms, SpinTask::Tick);
        self.spin = Some(SpinSequence {
            tick_task,
            ticks_elapsed: 0,
            final_result,
        });
        self.render();
    }

    /// Advance the timeline, executing every task due up to `now_ms`
    pub fn advance_until(&mut self, now_ms: f64) {
        while let Some(due) = self.scheduler.pop_due(now_ms) {
            self.handle(due);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SPIN SEQUENCE
    // ═══════════════════════════════════════════════════════════════════════

    fn handle(&mut self, due: DueTask) {
        match due.task {
            SpinTask::Tick => self.on_tick(due.at_ms),
            SpinTask::NotificationShow(index) => self.on_notification_show(index, due.at_ms),
            SpinTask::NotificationExpire(index) => {
                self.emit(Cue::NotificationExpire { index }, due.at_ms);
            }
            SpinTask::Finale => self.on_finale(due.at_ms),
        }
    }

    fn on_tick(&mut self, at_ms: f64) {
        let Some(spin) = self.spin.as_mut() else {
            return;
        };
        spin.ticks_elapsed += 1;
        let ticks = spin.ticks_elapsed;
        let elapsed = ticks as f64 * self.timing.tick_interval_ms;

        if elapsed < self.timing.spin_duration_ms {
            // Update phase: cosmetic shuffle frame.
            let mut frame = self.pick_unique(STACK_SIZE);
            self.fill_rtp(&mut frame);
            self.cards = frame;

            if ticks % self.timing.sound_period_ticks() == 0 {
                self.emit(Cue::SpinTick, at_ms);
            }
            self.render();
        } else {
            self.settle(at_ms);
        }
    }

    /// Stop phase: runs exactly once per spin, on the same timeline tick
    /// that cancels the loop.
    fn settle(&mut self, at_ms: f64) {
        let Some(spin) = self.spin.take() else {
            return;
        };
        self.scheduler.cancel(spin.tick_task);

        self.cards = spin.final_result;
        self.emit(Cue::ColumnStop, at_ms);
        self.state = EngineState::Settling;

        let active = self.rotation.card_at(SlotPosition::Active);
        self.winning_card = (active < self.cards.len()).then_some(active);

        // Toasts from a previous settle are superseded.
        for id in self.notification_tasks.drain(..) {
            self.scheduler.cancel(id);
        }
        for i in 0..self.timing.notification_count {
            let offset = self.timing.notification_offset_ms(i);
            let id = self.scheduler.after(offset, SpinTask::NotificationShow(i));
            self.notification_tasks.push(id);
        }

        self.scheduler.after(self.timing.finale_delay_ms, SpinTask::Finale);
        self.render();
    }

    fn on_notification_show(&mut self, index: u8, at_ms: f64) {
        let cue = sample_notification(&mut self.rng, index);
        self.emit(cue, at_ms);

        let id = self
            .scheduler
            .after(self.timing.notification_display_ms, SpinTask::NotificationExpire(index));
        self.notification_tasks.push(id);
    }

    fn on_finale(&mut self, at_ms: f64) {
        self.emit(Cue::JackpotChord, at_ms);
        self.emit(Cue::confetti_default(), at_ms);
        self.state = EngineState::Idle;
        self.render();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SELECTION & CONTENT
    // ═══════════════════════════════════════════════════════════════════════

    /// Pick up to `count` distinct entries from the active pool.
    ///
    /// Uniform without-replacement sample. The page originally shuffled with
    /// a random comparator, which is statistically biased; this deliberately
    /// replaces it.
    fn pick_unique(&mut self, count: usize) -> Vec<GameEntry> {
        let pool = self.catalog.pool(self.provider);
        pool.choose_multiple(&mut self.rng, count).cloned().collect()
    }

    /// JILI entries without a preset RTP get a generated display value.
    fn fill_rtp(&mut self, entries: &mut [GameEntry]) {
        for entry in entries {
            if entry.rtp.is_none() && entry.provider == ProviderTag::Jili.label() {
                entry.rtp = Some(format!("{:.2}%", self.rng.gen_range(96.5..98.0)));
            }
        }
    }

    fn rebuild_stack(&mut self) {
        let mut cards = self.pick_unique(STACK_SIZE);
        self.fill_rtp(&mut cards);
        self.cards = cards;
        self.rotation = RotationOrder::identity();
        self.winning_card = None;
    }

    fn render(&mut self) {
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, entry)| CardView {
                name: entry.name.clone(),
                image: entry.image.clone(),
                provider: entry.provider.clone(),
                rtp: entry.rtp.clone(),
                position: self.rotation.position_of(i).unwrap_or(SlotPosition::Left),
                winning: self.winning_card == Some(i),
            })
            .collect();

        let snapshot = StackSnapshot {
            cards,
            spinning: self.state == EngineState::Spinning,
            locked: self.locked,
            provider: self.provider,
        };
        self.renderer.apply(&snapshot);
    }

    fn emit(&mut self, cue: Cue, at_ms: f64) {
        self.cues.emit(CueEvent::new(cue, at_ms));
    }
}
