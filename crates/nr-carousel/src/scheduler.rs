//! Scheduler — a single-timeline timer wheel for the spin sequence
//!
//! The engine owns one scheduler and is its only executor. Tasks are an
//! enum, not closures, so everything the timeline can do is visible in one
//! place and the whole sequence replays deterministically under a manual
//! clock. Due tasks come back in non-decreasing timestamp order, ties in
//! schedule order.

/// Handle for cancelling a scheduled task
pub type TaskId = u64;

/// Everything the spin timeline can ask the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinTask {
    /// One shuffle frame (also carries the stop phase when elapsed runs out)
    Tick,
    /// Show the i-th fake notification
    NotificationShow(u8),
    /// Expire the i-th fake notification
    NotificationExpire(u8),
    /// Jackpot chord + confetti, return to idle
    Finale,
}

/// A task that has come due
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueTask {
    pub id: TaskId,
    pub at_ms: f64,
    pub task: SpinTask,
}

#[derive(Debug, Clone)]
struct Entry {
    id: TaskId,
    due_ms: f64,
    seq: u64,
    task: SpinTask,
    repeat_every_ms: Option<f64>,
}

/// Timer wheel over a millisecond timeline
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    now_ms: f64,
    next_id: TaskId,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current timeline position
    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Number of pending tasks
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Schedule a one-shot task `delay_ms` from now
    pub fn after(&mut self, delay_ms: f64, task: SpinTask) -> TaskId {
        self.push(self.now_ms + delay_ms, task, None)
    }

    /// Schedule a repeating task, first firing `interval_ms` from now
    pub fn every(&mut self, interval_ms: f64, task: SpinTask) -> TaskId {
        self.push(self.now_ms + interval_ms, task, Some(interval_ms))
    }

    /// Cancel a task; pending and future repeats never fire
    pub fn cancel(&mut self, id: TaskId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Pop the next task due at or before `now_ms`, advancing the timeline
    /// to its due time. Returns `None` (and advances to `now_ms`) once
    /// nothing else is due.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<DueTask> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i);

        match idx {
            Some(i) => {
                let entry = self.entries.remove(i);
                // Timeline never moves backwards even if a task was overdue.
                self.now_ms = self.now_ms.max(entry.due_ms);

                let due = DueTask {
                    id: entry.id,
                    at_ms: entry.due_ms,
                    task: entry.task,
                };

                if let Some(interval) = entry.repeat_every_ms {
                    let seq = self.bump_seq();
                    self.entries.push(Entry {
                        id: entry.id,
                        due_ms: entry.due_ms + interval,
                        seq,
                        task: entry.task,
                        repeat_every_ms: Some(interval),
                    });
                }

                Some(due)
            }
            None => {
                self.now_ms = self.now_ms.max(now_ms);
                None
            }
        }
    }

    fn push(&mut self, due_ms: f64, task: SpinTask, repeat_every_ms: Option<f64>) -> TaskId {
        self.next_id += 1;
        let id = self.next_id;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            id,
            due_ms,
            seq,
            task,
            repeat_every_ms,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}
