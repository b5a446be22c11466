//! Deterministic task scheduling on a virtual clock.
//!
//! The engine never sleeps or spawns. Delayed work (the mismatch penalty)
//! and periodic work (the elapsed-time tick) are queued here and fired when
//! the host advances the clock.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use pairs_engine::core::{Scheduler, TaskKind};
//!
//! let mut scheduler = Scheduler::new();
//! let tick = scheduler.schedule_repeating(Duration::from_secs(1), TaskKind::TimerTick);
//!
//! let target = scheduler.now() + Duration::from_millis(2500);
//! let mut fired = 0;
//! while let Some(task) = scheduler.pop_due(target) {
//!     assert_eq!(task.handle, tick);
//!     fired += 1;
//! }
//! scheduler.settle(target);
//!
//! assert_eq!(fired, 2);
//! assert!(scheduler.cancel(tick));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle to a scheduled task, used for cancellation.
///
/// Handles are never reused within one scheduler, so a handle held after
/// its task was cancelled can be compared safely against newer ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl TaskHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// What a scheduled task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// One elapsed-time tick.
    TimerTick,
    /// Hide a mismatched pair and unlock the board.
    PenaltyReset,
}

/// A task that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTask {
    /// Handle the task was scheduled under.
    pub handle: TaskHandle,
    /// What to do.
    pub kind: TaskKind,
    /// Virtual time at which it fired.
    pub at: Duration,
}

#[derive(Clone, Debug)]
struct ScheduledTask {
    handle: TaskHandle,
    kind: TaskKind,
    due: Duration,
    period: Option<Duration>,
}

/// Virtual-time task queue.
///
/// Tasks fire in due order; tasks due at the same instant fire in the
/// order they were scheduled. The queue is tiny (a timer and at most one
/// penalty), so a linear scan beats a heap.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_handle: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of outstanding tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether a handle still refers to an outstanding task.
    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Schedule a task to fire once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration, kind: TaskKind) -> TaskHandle {
        self.push(delay, None, kind)
    }

    /// Schedule a task to fire every `interval`, first after one interval.
    ///
    /// Panics if `interval` is zero.
    pub fn schedule_repeating(&mut self, interval: Duration, kind: TaskKind) -> TaskHandle {
        assert!(!interval.is_zero(), "Repeating interval must be non-zero");
        self.push(interval, Some(interval), kind)
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, kind: TaskKind) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push(ScheduledTask {
            handle,
            kind,
            due: self.now + delay,
            period,
        });
        handle
    }

    /// Cancel a task.
    ///
    /// Returns true if the task was still outstanding.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.handle == handle) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Cancel every outstanding task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// Moves the clock to the task's due time. Repeating tasks are re-armed
    /// one period later. Returns `None` when nothing is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<FiredTask> {
        let pos = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i)?;

        let task = &mut self.tasks[pos];
        let fired = FiredTask {
            handle: task.handle,
            kind: task.kind,
            at: task.due,
        };
        self.now = self.now.max(task.due);

        match task.period {
            Some(period) => task.due += period,
            None => drop(self.tasks.remove(pos)),
        }

        Some(fired)
    }

    /// Move the clock forward to `until` once all due tasks are handled.
    ///
    /// The clock never moves backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
