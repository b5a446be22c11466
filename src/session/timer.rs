//! Elapsed-time timer.
//!
//! The timer owns at most one repeating [`TaskKind::TimerTick`] task.
//! Starting it again replaces the previous task, so two timers can never
//! tick at once. Ticks from a replaced or stopped task are rejected by
//! [`Timer::accepts`].

use std::time::Duration;

use crate::core::{Scheduler, TaskHandle, TaskKind};

/// Periodic one-second counter driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    interval: Duration,
    handle: Option<TaskHandle>,
}

impl Timer {
    /// Create a stopped timer ticking every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval, handle: None }
    }

    /// Tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check if a tick task is outstanding.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start ticking, stopping any previous tick task first.
    pub fn start(&mut self, scheduler: &mut Scheduler) -> TaskHandle {
        self.stop(scheduler);
        let handle = scheduler.schedule_repeating(self.interval, TaskKind::TimerTick);
        self.handle = Some(handle);
        handle
    }

    /// Stop ticking.
    ///
    /// Returns true if the timer was running.
    pub fn stop(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.handle.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Check if a fired tick belongs to the running timer.
    #[must_use]
    pub fn accepts(&self, handle: TaskHandle) -> bool {
        self.handle == Some(handle)
    }
}
