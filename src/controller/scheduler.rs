//! Periodic task scheduling driven by an injected clock
//!
//! The run loop asks for [`IntervalScheduler::next_deadline`], waits until
//! then, and collects the tasks that became due. Nothing runs on its own
//! thread, so a task never overlaps input handling.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Arc<std::sync::Mutex<Instant>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self { now: Arc::new(std::sync::Mutex::new(Instant::now())) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Work the progress tracker knows how to run on a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshTask {
    Position,
    Buffer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaskHandle(u64);

struct ScheduledTask {
    task: RefreshTask,
    period: Duration,
    next_due: Instant,
}

pub struct IntervalScheduler {
    clock: Arc<dyn Clock>,
    tasks: BTreeMap<TaskHandle, ScheduledTask>,
    next_handle: u64,
}

impl IntervalScheduler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            tasks: BTreeMap::new(),
            next_handle: 0,
        }
    }

    /// First run happens one `period` from now
    pub fn schedule_repeating(&mut self, period: Duration, task: RefreshTask) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        let next_due = self.clock.now() + period;
        self.tasks.insert(handle, ScheduledTask { task, period, next_due });
        handle
    }

    pub fn cancel(&mut self, handle: TaskHandle) {
        self.tasks.remove(&handle);
    }

    #[cfg(test)]
    pub fn active(&self) -> usize {
        self.tasks.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.values().map(|t| t.next_due).min()
    }

    /// Tasks due at the current clock reading, each at most once per call.
    /// Periods missed entirely are skipped rather than replayed.
    pub fn take_due(&mut self) -> Vec<RefreshTask> {
        let now = self.clock.now();
        let mut due = Vec::new();
        for scheduled in self.tasks.values_mut() {
            if scheduled.next_due > now {
                continue;
            }
            due.push(scheduled.task);
            scheduled.next_due += scheduled.period;
            if scheduled.next_due <= now {
                scheduled.next_due = now + scheduled.period;
            }
        }
        due
    }
}
