//! Scheduling context for dispatching rule evaluation.

use std::collections::HashMap;

use crate::models::{Process, ProcessId};

/// Runtime scheduling state passed to dispatching rules.
///
/// Owned by exactly one scheduler invocation and dropped when the run
/// ends. Holds the simulation clock and the remaining burst of every
/// process that has not completed yet.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
    /// Remaining CPU time per unfinished process.
    pub remaining_burst: HashMap<ProcessId, i64>,
}

impl SchedulingContext {
    /// Creates a context at t=0 tracking the full burst of every process.
    pub fn for_processes(processes: &[Process]) -> Self {
        Self {
            current_time: 0,
            remaining_burst: processes.iter().map(|p| (p.id, p.burst)).collect(),
        }
    }

    /// Remaining burst of a process, if tracked.
    pub fn remaining(&self, process_id: ProcessId) -> Option<i64> {
        self.remaining_burst.get(&process_id).copied()
    }

    /// Consumes up to `units` of a process's remaining burst.
    ///
    /// Returns the units actually consumed (never more than what remained).
    pub fn consume(&mut self, process_id: ProcessId, units: i64) -> i64 {
        match self.remaining_burst.get_mut(&process_id) {
            Some(remaining) => {
                let used = units.min(*remaining).max(0);
                *remaining -= used;
                used
            }
            None => 0,
        }
    }

    /// Stops tracking a completed process.
    pub fn retire(&mut self, process_id: ProcessId) {
        self.remaining_burst.remove(&process_id);
    }

    /// Moves the clock forward to `time` if it lies in the future.
    pub fn advance_to(&mut self, time: i64) {
        self.current_time = self.current_time.max(time);
    }
}

#[cfg(test)]
impl SchedulingContext {
    /// Creates a context at the given time with no tracked processes.
    pub(crate) fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets remaining burst for a process.
    pub(crate) fn with_remaining_burst(mut self, process_id: ProcessId, remaining: i64) -> Self {
        self.remaining_burst.insert(process_id, remaining);
        self
    }
}
