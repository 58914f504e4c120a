//! Process model.
//!
//! A process is the unit of work handed to every scheduler: it becomes
//! eligible at its arrival time and needs `burst` units of CPU time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type ProcessId = i64;

/// A process to be scheduled.
///
/// Immutable input: schedulers copy the slice they are given and never
/// mutate the caller's records.
///
/// # Time Representation
/// All times are integer simulation units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important). Defaults to 0.
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with the default priority.
    pub fn new(id: ProcessId, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival <= time
    }
}
