//! Process scheduling domain models.
//!
//! Provides the input record (`Process`), the execution timeline produced
//! by a scheduler, and the per-process and run-level results.
//!
//! # Lifecycle
//!
//! | Type | Created by | Lifetime |
//! |------|-----------|----------|
//! | Process | loader / caller | whole program, read-only |
//! | Timeline | scheduler | one invocation |
//! | ScheduleRow | metrics aggregator | one invocation |
//! | RunSummary | metrics aggregator | one invocation |

mod process;
mod report;
mod timeline;

pub use process::{Process, ProcessId};
pub use report::{RunSummary, ScheduleOutcome, ScheduleRow};
pub use timeline::{Timeline, TimelineEntry};
