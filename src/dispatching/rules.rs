//! Built-in dispatching rules.
//!
//! - **ShortestRemaining**: smallest remaining burst first (SJF)
//! - **HighestPriority**: smallest priority value first
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// Shortest Remaining Time.
///
/// Uses `context.remaining_burst`, falling back to the full burst for
/// processes the context does not track.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
        context.remaining(process.id).unwrap_or(process.burst)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Highest priority, where a lower value means more important.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}
