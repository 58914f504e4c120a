//! Dispatching rules and selection engine for re-selection schedulers.
//!
//! SJF and priority scheduling share one control loop and differ only in
//! how the next process is chosen. That choice is expressed as a
//! [`DispatchingRule`] and applied by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine, SchedulingContext};
//! use cpu_schedule::models::Process;
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 2)];
//! let ctx = SchedulingContext::for_processes(&processes);
//! let engine = RuleEngine::new(rules::ShortestRemaining);
//!
//! assert_eq!(engine.select_eligible(&processes, &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A dispatching rule that scores an eligible process.
///
/// # Score Convention
/// **Lower score = higher priority.** Equal scores are resolved by the
/// engine, never by the rule.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a process given the current scheduling context.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
