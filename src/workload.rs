//! Synthetic workload generation.
//!
//! Produces reproducible random process sets for experiments and tests.
//! The same parameters and seed always yield the same processes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters of a random process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival (inclusive).
    pub max_arrival: i64,
    /// Longest possible burst (inclusive, at least 1).
    pub max_burst: i64,
    /// Largest priority value (inclusive).
    pub max_priority: i64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 10,
            max_burst: 8,
            max_priority: 4,
        }
    }
}

impl WorkloadSpec {
    /// Creates parameters for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the latest arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates the process set for `seed`.
    ///
    /// IDs are `1..=count` in list order. Out-of-range bounds are clamped
    /// so the result always passes validation.
    pub fn generate(&self, seed: u64) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        let max_priority = self.max_priority.max(0);

        (1..=self.count)
            .map(|id| {
                let arrival = rng.random_range(0..=max_arrival);
                let burst = rng.random_range(1..=max_burst);
                let priority = rng.random_range(0..=max_priority);
                Process::new(id as i64, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_generate_is_deterministic() {
        let spec = WorkloadSpec::new(20);
        assert_eq!(spec.generate(42), spec.generate(42));
    }

    #[test]
    fn test_generate_respects_bounds() {
        let spec = WorkloadSpec::new(50)
            .with_max_arrival(5)
            .with_max_burst(3)
            .with_max_priority(2);
        let processes = spec.generate(7);
        assert_eq!(processes.len(), 50);
        for p in &processes {
            assert!((0..=5).contains(&p.arrival));
            assert!((1..=3).contains(&p.burst));
            assert!((0..=2).contains(&p.priority));
        }
    }

    #[test]
    fn test_generate_ids_are_sequential() {
        let ids: Vec<i64> = WorkloadSpec::new(4).generate(1).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_generate_clamps_bounds() {
        let spec = WorkloadSpec::new(10)
            .with_max_arrival(-3)
            .with_max_burst(0)
            .with_max_priority(-1);
        let processes = spec.generate(3);
        assert!(validate_processes(&processes).is_ok());
        assert!(processes.iter().all(|p| p.arrival == 0 && p.burst == 1));
    }

    #[test]
    fn test_generate_empty() {
        assert!(WorkloadSpec::new(0).generate(0).is_empty());
    }
}
