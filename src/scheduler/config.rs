/*!
 * Scheduler Configuration
 * Validated simulation parameters shared by both policies
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{Priority, SimTime};
use serde::{Deserialize, Serialize};

/// Default number of priority queues
pub const DEFAULT_NUM_QUEUES: usize = 3;

/// Default base time quantum for queue 0
pub const DEFAULT_BASE_QUANTUM: SimTime = 8;

/// Default aging threshold before a Ready process is promoted (MLFQ only)
pub const DEFAULT_AGING_THRESHOLD: SimTime = 100;

/// Upper bound on queue count; keeps the doubling quantum ladder in range
pub const MAX_QUEUES: usize = 16;

/// Simulation configuration
///
/// Quantum for round-robin queue `i` is `base_quantum << i`, so lower
/// priority queues get proportionally longer slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    pub num_queues: usize,
    pub base_quantum: SimTime,
    pub aging_threshold: SimTime,
    /// Highest priority value expected in the input; derived from the
    /// process set when absent
    pub max_priority: Option<Priority>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_queues: DEFAULT_NUM_QUEUES,
            base_quantum: DEFAULT_BASE_QUANTUM,
            aging_threshold: DEFAULT_AGING_THRESHOLD,
            max_priority: None,
        }
    }
}

impl SchedulerConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_num_queues(mut self, num_queues: usize) -> Self {
        self.num_queues = num_queues;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_base_quantum(mut self, base_quantum: SimTime) -> Self {
        self.base_quantum = base_quantum;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_aging_threshold(mut self, aging_threshold: SimTime) -> Self {
        self.aging_threshold = aging_threshold;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_max_priority(mut self, max_priority: Priority) -> Self {
        self.max_priority = Some(max_priority);
        self
    }

    /// Quantum for round-robin queue `level`
    #[inline]
    #[must_use]
    pub const fn quantum_for_level(&self, level: usize) -> SimTime {
        self.base_quantum << level
    }

    /// Reject invalid parameters before any simulation starts
    pub fn validate(&self) -> Result<()> {
        if self.num_queues == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "number of queues must be at least 1".into(),
            ));
        }
        if self.num_queues > MAX_QUEUES {
            return Err(SimulationError::InvalidConfiguration(format!(
                "number of queues {} exceeds maximum ({})",
                self.num_queues, MAX_QUEUES
            )));
        }
        if self.base_quantum == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "time quantum must be positive".into(),
            ));
        }
        if self.aging_threshold == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "aging threshold must be positive".into(),
            ));
        }
        Ok(())
    }
}
