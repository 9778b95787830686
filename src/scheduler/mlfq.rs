/*!
 * Multilevel Feedback Queue
 * Round-robin ladder with demotion on expiry, FCFS tail, and aging
 */

use crate::core::errors::Result;
use crate::core::types::{QueueLevel, SimTime};
use crate::process::ProcessRecord;
use crate::queue::Discipline;
use crate::scheduler::config::SchedulerConfig;
use crate::scheduler::engine::{SchedulerCore, SimulationReport};
use crate::scheduler::events::EventKind;
use crate::scheduler::policy::QueuePolicy;

/// MLFQ policy hooks
///
/// Every queue but the last is round-robin with a doubling quantum; the
/// last queue is FCFS with no quantum limit. Quantum exhaustion demotes one
/// level, and Ready processes age back up one level per threshold crossing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mlfq;

impl QueuePolicy for Mlfq {
    fn name(&self) -> &'static str {
        "mlfq"
    }

    fn discipline(&self, level: QueueLevel, config: &SchedulerConfig) -> Discipline {
        if level + 1 == config.num_queues {
            Discipline::Fcfs
        } else {
            Discipline::RoundRobin {
                quantum: config.quantum_for_level(level),
            }
        }
    }

    fn on_quantum_expiry(
        &self,
        level: QueueLevel,
        config: &SchedulerConfig,
    ) -> (QueueLevel, EventKind) {
        ((level + 1).min(config.num_queues - 1), EventKind::Demote)
    }

    fn aging_threshold(&self, config: &SchedulerConfig) -> Option<SimTime> {
        Some(config.aging_threshold)
    }
}

/// Multilevel feedback queue simulator
#[derive(Debug, Clone)]
pub struct MlfqScheduler {
    core: SchedulerCore<Mlfq>,
}

impl MlfqScheduler {
    /// Create a simulator, rejecting invalid configuration up front
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            core: SchedulerCore::new(Mlfq, config),
        })
    }

    /// Simulator with the default 3-queue, 8/16-quantum configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            core: SchedulerCore::new(Mlfq, SchedulerConfig::default()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        self.core.config()
    }

    /// Run the MLFQ simulation over the given records
    pub fn run(&self, records: &[ProcessRecord]) -> Result<SimulationReport> {
        self.core.run(records)
    }
}

impl Default for MlfqScheduler {
    fn default() -> Self {
        Self::with_defaults()
    }
}
