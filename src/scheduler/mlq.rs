/*!
 * Multilevel Queue
 * Static queue assignment with exponential per-queue quantums
 */

use crate::core::errors::Result;
use crate::core::types::{QueueLevel, SimTime};
use crate::process::ProcessRecord;
use crate::queue::Discipline;
use crate::scheduler::config::SchedulerConfig;
use crate::scheduler::engine::{SchedulerCore, SimulationReport};
use crate::scheduler::events::EventKind;
use crate::scheduler::policy::QueuePolicy;

/// MLQ policy hooks
///
/// Every queue is round-robin with quantum `base_quantum << level`. A
/// process never changes queues: expiry re-enqueues at the tail of the same
/// level, and there is no aging.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mlq;

impl QueuePolicy for Mlq {
    fn name(&self) -> &'static str {
        "mlq"
    }

    fn discipline(&self, level: QueueLevel, config: &SchedulerConfig) -> Discipline {
        Discipline::RoundRobin {
            quantum: config.quantum_for_level(level),
        }
    }

    fn on_quantum_expiry(
        &self,
        level: QueueLevel,
        _config: &SchedulerConfig,
    ) -> (QueueLevel, EventKind) {
        (level, EventKind::QuantumExpire)
    }

    fn aging_threshold(&self, _config: &SchedulerConfig) -> Option<SimTime> {
        None
    }
}

/// Multilevel queue simulator
#[derive(Debug, Clone)]
pub struct MlqScheduler {
    core: SchedulerCore<Mlq>,
}

impl MlqScheduler {
    /// Create a simulator, rejecting invalid configuration up front
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            core: SchedulerCore::new(Mlq, config),
        })
    }

    /// Simulator with the default 3-queue, 8/16/32-quantum configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            core: SchedulerCore::new(Mlq, SchedulerConfig::default()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        self.core.config()
    }

    /// Run the MLQ simulation over the given records
    pub fn run(&self, records: &[ProcessRecord]) -> Result<SimulationReport> {
        self.core.run(records)
    }
}

impl Default for MlqScheduler {
    fn default() -> Self {
        Self::with_defaults()
    }
}
