/*!
 * Queue Policy
 * Hooks that specialize the shared dispatch loop per discipline
 */

use crate::core::types::{QueueLevel, SimTime};
use crate::queue::Discipline;
use crate::scheduler::config::SchedulerConfig;
use crate::scheduler::events::EventKind;

/// Policy hooks supplied by each multilevel variant
///
/// The common loop (time advance, arrivals, dispatch, preemption,
/// completion) is written once in the engine; a policy only decides the
/// per-level discipline, where a process lands when its quantum expires,
/// and whether aging promotions apply.
pub trait QueuePolicy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Discipline of queue `level` under the given configuration
    fn discipline(&self, level: QueueLevel, config: &SchedulerConfig) -> Discipline;

    /// Destination level and recorded event when a quantum expires at `level`
    fn on_quantum_expiry(
        &self,
        level: QueueLevel,
        config: &SchedulerConfig,
    ) -> (QueueLevel, EventKind);

    /// Aging threshold for Ready processes; None disables promotion
    fn aging_threshold(&self, config: &SchedulerConfig) -> Option<SimTime>;
}
