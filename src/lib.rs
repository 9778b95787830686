/*!
 * Multilevel Scheduling Simulator
 * Deterministic discrete-event simulation of MLFQ and MLQ CPU scheduling
 */

pub mod core;
pub mod metrics;
pub mod process;
pub mod queue;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{Result, SimulationError};
pub use crate::core::types::{Pid, Priority, QueueLevel, SimTime};
pub use metrics::{MetricsSummary, ProcessMetrics, SimulationMetrics};
pub use process::{Process, ProcessRecord, ProcessState};
pub use queue::{Discipline, ReadyQueue};
pub use scheduler::{
    EventKind, MlfqScheduler, MlqScheduler, SchedulerConfig, SimulationReport, TimelineEvent,
};
