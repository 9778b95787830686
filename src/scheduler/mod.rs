/*!
 * Scheduler Module
 * Shared discrete-event dispatch loop and the MLFQ/MLQ policies
 */

pub mod config;
pub mod engine;
pub mod events;
pub mod mlfq;
pub mod mlq;
pub mod policy;

// Re-export public API
pub use config::{
    SchedulerConfig, DEFAULT_AGING_THRESHOLD, DEFAULT_BASE_QUANTUM, DEFAULT_NUM_QUEUES, MAX_QUEUES,
};
pub use engine::{SchedulerCore, SimulationReport};
pub use events::{EventKind, TimelineEvent};
pub use mlfq::{Mlfq, MlfqScheduler};
pub use mlq::{Mlq, MlqScheduler};
pub use policy::QueuePolicy;
