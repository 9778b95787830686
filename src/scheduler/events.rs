/*!
 * Timeline Events
 * Append-only record of every scheduling transition
 */

use crate::core::types::{Pid, QueueLevel, SimTime};
use serde::{Deserialize, Serialize};

/// Kind of scheduling transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Process moved Waiting -> Ready at its arrival time
    Arrive,
    /// Process moved Ready -> Running
    Dispatch,
    /// Running process displaced by a higher-priority queue
    Preempt,
    /// Quantum exhausted; re-enqueued at the same level (MLQ)
    QuantumExpire,
    /// Aged Ready process moved one level up (MLFQ)
    Promote,
    /// Quantum exhausted; moved one level down (MLFQ)
    Demote,
    /// Remaining time reached zero
    Complete,
}

impl EventKind {
    /// Whether this event counts as a context switch in the summary metrics
    #[inline(always)]
    #[must_use]
    pub const fn is_context_switch(&self) -> bool {
        matches!(
            self,
            Self::Preempt | Self::QuantumExpire | Self::Promote | Self::Demote
        )
    }
}

/// One entry of the simulation timeline
///
/// `queue_level` is the level the process occupies once the transition has
/// been applied (the destination level for Promote/Demote). Events are
/// ordered by time, then by emission order within a single boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimelineEvent {
    pub time: SimTime,
    pub pid: Pid,
    pub queue_level: QueueLevel,
    pub kind: EventKind,
}

impl TimelineEvent {
    #[inline]
    #[must_use]
    pub const fn new(time: SimTime, pid: Pid, queue_level: QueueLevel, kind: EventKind) -> Self {
        Self {
            time,
            pid,
            queue_level,
            kind,
        }
    }
}
