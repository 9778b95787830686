/*!
 * Process Types
 * Loosely-typed input records and the strongly-typed schedulable unit
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{Pid, Priority, QueueLevel, SimTime};
use serde::{Deserialize, Serialize};

/// Raw process definition as read from an input source
///
/// Fields are signed so malformed input is caught by [`Process::from_record`]
/// instead of failing mid-simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub pid: i64,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: i64,
}

impl ProcessRecord {
    #[inline]
    #[must_use]
    pub const fn new(pid: i64, arrival_time: i64, burst_time: i64, priority: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Process has not yet arrived
    Waiting,
    /// Process is queued and runnable
    Ready,
    /// Process is currently running
    Running,
    /// Process has completed its burst
    Finished,
}

/// A schedulable unit tracked by the engine
///
/// Timestamps use abstract integer ticks. `first_start_time` is assigned
/// exactly once, at the first dispatch; `completion_time` exactly once, when
/// `remaining_time` reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: SimTime,
    pub burst_time: SimTime,
    pub remaining_time: SimTime,
    pub priority: Priority,
    pub queue_level: QueueLevel,
    /// Tick at which the process last entered a queue (drives aging)
    pub enqueued_at: SimTime,
    pub first_start_time: Option<SimTime>,
    pub completion_time: Option<SimTime>,
    pub state: ProcessState,
}

impl Process {
    /// Validate a raw record into a process (Waiting, queue level assigned later)
    pub fn from_record(record: &ProcessRecord) -> Result<Self> {
        if record.pid < 0 {
            return Err(SimulationError::InvalidProcessRecord(format!(
                "negative pid {}",
                record.pid
            )));
        }
        if record.arrival_time < 0 {
            return Err(SimulationError::InvalidProcessRecord(format!(
                "process {} has negative arrival time {}",
                record.pid, record.arrival_time
            )));
        }
        if record.burst_time <= 0 {
            return Err(SimulationError::InvalidProcessRecord(format!(
                "process {} has non-positive burst time {}",
                record.pid, record.burst_time
            )));
        }
        if record.priority < 0 {
            return Err(SimulationError::InvalidProcessRecord(format!(
                "process {} has negative priority {}",
                record.pid, record.priority
            )));
        }

        Ok(Self {
            pid: record.pid as Pid,
            arrival_time: record.arrival_time as SimTime,
            burst_time: record.burst_time as SimTime,
            remaining_time: record.burst_time as SimTime,
            priority: record.priority as Priority,
            queue_level: 0,
            enqueued_at: 0,
            first_start_time: None,
            completion_time: None,
            state: ProcessState::Waiting,
        })
    }

    /// Elapsed queue residency at `now` (0 unless Ready)
    #[inline]
    #[must_use]
    pub fn time_in_queue(&self, now: SimTime) -> SimTime {
        match self.state {
            ProcessState::Ready => now.saturating_sub(self.enqueued_at),
            _ => 0,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, ProcessState::Finished)
    }
}
