/*!
 * Ready Queue
 * FIFO container with a per-level scheduling discipline
 */

use crate::core::types::{Pid, QueueLevel, SimTime};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Scheduling discipline of a single queue level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Round-robin with a fixed time quantum
    RoundRobin { quantum: SimTime },
    /// First-come-first-served, no quantum limit
    Fcfs,
}

impl Discipline {
    /// Quantum granted per dispatch (None for FCFS)
    #[inline(always)]
    #[must_use]
    pub const fn quantum(&self) -> Option<SimTime> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            Self::Fcfs => None,
        }
    }
}

/// One priority level of the multilevel queue
///
/// Holds pids only; process state lives with the engine. Both disciplines
/// dequeue from the head and preserve FIFO order among ties.
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    level: QueueLevel,
    discipline: Discipline,
    entries: VecDeque<Pid>,
}

impl ReadyQueue {
    #[must_use]
    pub fn new(level: QueueLevel, discipline: Discipline) -> Self {
        Self {
            level,
            discipline,
            entries: VecDeque::new(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn level(&self) -> QueueLevel {
        self.level
    }

    #[inline(always)]
    #[must_use]
    pub const fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Quantum granted per dispatch from this queue (None for FCFS)
    #[inline(always)]
    #[must_use]
    pub const fn quantum(&self) -> Option<SimTime> {
        self.discipline.quantum()
    }

    /// Append at the tail
    pub fn enqueue(&mut self, pid: Pid) {
        self.entries.push_back(pid);
    }

    /// Pop from the head
    pub fn dequeue(&mut self) -> Option<Pid> {
        self.entries.pop_front()
    }

    /// Head of the queue without removing it
    #[must_use]
    pub fn peek(&self) -> Option<Pid> {
        self.entries.front().copied()
    }

    /// Remove a specific pid wherever it sits (used by aging promotion)
    pub fn remove(&mut self, pid: Pid) -> bool {
        if let Some(pos) = self.entries.iter().position(|&p| p == pid) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate queued pids head to tail
    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.entries.iter().copied()
    }
}
