/*!
 * Scheduler Engine
 * Shared discrete-event loop: time advance, arrivals, aging, dispatch,
 * preemption, and completion
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{Pid, Priority, QueueLevel, SimTime};
use crate::process::{Process, ProcessRecord, ProcessState};
use crate::queue::ReadyQueue;
use crate::scheduler::config::SchedulerConfig;
use crate::scheduler::events::{EventKind, TimelineEvent};
use crate::scheduler::policy::QueuePolicy;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Everything a finished run produces
///
/// Events are ordered by time, then emission order. Processes are sorted by
/// pid and carry their filled-in timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub events: Vec<TimelineEvent>,
    pub processes: Vec<Process>,
}

/// Shared dispatch loop specialized by a [`QueuePolicy`]
///
/// The engine owns all mutable state for the duration of one `run`; nothing
/// is shared between runs, so identical inputs always replay the identical
/// event sequence.
#[derive(Debug, Clone)]
pub struct SchedulerCore<P: QueuePolicy> {
    policy: P,
    config: SchedulerConfig,
}

/// Mutable state of one simulation run
struct RunState {
    now: SimTime,
    processes: BTreeMap<Pid, Process>,
    queues: Vec<ReadyQueue>,
    /// Not-yet-arrived pids, ordered by (arrival_time, pid)
    pending: VecDeque<(SimTime, Pid)>,
    running: Option<Pid>,
    /// Ticks consumed in the current slice
    slice_used: SimTime,
    /// Quantum granted to the current slice (None for FCFS)
    slice_quantum: Option<SimTime>,
    events: Vec<TimelineEvent>,
    finished: usize,
}

impl<P: QueuePolicy> SchedulerCore<P> {
    pub const fn new(policy: P, config: SchedulerConfig) -> Self {
        Self { policy, config }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Run the simulation to completion over the given records
    ///
    /// Validates configuration and records up front, then advances time
    /// boundary to boundary. Within one boundary the order is fixed:
    /// completion, arrivals, aging promotions, quantum bookkeeping, dispatch.
    pub fn run(&self, records: &[ProcessRecord]) -> Result<SimulationReport> {
        self.config.validate()?;

        let mut processes = BTreeMap::new();
        for record in records {
            let process = Process::from_record(record)?;
            let pid = process.pid;
            if processes.insert(pid, process).is_some() {
                return Err(SimulationError::InvalidProcessRecord(format!(
                    "duplicate pid {}",
                    pid
                )));
            }
        }

        let max_priority = self
            .config
            .max_priority
            .unwrap_or_else(|| processes.values().map(|p| p.priority).max().unwrap_or(0));
        for process in processes.values_mut() {
            process.queue_level =
                assign_queue_level(process.priority, max_priority, self.config.num_queues);
        }

        let queues = (0..self.config.num_queues)
            .map(|level| ReadyQueue::new(level, self.policy.discipline(level, &self.config)))
            .collect();

        let mut pending: Vec<(SimTime, Pid)> = processes
            .values()
            .map(|p| (p.arrival_time, p.pid))
            .collect();
        pending.sort_unstable();

        info!(
            "{} simulation started: {} processes, {} queues, base quantum {}, max priority {}",
            self.policy.name(),
            processes.len(),
            self.config.num_queues,
            self.config.base_quantum,
            max_priority
        );

        let total = processes.len();
        let mut state = RunState {
            now: 0,
            processes,
            queues,
            pending: pending.into(),
            running: None,
            slice_used: 0,
            slice_quantum: None,
            events: Vec::new(),
            finished: 0,
        };

        while state.finished < total {
            let Some(target) = self.next_boundary(&state) else {
                break;
            };
            self.advance_to(&mut state, target);
            self.complete_if_exhausted(&mut state);
            self.admit_arrivals(&mut state);
            self.apply_aging(&mut state);
            self.expire_quantum(&mut state);
            self.dispatch(&mut state);
        }

        info!(
            "{} simulation finished: t={}, {} events, {} processes",
            self.policy.name(),
            state.now,
            state.events.len(),
            state.finished
        );

        Ok(SimulationReport {
            events: state.events,
            processes: state.processes.into_values().collect(),
        })
    }

    /// Earliest upcoming boundary: next arrival, completion or quantum
    /// exhaustion of the running process, or an aging-threshold crossing
    fn next_boundary(&self, state: &RunState) -> Option<SimTime> {
        let mut boundary: Option<SimTime> = None;
        let mut consider = |t: SimTime| {
            if boundary.map_or(true, |b| t < b) {
                boundary = Some(t);
            }
        };

        if let Some(&(arrival, _)) = state.pending.front() {
            consider(arrival);
        }
        if let Some(pid) = state.running {
            if let Some(process) = state.processes.get(&pid) {
                consider(state.now + process.remaining_time);
            }
            if let Some(quantum) = state.slice_quantum {
                consider(state.now + quantum.saturating_sub(state.slice_used));
            }
        }
        if let Some(threshold) = self.policy.aging_threshold(&self.config) {
            // queue 0 cannot be promoted further
            for queue in state.queues.iter().skip(1) {
                for pid in queue.iter() {
                    if let Some(process) = state.processes.get(&pid) {
                        consider(process.enqueued_at + threshold);
                    }
                }
            }
        }

        boundary
    }

    /// Jump the clock to `target`, charging the elapsed span to the running
    /// process
    fn advance_to(&self, state: &mut RunState, target: SimTime) {
        debug_assert!(target >= state.now, "time must advance monotonically");
        if let Some(pid) = state.running {
            let delta = target - state.now;
            if let Some(process) = state.processes.get_mut(&pid) {
                process.remaining_time = process.remaining_time.saturating_sub(delta);
            }
            state.slice_used += delta;
        }
        state.now = target;
    }

    /// Finish the running process if its burst is exhausted
    fn complete_if_exhausted(&self, state: &mut RunState) {
        let Some(pid) = state.running else {
            return;
        };
        let now = state.now;
        let Some(process) = state.processes.get_mut(&pid) else {
            return;
        };
        if process.remaining_time > 0 {
            return;
        }

        process.state = ProcessState::Finished;
        process.completion_time = Some(now);
        let level = process.queue_level;
        state.running = None;
        state.slice_used = 0;
        state.slice_quantum = None;
        state.finished += 1;
        state
            .events
            .push(TimelineEvent::new(now, pid, level, EventKind::Complete));
        debug!("process {} completed at t={}", pid, now);
    }

    /// Move every process whose arrival time has been reached into its queue
    fn admit_arrivals(&self, state: &mut RunState) {
        while let Some(&(arrival, pid)) = state.pending.front() {
            if arrival > state.now {
                break;
            }
            state.pending.pop_front();

            let now = state.now;
            let mut level = 0;
            if let Some(process) = state.processes.get_mut(&pid) {
                process.state = ProcessState::Ready;
                process.enqueued_at = now;
                level = process.queue_level;
            }
            state.queues[level].enqueue(pid);
            state
                .events
                .push(TimelineEvent::new(now, pid, level, EventKind::Arrive));
            debug!("process {} arrived at t={} (queue {})", pid, now, level);

            self.preempt_if_outranked(state, level);
        }
    }

    /// Promote every Ready process that has waited past the aging threshold
    ///
    /// Evaluated at every boundary in ascending pid order; a promotion into a
    /// queue that outranks the running process preempts it.
    fn apply_aging(&self, state: &mut RunState) {
        let Some(threshold) = self.policy.aging_threshold(&self.config) else {
            return;
        };
        let now = state.now;

        let eligible: Vec<(Pid, QueueLevel)> = state
            .processes
            .values()
            .filter(|p| p.is_ready() && p.queue_level > 0 && p.time_in_queue(now) >= threshold)
            .map(|p| (p.pid, p.queue_level))
            .collect();

        for (pid, level) in eligible {
            let new_level = level - 1;
            state.queues[level].remove(pid);
            if let Some(process) = state.processes.get_mut(&pid) {
                process.queue_level = new_level;
                process.enqueued_at = now;
            }
            state.queues[new_level].enqueue(pid);
            state
                .events
                .push(TimelineEvent::new(now, pid, new_level, EventKind::Promote));
            debug!("process {} promoted to queue {} at t={}", pid, new_level, now);

            self.preempt_if_outranked(state, new_level);
        }
    }

    /// Re-enqueue the running process if its quantum is used up
    fn expire_quantum(&self, state: &mut RunState) {
        let Some(pid) = state.running else {
            return;
        };
        let Some(quantum) = state.slice_quantum else {
            return;
        };
        if state.slice_used < quantum {
            return;
        }

        let now = state.now;
        let Some(process) = state.processes.get_mut(&pid) else {
            return;
        };
        let (new_level, kind) = self.policy.on_quantum_expiry(process.queue_level, &self.config);
        process.state = ProcessState::Ready;
        process.queue_level = new_level;
        process.enqueued_at = now;
        state.running = None;
        state.slice_used = 0;
        state.slice_quantum = None;
        state.queues[new_level].enqueue(pid);
        state
            .events
            .push(TimelineEvent::new(now, pid, new_level, kind));
        debug!("process {} quantum expired at t={}, moving to queue {}", pid, now, new_level);
    }

    /// Dispatch the head of the first non-empty queue when the CPU is idle
    fn dispatch(&self, state: &mut RunState) {
        if state.running.is_some() {
            return;
        }
        let now = state.now;

        for queue in state.queues.iter_mut() {
            if let Some(pid) = queue.dequeue() {
                let level = queue.level();
                if let Some(process) = state.processes.get_mut(&pid) {
                    process.state = ProcessState::Running;
                    if process.first_start_time.is_none() {
                        process.first_start_time = Some(now);
                    }
                }
                state.running = Some(pid);
                state.slice_used = 0;
                state.slice_quantum = queue.quantum();
                state
                    .events
                    .push(TimelineEvent::new(now, pid, level, EventKind::Dispatch));
                debug!("process {} dispatched from queue {} at t={}", pid, level, now);
                return;
            }
        }
    }

    /// Preempt the running process when a Ready process lands in a strictly
    /// higher-priority queue
    fn preempt_if_outranked(&self, state: &mut RunState, candidate_level: QueueLevel) {
        let Some(pid) = state.running else {
            return;
        };
        let now = state.now;
        let Some(process) = state.processes.get_mut(&pid) else {
            return;
        };
        if candidate_level >= process.queue_level {
            return;
        }

        process.state = ProcessState::Ready;
        process.enqueued_at = now;
        let level = process.queue_level;
        state.running = None;
        state.slice_used = 0;
        state.slice_quantum = None;
        state.queues[level].enqueue(pid);
        state
            .events
            .push(TimelineEvent::new(now, pid, level, EventKind::Preempt));
        debug!("process {} preempted at t={} (queue {})", pid, now, level);
    }
}

/// Split the priority axis into `num_queues` equal bands, band 0 highest
fn assign_queue_level(priority: Priority, max_priority: Priority, num_queues: usize) -> QueueLevel {
    let level = (priority as u64 * num_queues as u64) / (max_priority as u64 + 1);
    (level as usize).min(num_queues - 1)
}
