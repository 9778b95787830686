/*!
 * Metrics
 * Per-process and aggregate performance figures derived from a finished run
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{Pid, Priority, SimTime};
use crate::scheduler::SimulationReport;
use serde::{Deserialize, Serialize};

/// Performance figures for one finished process
///
/// Carries the input columns alongside the derived times so a metrics row
/// is self-contained for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival_time: SimTime,
    pub burst_time: SimTime,
    pub priority: Priority,
    pub first_start_time: SimTime,
    pub completion_time: SimTime,
    /// turnaround_time - burst_time
    pub waiting_time: SimTime,
    /// completion_time - arrival_time
    pub turnaround_time: SimTime,
    /// first_start_time - arrival_time
    pub response_time: SimTime,
}

/// Aggregate figures over all finished processes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsSummary {
    pub process_count: usize,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Preempt + Demote + Promote + QuantumExpire events
    pub context_switches: u64,
}

/// Full metric set for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationMetrics {
    pub processes: Vec<ProcessMetrics>,
    pub summary: MetricsSummary,
}

impl SimulationMetrics {
    /// Derive metrics from a report; pure, no engine state involved
    ///
    /// Fails with `IncompleteSimulation` if any process lacks a completion
    /// timestamp. An empty process set yields zeroed averages.
    pub fn from_report(report: &SimulationReport) -> Result<Self> {
        let mut rows = Vec::with_capacity(report.processes.len());
        for process in &report.processes {
            let completion_time = process
                .completion_time
                .ok_or(SimulationError::IncompleteSimulation { pid: process.pid })?;
            let first_start_time = process
                .first_start_time
                .ok_or(SimulationError::IncompleteSimulation { pid: process.pid })?;

            let turnaround_time = completion_time - process.arrival_time;
            rows.push(ProcessMetrics {
                pid: process.pid,
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                priority: process.priority,
                first_start_time,
                completion_time,
                waiting_time: turnaround_time - process.burst_time,
                turnaround_time,
                response_time: first_start_time - process.arrival_time,
            });
        }

        let count = rows.len();
        let mean = |f: fn(&ProcessMetrics) -> SimTime| -> f64 {
            if count == 0 {
                0.0
            } else {
                rows.iter().map(|r| f(r) as f64).sum::<f64>() / count as f64
            }
        };

        let summary = MetricsSummary {
            process_count: count,
            avg_waiting_time: mean(|r| r.waiting_time),
            avg_turnaround_time: mean(|r| r.turnaround_time),
            avg_response_time: mean(|r| r.response_time),
            context_switches: report
                .events
                .iter()
                .filter(|e| e.kind.is_context_switch())
                .count() as u64,
        };

        Ok(Self {
            processes: rows,
            summary,
        })
    }
}
