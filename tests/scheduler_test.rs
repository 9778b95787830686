/*!
 * Scheduler Tests
 * Scenario coverage for the MLFQ and MLQ simulators
 */

use pretty_assertions::assert_eq;
use schedsim::{
    EventKind, MlfqScheduler, MlqScheduler, ProcessRecord, SimulationMetrics, TimelineEvent,
};

fn event(time: u64, pid: u32, queue_level: usize, kind: EventKind) -> TimelineEvent {
    TimelineEvent::new(time, pid, queue_level, kind)
}

#[test]
fn test_single_process_in_fcfs_queue() {
    // priority 5 lands in the last queue, FCFS under MLFQ
    let records = [ProcessRecord::new(1, 0, 5, 5)];
    let report = MlfqScheduler::with_defaults().run(&records).unwrap();

    assert_eq!(
        report.events,
        vec![
            event(0, 1, 2, EventKind::Arrive),
            event(0, 1, 2, EventKind::Dispatch),
            event(5, 1, 2, EventKind::Complete),
        ]
    );

    let metrics = SimulationMetrics::from_report(&report).unwrap();
    let row = &metrics.processes[0];
    assert_eq!(row.waiting_time, 0);
    assert_eq!(row.turnaround_time, 5);
    assert_eq!(row.response_time, 0);
    assert_eq!(metrics.summary.context_switches, 0);
}

#[test]
fn test_mlq_quantum_expiry_keeps_queue_level() {
    // burst 20 against quantum 8: expiry at 8 and 16, completion at 20
    let records = [ProcessRecord::new(1, 0, 20, 0)];
    let report = MlqScheduler::with_defaults().run(&records).unwrap();

    assert_eq!(
        report.events,
        vec![
            event(0, 1, 0, EventKind::Arrive),
            event(0, 1, 0, EventKind::Dispatch),
            event(8, 1, 0, EventKind::QuantumExpire),
            event(8, 1, 0, EventKind::Dispatch),
            event(16, 1, 0, EventKind::QuantumExpire),
            event(16, 1, 0, EventKind::Dispatch),
            event(20, 1, 0, EventKind::Complete),
        ]
    );
    assert!(report.events.iter().all(|e| e.queue_level == 0));
}

#[test]
fn test_mlfq_demotion_ladder() {
    // burst 30 from queue 0: demote at 8 (quantum 8), at 24 (8+16), finish 30
    let records = [ProcessRecord::new(1, 0, 30, 0)];
    let report = MlfqScheduler::with_defaults().run(&records).unwrap();

    assert_eq!(
        report.events,
        vec![
            event(0, 1, 0, EventKind::Arrive),
            event(0, 1, 0, EventKind::Dispatch),
            event(8, 1, 1, EventKind::Demote),
            event(8, 1, 1, EventKind::Dispatch),
            event(24, 1, 2, EventKind::Demote),
            event(24, 1, 2, EventKind::Dispatch),
            event(30, 1, 2, EventKind::Complete),
        ]
    );
}

#[test]
fn test_arrival_preempts_lower_priority_queue() {
    // P1 runs from the last queue; P2 arrives at t=5 into queue 0
    let records = [
        ProcessRecord::new(1, 0, 50, 5),
        ProcessRecord::new(2, 5, 10, 0),
    ];
    let report = MlqScheduler::with_defaults().run(&records).unwrap();

    assert_eq!(
        report.events[..5],
        [
            event(0, 1, 2, EventKind::Arrive),
            event(0, 1, 2, EventKind::Dispatch),
            event(5, 2, 0, EventKind::Arrive),
            event(5, 1, 2, EventKind::Preempt),
            event(5, 2, 0, EventKind::Dispatch),
        ]
    );

    let metrics = SimulationMetrics::from_report(&report).unwrap();
    let p1 = metrics.processes.iter().find(|m| m.pid == 1).unwrap();
    let p2 = metrics.processes.iter().find(|m| m.pid == 2).unwrap();
    assert_eq!(p2.completion_time, 15);
    assert_eq!(p2.response_time, 0);
    // P1 lost 10 ticks to P2 on top of its own quantum rotation
    assert_eq!(p1.completion_time, 60);
}

#[test]
fn test_aging_promotes_exactly_at_threshold() {
    // A stream of queue-0 processes keeps the CPU busy through t=104 while
    // pid 99 waits in the last queue from t=0.
    let mut records: Vec<ProcessRecord> = (1..=13)
        .map(|k| ProcessRecord::new(k, (k - 1) * 8, 8, 0))
        .collect();
    records.push(ProcessRecord::new(99, 0, 5, 5));

    let report = MlfqScheduler::with_defaults().run(&records).unwrap();

    let promotions: Vec<&TimelineEvent> = report
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Promote)
        .collect();
    assert_eq!(promotions.len(), 1);
    assert_eq!(*promotions[0], event(100, 99, 1, EventKind::Promote));

    let aged = report.processes.iter().find(|p| p.pid == 99).unwrap();
    assert_eq!(aged.first_start_time, Some(104));
    assert_eq!(aged.completion_time, Some(109));
}

#[test]
fn test_promotion_preempts_outranked_running_process() {
    // Both processes share the FCFS queue; P1 runs while P2 waits. At the
    // aging threshold P2 is promoted one level up and must preempt P1.
    let records = [
        ProcessRecord::new(1, 0, 300, 5),
        ProcessRecord::new(2, 0, 10, 5),
    ];
    let report = MlfqScheduler::with_defaults().run(&records).unwrap();

    assert_eq!(
        report.events,
        vec![
            event(0, 1, 2, EventKind::Arrive),
            event(0, 2, 2, EventKind::Arrive),
            event(0, 1, 2, EventKind::Dispatch),
            event(100, 2, 1, EventKind::Promote),
            event(100, 1, 2, EventKind::Preempt),
            event(100, 2, 1, EventKind::Dispatch),
            event(110, 2, 1, EventKind::Complete),
            event(110, 1, 2, EventKind::Dispatch),
            event(310, 1, 2, EventKind::Complete),
        ]
    );
}

#[test]
fn test_idle_gap_before_late_arrival() {
    // CPU idles between t=10 and t=40; the clock jumps, no busy-wait events
    let records = [
        ProcessRecord::new(1, 0, 10, 0),
        ProcessRecord::new(2, 40, 5, 0),
    ];
    let report = MlqScheduler::with_defaults().run(&records).unwrap();

    assert_eq!(
        report.events,
        vec![
            event(0, 1, 0, EventKind::Arrive),
            event(0, 1, 0, EventKind::Dispatch),
            event(8, 1, 0, EventKind::QuantumExpire),
            event(8, 1, 0, EventKind::Dispatch),
            event(10, 1, 0, EventKind::Complete),
            event(40, 2, 0, EventKind::Arrive),
            event(40, 2, 0, EventKind::Dispatch),
            event(45, 2, 0, EventKind::Complete),
        ]
    );
}

#[test]
fn test_simultaneous_arrivals_enqueue_in_pid_order() {
    let records = [
        ProcessRecord::new(3, 0, 4, 0),
        ProcessRecord::new(1, 0, 4, 0),
        ProcessRecord::new(2, 0, 4, 0),
    ];
    let report = MlqScheduler::with_defaults().run(&records).unwrap();

    let arrivals: Vec<u32> = report
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Arrive)
        .map(|e| e.pid)
        .collect();
    assert_eq!(arrivals, vec![1, 2, 3]);

    // FIFO among ties: dispatched in the same order
    let dispatches: Vec<u32> = report
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Dispatch)
        .map(|e| e.pid)
        .collect();
    assert_eq!(dispatches, vec![1, 2, 3]);
}

#[test]
fn test_completion_wins_over_quantum_expiry() {
    // burst equals the quantum: the process completes, no expiry is recorded
    let records = [ProcessRecord::new(1, 0, 8, 0)];
    let report = MlqScheduler::with_defaults().run(&records).unwrap();

    assert_eq!(
        report.events,
        vec![
            event(0, 1, 0, EventKind::Arrive),
            event(0, 1, 0, EventKind::Dispatch),
            event(8, 1, 0, EventKind::Complete),
        ]
    );
}

#[test]
fn test_duplicate_pid_rejected() {
    let records = [
        ProcessRecord::new(1, 0, 5, 0),
        ProcessRecord::new(1, 2, 7, 1),
    ];
    assert!(MlqScheduler::with_defaults().run(&records).is_err());
    assert!(MlfqScheduler::with_defaults().run(&records).is_err());
}

#[test]
fn test_empty_record_set() {
    let report = MlfqScheduler::with_defaults().run(&[]).unwrap();
    assert!(report.events.is_empty());
    assert!(report.processes.is_empty());

    let metrics = SimulationMetrics::from_report(&report).unwrap();
    assert_eq!(metrics.summary.process_count, 0);
}

#[test]
fn test_identical_runs_replay_identical_events() {
    let records = [
        ProcessRecord::new(1, 0, 23, 1),
        ProcessRecord::new(2, 3, 11, 4),
        ProcessRecord::new(3, 3, 40, 0),
        ProcessRecord::new(4, 17, 6, 2),
        ProcessRecord::new(5, 20, 15, 5),
    ];

    let first = MlfqScheduler::with_defaults().run(&records).unwrap();
    let second = MlfqScheduler::with_defaults().run(&records).unwrap();
    assert_eq!(first.events, second.events);

    let first = MlqScheduler::with_defaults().run(&records).unwrap();
    let second = MlqScheduler::with_defaults().run(&records).unwrap();
    assert_eq!(first.events, second.events);
}

#[test]
fn test_both_policies_over_the_same_workload() {
    // The comparison use case: one record set, two independent simulators
    let records = [
        ProcessRecord::new(1, 0, 30, 0),
        ProcessRecord::new(2, 2, 12, 3),
        ProcessRecord::new(3, 4, 25, 5),
        ProcessRecord::new(4, 10, 7, 1),
    ];

    let mlq = MlqScheduler::with_defaults().run(&records).unwrap();
    let mlfq = MlfqScheduler::with_defaults().run(&records).unwrap();

    for report in [&mlq, &mlfq] {
        assert_eq!(report.processes.len(), 4);
        assert!(report.processes.iter().all(|p| p.is_finished()));
        assert!(SimulationMetrics::from_report(report).is_ok());
    }

    // MLQ never moves a process between queues
    for process in &mlq.processes {
        let levels: Vec<usize> = mlq
            .events
            .iter()
            .filter(|e| e.pid == process.pid)
            .map(|e| e.queue_level)
            .collect();
        assert!(levels.iter().all(|&l| l == levels[0]));
    }
}
