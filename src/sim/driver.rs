//! Simulation driver.
//!
//! # Algorithm
//!
//! 1. Filter out processes that can never run (`burst <= 0`).
//! 2. Build the working set (the caller's list is never mutated), sorted
//!    by arrival time, clock at 0.
//! 3. Until every process completes: if no process is ready, jump the
//!    clock to the next pending arrival (idle — no segment, no log entry);
//!    otherwise hand one dispatch cycle to the discipline.
//! 4. Derive the aggregate metrics from the accumulated totals.
//!
//! Termination is guaranteed: every dispatch strictly decreases the total
//! remaining work, and the idle-skip jumps directly to the next arrival.

use super::{Metrics, SimState, WorkItem};
use crate::models::{Process, ScheduleResult};
use crate::policy::Policy;

/// Simulates the given processes under the given policy.
///
/// Pure function of its input: no side effects, deterministic output.
/// Duplicate ids are not rejected; ties between processes sharing an id
/// resolve by working-set order.
///
/// # Example
///
/// ```
/// use cpu_sched::{simulate, ExecutionSegment, Policy, Process};
///
/// let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 2)];
/// let result = simulate(&processes, Policy::Hrrn);
///
/// assert_eq!(result.segments[0], ExecutionSegment::new(1, 0, 4));
/// assert_eq!(result.segments[1], ExecutionSegment::new(2, 4, 2));
/// ```
pub fn simulate(processes: &[Process], policy: Policy) -> ScheduleResult {
    let mut items: Vec<WorkItem> = processes
        .iter()
        .filter(|p| p.is_schedulable())
        .map(|p| WorkItem::new(*p))
        .collect();

    if items.is_empty() {
        return ScheduleResult::empty(policy);
    }
    items.sort_by_key(|item| item.process.arrival);

    let n = items.len();
    let discipline = policy.as_discipline();
    let mut state = SimState::new(items);

    while !state.all_completed() {
        if !state.any_ready() {
            state.skip_idle();
            continue;
        }
        discipline.dispatch(&mut state);
    }

    let metrics = Metrics::compute(
        n,
        state.total_waiting,
        state.total_turnaround,
        state.busy,
        state.clock,
    );

    ScheduleResult {
        policy,
        segments: state.timeline.segments,
        log: state.timeline.log,
        avg_waiting: metrics.avg_waiting,
        avg_turnaround: metrics.avg_turnaround,
        cpu_utilization: metrics.cpu_utilization,
        throughput: metrics.throughput,
        total_time: state.clock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventTag, ExecutionSegment};
    use rand::prelude::*;
    use std::collections::HashMap;

    fn procs(descs: &[(u32, i64, i64)]) -> Vec<Process> {
        descs
            .iter()
            .map(|&(id, arrival, burst)| Process::new(id, arrival, burst))
            .collect()
    }

    /// Completion time per process, reconstructed from the segments.
    fn completions(result: &ScheduleResult) -> HashMap<u32, i64> {
        let mut out = HashMap::new();
        for seg in &result.segments {
            out.insert(seg.process_id, seg.end());
        }
        out
    }

    fn assert_coalesced(result: &ScheduleResult) {
        for pair in result.segments.windows(2) {
            assert!(pair[0].start <= pair[1].start, "segments out of order");
            assert!(
                pair[0].process_id != pair[1].process_id || pair[0].end() < pair[1].start,
                "adjacent segments of P{} not coalesced",
                pair[0].process_id
            );
        }
    }

    #[test]
    fn test_srtf_two_process_preemption() {
        let input = procs(&[(1, 0, 4), (2, 1, 2)]);
        let result = simulate(&input, Policy::Srtf);

        assert_eq!(
            result.segments,
            vec![
                ExecutionSegment::new(1, 0, 1),
                ExecutionSegment::new(2, 1, 2),
                ExecutionSegment::new(1, 3, 3),
            ]
        );
        let done = completions(&result);
        assert_eq!(done[&2], 3);
        assert_eq!(done[&1], 6);

        // P2: turnaround 2, waiting 0. P1: turnaround 6, waiting 2.
        assert!((result.avg_waiting - 1.0).abs() < 1e-10);
        assert!((result.avg_turnaround - 4.0).abs() < 1e-10);
        assert!((result.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((result.throughput - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(result.total_time, 6);
    }

    #[test]
    fn test_srtf_event_log() {
        let input = procs(&[(1, 0, 4), (2, 1, 2)]);
        let result = simulate(&input, Policy::Srtf);

        let tags: Vec<&[EventTag]> = result.log.iter().map(|e| e.tags.as_slice()).collect();
        assert_eq!(
            tags,
            vec![
                &[EventTag::Start][..],
                &[EventTag::Start, EventTag::Interrupt { preempted: 1 }][..],
                &[EventTag::End][..],
                &[EventTag::Resume][..],
                &[][..],
                &[EventTag::End][..],
            ]
        );
    }

    #[test]
    fn test_hrrn_two_process() {
        let input = procs(&[(1, 0, 4), (2, 1, 2)]);
        let result = simulate(&input, Policy::Hrrn);

        assert_eq!(
            result.segments,
            vec![
                ExecutionSegment::new(1, 0, 4),
                ExecutionSegment::new(2, 4, 2),
            ]
        );
        let done = completions(&result);
        assert_eq!(done[&1], 4);
        assert_eq!(done[&2], 6);

        assert!((result.avg_waiting - 1.5).abs() < 1e-10);
        assert!((result.avg_turnaround - 4.5).abs() < 1e-10);
        assert!((result.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((result.throughput - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(result.total_time, 6);
    }

    #[test]
    fn test_idle_gap_before_first_arrival() {
        let input = procs(&[(1, 5, 2)]);
        for policy in [Policy::Srtf, Policy::Hrrn] {
            let result = simulate(&input, policy);
            assert_eq!(result.segments, vec![ExecutionSegment::new(1, 5, 2)]);
            assert!(result.log.iter().all(|e| e.time >= 5));
            assert_eq!(result.total_time, 7);
            assert!((result.cpu_utilization - 2.0 / 7.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_idle_gap_between_arrivals() {
        let input = procs(&[(1, 0, 2), (2, 10, 1)]);
        let result = simulate(&input, Policy::Srtf);
        assert_eq!(
            result.segments,
            vec![
                ExecutionSegment::new(1, 0, 2),
                ExecutionSegment::new(2, 10, 1),
            ]
        );
        // Elapsed = busy + idle gap.
        assert_eq!(result.total_time, 11);
        assert!((result.cpu_utilization - 3.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_input() {
        for policy in [Policy::Srtf, Policy::Hrrn] {
            let result = simulate(&[], policy);
            assert_eq!(result, ScheduleResult::empty(policy));
        }
    }

    #[test]
    fn test_unschedulable_processes_filtered() {
        let input = procs(&[(1, 0, 0), (2, 3, -5)]);
        let result = simulate(&input, Policy::Srtf);
        assert_eq!(result, ScheduleResult::empty(Policy::Srtf));

        // Schedulable ones still run when mixed with filtered ones.
        let mixed = procs(&[(1, 0, 0), (2, 0, 3)]);
        let result = simulate(&mixed, Policy::Hrrn);
        assert_eq!(result.segments, vec![ExecutionSegment::new(2, 0, 3)]);
        assert_eq!(result.total_time, 3);
        assert!((result.throughput - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_tie_prefers_smaller_id() {
        // Equal remaining time at t=0; P1 wins the tie and then stays
        // ahead, so it runs to completion first.
        let input = procs(&[(2, 0, 3), (1, 0, 3)]);
        let result = simulate(&input, Policy::Srtf);
        assert_eq!(
            result.segments,
            vec![
                ExecutionSegment::new(1, 0, 3),
                ExecutionSegment::new(2, 3, 3),
            ]
        );
    }

    #[test]
    fn test_hrrn_tie_prefers_smaller_id() {
        let input = procs(&[(2, 0, 3), (1, 0, 3)]);
        let result = simulate(&input, Policy::Hrrn);
        assert_eq!(result.segments[0].process_id, 1);
        assert_eq!(result.segments[1].process_id, 2);
    }

    #[test]
    fn test_negative_arrival_participates_as_given() {
        let input = procs(&[(1, -3, 2)]);
        let result = simulate(&input, Policy::Srtf);
        assert_eq!(result.segments, vec![ExecutionSegment::new(1, 0, 2)]);
        // Turnaround measured from the negative arrival: 2 - (-3) = 5.
        assert!((result.avg_turnaround - 5.0).abs() < 1e-10);
        assert!((result.avg_waiting - 3.0).abs() < 1e-10);
        assert_eq!(result.total_time, 2);
    }

    #[test]
    fn test_determinism() {
        let input = procs(&[(3, 0, 5), (1, 2, 3), (2, 2, 3), (4, 11, 1)]);
        for policy in [Policy::Srtf, Policy::Hrrn] {
            let first = simulate(&input, policy);
            let second = simulate(&input, policy);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_caller_input_not_mutated() {
        let input = procs(&[(1, 0, 4), (2, 1, 2)]);
        let before = input.clone();
        simulate(&input, Policy::Srtf);
        simulate(&input, Policy::Hrrn);
        assert_eq!(input, before);
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..25 {
            let count = rng.random_range(1..=12);
            let input: Vec<Process> = (0..count)
                .map(|i| {
                    Process::new(
                        i as u32 + 1,
                        rng.random_range(0..20),
                        rng.random_range(1..8),
                    )
                })
                .collect();
            let total_burst: i64 = input.iter().map(|p| p.burst).sum();

            for policy in [Policy::Srtf, Policy::Hrrn] {
                let result = simulate(&input, policy);

                // Work conservation: segments cover exactly the burst sum.
                let seg_sum: i64 = result.segments.iter().map(|s| s.duration).sum();
                assert_eq!(seg_sum, total_burst);
                assert!(result.total_time >= seg_sum);
                assert!(
                    (result.cpu_utilization - seg_sum as f64 / result.total_time as f64).abs()
                        < 1e-10
                );

                assert_coalesced(&result);
                assert!(result.avg_waiting >= 0.0);
                assert!(result.avg_turnaround >= result.avg_waiting);

                // Every process completes no earlier than arrival + burst.
                let done = completions(&result);
                for p in &input {
                    assert!(done[&p.id] >= p.arrival + p.burst);
                }
            }
        }
    }
}
