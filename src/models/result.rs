//! Schedule result model.
//!
//! The immutable output of one simulation run: the execution timeline,
//! the structured event log, and the aggregate performance metrics.

use serde::{Deserialize, Serialize};

use super::{ExecutionSegment, LogEntry};
use crate::policy::Policy;

/// The complete output of one scheduling run.
///
/// Produced exactly once per run and owned by the caller. All metric
/// fields are `0` when no process was schedulable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Discipline that produced this result.
    pub policy: Policy,
    /// Execution segments, ordered by non-decreasing start time.
    pub segments: Vec<ExecutionSegment>,
    /// Structured event log, ordered by dispatch instant.
    pub log: Vec<LogEntry>,
    /// Mean waiting time across schedulable processes.
    pub avg_waiting: f64,
    /// Mean turnaround time across schedulable processes.
    pub avg_turnaround: f64,
    /// Fraction of elapsed time the CPU was executing (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Simulation time at which the last process completed.
    pub total_time: i64,
}

impl ScheduleResult {
    /// The result of running `policy` over zero schedulable processes.
    pub fn empty(policy: Policy) -> Self {
        Self {
            policy,
            segments: Vec::new(),
            log: Vec::new(),
            avg_waiting: 0.0,
            avg_turnaround: 0.0,
            cpu_utilization: 0.0,
            throughput: 0.0,
            total_time: 0,
        }
    }

    /// Header line naming the discipline.
    pub fn header(&self) -> String {
        format!("--- {} Scheduling ---", self.policy)
    }

    /// Renders the event log as human-readable text: the header line
    /// followed by one line per entry.
    pub fn render_log(&self) -> String {
        let mut out = self.header();
        out.push('\n');
        for entry in &self.log {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventTag;

    #[test]
    fn test_empty_result() {
        let res = ScheduleResult::empty(Policy::Srtf);
        assert!(res.segments.is_empty());
        assert!(res.log.is_empty());
        assert_eq!(res.avg_waiting, 0.0);
        assert_eq!(res.avg_turnaround, 0.0);
        assert_eq!(res.cpu_utilization, 0.0);
        assert_eq!(res.throughput, 0.0);
        assert_eq!(res.total_time, 0);
    }

    #[test]
    fn test_header_names_policy() {
        assert_eq!(
            ScheduleResult::empty(Policy::Srtf).header(),
            "--- SRTF Scheduling ---"
        );
        assert_eq!(
            ScheduleResult::empty(Policy::Hrrn).header(),
            "--- HRRN Scheduling ---"
        );
    }

    #[test]
    fn test_render_log() {
        let mut res = ScheduleResult::empty(Policy::Hrrn);
        res.log.push(LogEntry {
            time: 0,
            process_id: 1,
            burst: Some(2),
            tags: vec![EventTag::Start, EventTag::End],
        });
        assert_eq!(
            res.render_log(),
            "--- HRRN Scheduling ---\nt=0 -> P1 (burst=2) (start) (end)\n"
        );
    }

    #[test]
    fn test_result_serializes() {
        let mut res = ScheduleResult::empty(Policy::Srtf);
        res.segments.push(ExecutionSegment::new(1, 0, 3));
        res.total_time = 3;

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["policy"], "Srtf");
        assert_eq!(json["total_time"], 3);
        assert_eq!(json["segments"][0]["process_id"], 1);

        let back: ScheduleResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, res);
    }
}
