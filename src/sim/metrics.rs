//! Aggregate performance metrics.
//!
//! Derives the four standard figures from the totals accumulated during a
//! run:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | CPU Utilization | busy / total elapsed time |
//! | Throughput | completed processes / total elapsed time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

/// The four aggregate performance figures of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Fraction of elapsed time spent executing (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl Metrics {
    /// All-zero metrics, used when no process was schedulable.
    pub fn zero() -> Self {
        Self {
            avg_waiting: 0.0,
            avg_turnaround: 0.0,
            cpu_utilization: 0.0,
            throughput: 0.0,
        }
    }

    /// Computes the metrics over `n` schedulable processes.
    ///
    /// With `n == 0` no division takes place and every figure is 0.
    /// Otherwise `total_time > 0` holds, since each schedulable process
    /// contributes at least one busy unit.
    pub fn compute(
        n: usize,
        total_waiting: i64,
        total_turnaround: i64,
        busy: i64,
        total_time: i64,
    ) -> Self {
        if n == 0 {
            return Self::zero();
        }
        Self {
            avg_waiting: total_waiting as f64 / n as f64,
            avg_turnaround: total_turnaround as f64 / n as f64,
            cpu_utilization: busy as f64 / total_time as f64,
            throughput: n as f64 / total_time as f64,
        }
    }
}
