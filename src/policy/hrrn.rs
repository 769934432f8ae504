//! Highest Response Ratio Next (non-preemptive).
//!
//! # Algorithm
//!
//! 1. For every ready process compute the response ratio
//!    `(waiting + burst) / burst`, where `waiting = clock - arrival`.
//! 2. Select the maximum ratio; ratios within `RATIO_EPSILON` count as a
//!    tie, broken toward the smallest id.
//! 3. Run the selected process for its entire burst atomically: one
//!    segment, one combined start/end log entry.
//!
//! The ratio favors short bursts (like SJF) but grows with waiting time,
//! so long-waiting processes cannot starve.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming
//! systems"; Stallings (2018), "Operating Systems", Ch. 9.2

use super::Discipline;
use crate::models::{EventTag, LogEntry};
use crate::sim::{ProcState, SimState};

/// Ratios closer than this count as equal during selection.
pub const RATIO_EPSILON: f64 = 1e-6;

/// Highest Response Ratio Next.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hrrn;

/// Response ratio `(waiting + burst) / burst`.
///
/// Equals 1.0 for a process that has not waited at all and grows linearly
/// with waiting time, inversely with burst length.
pub fn response_ratio(waiting: i64, burst: i64) -> f64 {
    (waiting + burst) as f64 / burst as f64
}

impl Discipline for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn dispatch(&self, state: &mut SimState) {
        let Some(idx) = select(state) else {
            return;
        };

        let time = state.clock;
        let item = &mut state.items[idx];
        let id = item.process.id;
        let burst = item.process.burst;

        item.state = ProcState::Running;
        item.remaining = 0;

        state.timeline.push_entry(LogEntry {
            time,
            process_id: id,
            burst: Some(burst),
            tags: vec![EventTag::Start, EventTag::End],
        });
        state.timeline.record_burst(id, time, burst);

        state.clock = time + burst;
        state.busy += burst;
        state.complete(idx);
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

/// Index of the ready process with the highest response ratio, epsilon
/// ties broken by smallest id.
fn select(state: &SimState) -> Option<usize> {
    let mut best: Option<(usize, f64, u32)> = None;

    for (idx, item) in state.items.iter().enumerate() {
        if !item.is_ready(state.clock) {
            continue;
        }
        let waiting = state.clock - item.process.arrival;
        let ratio = response_ratio(waiting, item.process.burst);

        match best {
            None => best = Some((idx, ratio, item.process.id)),
            Some((_, best_ratio, best_id)) => {
                let tied = (ratio - best_ratio).abs() <= RATIO_EPSILON;
                if (!tied && ratio > best_ratio) || (tied && item.process.id < best_id) {
                    best = Some((idx, ratio, item.process.id));
                }
            }
        }
    }

    best.map(|(idx, _, _)| idx)
}
