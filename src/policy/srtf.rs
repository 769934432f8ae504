//! Shortest Remaining Time First (preemptive).
//!
//! # Algorithm
//!
//! 1. Among ready processes, select the one with the least remaining time;
//!    ties break toward the smallest id.
//! 2. Execute it for exactly one time unit.
//! 3. Classify the instant against the previous execution record: `start`
//!    when the process has never run, `interrupt` when it takes the CPU
//!    from a process that still has remaining work, `resume` when it
//!    continues after an earlier preemption, `end` when its last unit
//!    completes. Tags combine (a one-unit burst is both start and end).
//!
//! SRTF is optimal for mean waiting time on a single CPU when burst
//! lengths are known, at the cost of starving long bursts under load.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::Discipline;
use crate::models::{EventTag, LogEntry};
use crate::sim::{PrevExec, ProcState, SimState};

/// Shortest Remaining Time First.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Discipline for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn dispatch(&self, state: &mut SimState) {
        let Some(idx) = select(state) else {
            return;
        };

        let time = state.clock;
        let item = &state.items[idx];
        let id = item.process.id;

        let is_start = item.never_ran();
        let interrupted = state
            .prev
            .filter(|prev| prev.process_id != id && prev.remaining > 0)
            .map(|prev| prev.process_id);
        let is_resume = !is_start
            && interrupted.is_none()
            && state.prev.is_some_and(|prev| prev.process_id != id);

        let item = &mut state.items[idx];
        item.state = ProcState::Running;
        item.remaining -= 1;
        state.busy += 1;
        let ended = state.items[idx].remaining == 0;

        let mut tags = Vec::new();
        if is_start {
            tags.push(EventTag::Start);
        }
        if let Some(preempted) = interrupted {
            tags.push(EventTag::Interrupt { preempted });
        }
        if is_resume {
            tags.push(EventTag::Resume);
        }
        if ended {
            tags.push(EventTag::End);
        }
        state.timeline.push_entry(LogEntry {
            time,
            process_id: id,
            burst: None,
            tags,
        });
        state.timeline.record_unit(id, time);

        state.clock = time + 1;
        if ended {
            state.complete(idx);
        } else {
            state.items[idx].state = ProcState::Waiting;
        }
        state.prev = Some(PrevExec {
            process_id: id,
            remaining: state.items[idx].remaining,
        });
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Index of the ready process with the least remaining time, ties broken
/// by smallest id.
fn select(state: &SimState) -> Option<usize> {
    state
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_ready(state.clock))
        .min_by_key(|(_, item)| (item.remaining, item.process.id))
        .map(|(idx, _)| idx)
}
