/*!
 * Scheduler Entry Types
 * Mutable per-process state owned by the policies
 */

use crate::core::types::{Pid, Tick};
use crate::process::ProcessArrival;

/// A process admitted to a policy but not yet finished.
///
/// Exactly one of these exists per admitted, unfinished pid, either in
/// one of the policy's queues or in its current-running slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledProcess {
    pub arrival: ProcessArrival,
    /// Cumulative executed units, bounded by `processing_time`
    pub processed_time: Tick,
    /// Units executed since the last requeue or demotion
    pub quantum_used: Tick,
    /// Queue level this process currently belongs to
    pub level: usize,
    /// Scheduling history, used only by the scoring policy
    pub history: RunHistory,
}

impl ScheduledProcess {
    pub fn new(arrival: ProcessArrival) -> Self {
        Self {
            arrival,
            processed_time: 0,
            quantum_used: 0,
            level: 0,
            history: RunHistory::default(),
        }
    }

    pub fn pid(&self) -> Pid {
        self.arrival.pid
    }

    /// Advance this process by one unit of simulated CPU time
    pub fn run_one_tick(&mut self) {
        self.processed_time += 1;
        self.quantum_used += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.processed_time == self.arrival.processing_time
    }
}

/// Per-process scheduling history kept by the adaptive scoring policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunHistory {
    /// Ticks spent waiting in a ready queue
    pub wait_time: Tick,
    /// Ticks of CPU time received so far
    pub total_time_run: Tick,
    /// How many times the process was requeued after a quantum expiry
    pub reschedule_count: u32,
}

impl RunHistory {
    /// Rank a waiting process: accumulated wait raises the score, CPU
    /// time already consumed and previous reschedules lower it
    pub fn score(&self) -> f64 {
        let waiting = f64::from(self.wait_time + 1);
        let running = f64::from(self.total_time_run + 1);
        let penalty = f64::from(self.reschedule_count + 1);
        waiting / running - penalty * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_one_tick_advances_both_counters() {
        let mut process = ScheduledProcess::new(ProcessArrival::new(1, 0, 2));
        process.run_one_tick();
        assert_eq!(process.processed_time, 1);
        assert_eq!(process.quantum_used, 1);
        assert!(!process.is_complete());
        process.run_one_tick();
        assert!(process.is_complete());
    }

    #[test]
    fn fresh_history_scores_at_half() {
        // (0+1)/(0+1) - 0.5*(0+1)
        let history = RunHistory::default();
        assert_eq!(history.score(), 0.5);
    }

    #[test]
    fn waiting_raises_score_rescheduling_lowers_it() {
        let waited = RunHistory {
            wait_time: 9,
            total_time_run: 1,
            reschedule_count: 0,
        };
        // (9+1)/(1+1) - 0.5 = 4.5
        assert_eq!(waited.score(), 4.5);

        let rescheduled = RunHistory {
            wait_time: 9,
            total_time_run: 1,
            reschedule_count: 3,
        };
        // (9+1)/(1+1) - 2.0 = 3.0
        assert_eq!(rescheduled.score(), 3.0);
    }
}
