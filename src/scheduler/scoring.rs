/*!
 * Adaptive Scoring Policy
 * Two-tier scheduler: a fast FCFS tier for fresh processes and a smart
 * tier ranked by a wait/run/reschedule score
 */

use std::cmp::Ordering;

use log::debug;

use super::entry::ScheduledProcess;
use super::queue::ReadyQueue;
use super::Policy;
use crate::core::types::{Pid, Tick};
use crate::process::ProcessArrival;

// New entries start at level 0, the fast tier
const SMART_LEVEL: usize = 1;

/// Quantum 2 for the fast tier, 4 for the smart tier
fn quantum_for_level(level: usize) -> Tick {
    2 * (level as Tick + 1)
}

/// Two-tier adaptive scheduler.
///
/// New arrivals enter the fast tier and run in FCFS order. A process
/// that exhausts its quantum moves to the smart tier, where selection
/// picks the waiting process with the highest score. Every process
/// waiting in either tier ages by one wait tick per `tick` call.
pub struct ScoringScheduler {
    fast: ReadyQueue,
    smart: ReadyQueue,
    current: Option<ScheduledProcess>,
}

impl ScoringScheduler {
    pub fn new() -> Self {
        Self {
            fast: ReadyQueue::new(),
            smart: ReadyQueue::new(),
            current: None,
        }
    }

    /// Pid of the process in the current-running slot
    pub fn current(&self) -> Option<Pid> {
        self.current.as_ref().map(|p| p.pid())
    }

    /// Pids of the fast and smart tiers in queue order
    pub fn tier_snapshot(&self) -> (Vec<Pid>, Vec<Pid>) {
        (self.fast.pids(), self.smart.pids())
    }

    fn age_waiting(&mut self) {
        for process in self.fast.iter_mut().chain(self.smart.iter_mut()) {
            process.history.wait_time += 1;
        }
    }

    /// Highest score wins; equal scores go to the smaller pid
    fn select_from_smart(&mut self) -> Option<ScheduledProcess> {
        let mut best: Option<(usize, f64, Pid)> = None;
        for (index, process) in self.smart.iter().enumerate() {
            let score = process.history.score();
            let better = match best {
                None => true,
                Some((_, best_score, best_pid)) => match score.partial_cmp(&best_score) {
                    Some(Ordering::Greater) => true,
                    Some(Ordering::Equal) => process.pid() < best_pid,
                    _ => false,
                },
            };
            if better {
                best = Some((index, score, process.pid()));
            }
        }
        best.and_then(|(index, score, pid)| {
            debug!("scoring: selected pid {} from smart tier (score {:.3})", pid, score);
            self.smart.remove(index)
        })
    }

    fn dump_queues(&self, event: &str) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        debug!("scoring queues after {}:", event);
        debug!("  fast:  {}", self.fast);
        debug!("  smart: {}", self.smart);
    }
}

impl Default for ScoringScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for ScoringScheduler {
    fn admit(&mut self, arrival: ProcessArrival) {
        debug!("scoring: admitting pid {}", arrival.pid);
        self.fast.insert(ScheduledProcess::new(arrival));
        self.dump_queues("admission");
    }

    fn tick(&mut self) -> Option<Pid> {
        // Wait-time bookkeeping happens before selection, so the
        // process picked this tick still collects this tick's wait
        self.age_waiting();

        if self.current.is_none() {
            self.current = if !self.fast.is_empty() {
                self.fast.pop_front()
            } else {
                self.select_from_smart()
            };
        }

        let mut process = self.current.take()?;
        process.run_one_tick();
        process.history.total_time_run += 1;
        let pid = process.pid();

        if process.is_complete() {
            // the entry and its history are dropped together
            debug!("scoring: pid {} completed", pid);
            self.dump_queues("completion");
            return Some(pid);
        }

        if process.quantum_used >= quantum_for_level(process.level) {
            process.quantum_used = 0;
            process.history.reschedule_count += 1;
            process.level = SMART_LEVEL;
            self.smart.push_back(process);
        } else {
            self.current = Some(process);
        }

        Some(pid)
    }

    fn name(&self) -> &'static str {
        "scoring"
    }
}
