/*!
 * Feedback-Queue Engine
 * One generic multi-level engine; FCFS, round robin, and the two
 * multi-level feedback queue variants are quantum configurations of it
 */

use log::debug;

use super::entry::ScheduledProcess;
use super::queue::ReadyQueue;
use super::Policy;
use crate::core::types::{Pid, Tick};
use crate::process::ProcessArrival;

/// How the per-level quantum grows with queue depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantumGrowth {
    /// No quantum: the running process is never demoted
    Unbounded,
    /// The same quantum at every level
    Fixed(Tick),
    /// `base * (level + 1)`
    Linear(Tick),
    /// `base * (level + 1)^2`
    Quadratic(Tick),
}

/// Shape of a feedback scheduler: number of levels plus quantum rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantumConfig {
    pub levels: usize,
    pub growth: QuantumGrowth,
}

impl QuantumConfig {
    /// Quantum for a level, or `None` when the level never expires
    pub fn quantum_for_level(&self, level: usize) -> Option<Tick> {
        let level = level as Tick;
        match self.growth {
            QuantumGrowth::Unbounded => None,
            QuantumGrowth::Fixed(quantum) => Some(quantum),
            QuantumGrowth::Linear(base) => Some(base * (level + 1)),
            QuantumGrowth::Quadratic(base) => Some(base * (level + 1) * (level + 1)),
        }
    }
}

/// Multi-level feedback scheduler.
///
/// Level 0 is the highest priority and the entry queue for new
/// arrivals. When no process is current, the head of the first
/// non-empty level runs. A process that exhausts its level's quantum is
/// demoted one level (processes at the last level requeue onto it) with
/// its quantum counter reset.
pub struct FeedbackScheduler {
    name: &'static str,
    config: QuantumConfig,
    levels: Vec<ReadyQueue>,
    current: Option<ScheduledProcess>,
}

impl FeedbackScheduler {
    pub fn new(name: &'static str, config: QuantumConfig) -> Self {
        assert!(config.levels > 0, "feedback scheduler needs at least one level");
        Self {
            name,
            config,
            levels: (0..config.levels).map(|_| ReadyQueue::new()).collect(),
            current: None,
        }
    }

    /// First-come-first-served: a single queue, never preempted
    pub fn fcfs() -> Self {
        Self::new(
            "fcfs",
            QuantumConfig {
                levels: 1,
                growth: QuantumGrowth::Unbounded,
            },
        )
    }

    /// Round robin with a fixed quantum of 3
    pub fn round_robin() -> Self {
        Self::new(
            "round-robin",
            QuantumConfig {
                levels: 1,
                growth: QuantumGrowth::Fixed(3),
            },
        )
    }

    /// Four levels with linearly growing quanta: 3, 6, 9, 12
    pub fn mlfq_linear() -> Self {
        Self::new(
            "mlfq-linear",
            QuantumConfig {
                levels: 4,
                growth: QuantumGrowth::Linear(3),
            },
        )
    }

    /// Four levels with quadratically growing quanta: 2, 8, 18, 32
    pub fn mlfq_quadratic() -> Self {
        Self::new(
            "mlfq-quadratic",
            QuantumConfig {
                levels: 4,
                growth: QuantumGrowth::Quadratic(2),
            },
        )
    }

    pub fn config(&self) -> QuantumConfig {
        self.config
    }

    /// Pid of the process in the current-running slot
    pub fn current(&self) -> Option<Pid> {
        self.current.as_ref().map(|p| p.pid())
    }

    /// Pids per level in queue order, for introspection and tests
    pub fn queue_snapshot(&self) -> Vec<Vec<Pid>> {
        self.levels.iter().map(|queue| queue.pids()).collect()
    }

    fn take_next(&mut self) -> Option<ScheduledProcess> {
        for (level, queue) in self.levels.iter_mut().enumerate() {
            if let Some(mut process) = queue.pop_front() {
                process.level = level;
                return Some(process);
            }
        }
        None
    }

    fn dump_queues(&self, event: &str) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        debug!("{} queues after {}:", self.name, event);
        for (level, queue) in self.levels.iter().enumerate() {
            debug!("  level {}: {}", level, queue);
        }
    }
}

impl Policy for FeedbackScheduler {
    fn admit(&mut self, arrival: ProcessArrival) {
        debug!("{}: admitting pid {}", self.name, arrival.pid);
        self.levels[0].insert(ScheduledProcess::new(arrival));
        self.dump_queues("admission");
    }

    fn tick(&mut self) -> Option<Pid> {
        if self.current.is_none() {
            self.current = self.take_next();
        }

        let mut process = self.current.take()?;
        process.run_one_tick();
        let pid = process.pid();

        if process.is_complete() {
            debug!("{}: pid {} completed", self.name, pid);
            self.dump_queues("completion");
            return Some(pid);
        }

        match self.config.quantum_for_level(process.level) {
            Some(quantum) if process.quantum_used >= quantum => {
                let next_level = (process.level + 1).min(self.config.levels - 1);
                debug!(
                    "{}: pid {} exhausted quantum {} at level {}, moving to level {}",
                    self.name, pid, quantum, process.level, next_level
                );
                process.quantum_used = 0;
                process.level = next_level;
                self.levels[next_level].push_back(process);
            }
            _ => self.current = Some(process),
        }

        Some(pid)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
