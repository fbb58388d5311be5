/*!
 * Simulation Driver
 * Owns simulated time: admission, tick dispatch, integrity checks, and
 * the safety cutoff
 */

use std::io::Write;

use log::{debug, info};

use crate::core::errors::SimulationError;
use crate::core::types::{Pid, Tick};
use crate::process::{ProcessArrival, ProcessStats};
use crate::scheduler::Policy;

mod stats;
pub use stats::SimulationReport;

/// Drives a policy over simulated time, one tick at a time.
///
/// The driver's `ProcessStats` are authoritative for final results; the
/// policy keeps its own in-flight copies and is only ever reached
/// through `admit` and `tick`.
pub struct Driver {
    policy: Box<dyn Policy>,
    processes: Vec<ProcessStats>,
    schedule: Vec<Option<Pid>>,
}

impl Driver {
    pub fn new(policy: Box<dyn Policy>, arrivals: &[ProcessArrival]) -> Self {
        Self {
            policy,
            processes: arrivals.iter().copied().map(ProcessStats::new).collect(),
            schedule: Vec::new(),
        }
    }

    fn still_running(&self) -> bool {
        self.processes.iter().any(|p| !p.is_finished())
    }

    fn position_of(&self, pid: Pid) -> Option<usize> {
        self.processes.iter().position(|p| p.arrival.pid == pid)
    }

    /// Run the simulation until every process finishes or `bound` ticks
    /// elapse, writing one line per tick to `out`.
    ///
    /// Integrity failures (a pid outside the process set, a process run
    /// past its processing time) abort the run; they signal a policy
    /// bug, not user error.
    pub fn run(&mut self, bound: Tick, out: &mut dyn Write) -> Result<(), SimulationError> {
        info!(
            "simulation starting: policy={}, processes={}, bound={}",
            self.policy.name(),
            self.processes.len(),
            bound
        );
        writeln!(out, "Time\tPID")?;

        let mut time: Tick = 0;
        while time < bound && self.still_running() {
            for index in 0..self.processes.len() {
                let arrival = self.processes[index].arrival;
                if arrival.arrival_time == time {
                    self.policy.admit(arrival);
                }
            }

            let scheduled = self.policy.tick();
            if let Some(pid) = scheduled {
                let index = self
                    .position_of(pid)
                    .ok_or(SimulationError::UnknownPid { pid, time })?;
                let process = &mut self.processes[index];
                process.processed_time += 1;
                if process.processed_time == process.arrival.processing_time {
                    process.end_time = time;
                    debug!("pid {} finished at tick {}", pid, time);
                } else if process.processed_time > process.arrival.processing_time {
                    return Err(SimulationError::OverranProcessing { pid, time });
                }
                writeln!(out, "{}:\t{}", time, pid)?;
            } else {
                writeln!(out, "{}:\t", time)?;
            }
            self.schedule.push(scheduled);
            time += 1;
        }

        if self.still_running() {
            return Err(SimulationError::TimedOut { bound });
        }
        info!("simulation complete at tick {}", time);
        Ok(())
    }

    /// Per-tick scheduled pids, for determinism checks and tests
    pub fn schedule(&self) -> &[Option<Pid>] {
        &self.schedule
    }

    pub fn processes(&self) -> &[ProcessStats] {
        &self.processes
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport::from_processes(&self.processes)
    }
}
