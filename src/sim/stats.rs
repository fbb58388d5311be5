/*!
 * Simulation Statistics
 * Average turnaround and wait time over completed processes
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::process::ProcessStats;

/// Summary statistics for a finished simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub average_turnaround: f64,
    pub average_wait: f64,
}

impl SimulationReport {
    pub fn from_processes(processes: &[ProcessStats]) -> Self {
        if processes.is_empty() {
            return Self {
                average_turnaround: 0.0,
                average_wait: 0.0,
            };
        }
        let count = processes.len() as f64;
        let turnaround: f64 = processes
            .iter()
            .map(|p| f64::from(p.turnaround_time()))
            .sum();
        let wait: f64 = processes.iter().map(|p| f64::from(p.wait_time())).sum();
        Self {
            average_turnaround: turnaround / count,
            average_wait: wait / count,
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average turnaround time:\t{:.2}", self.average_turnaround)?;
        write!(f, "Average wait time:\t{:.2}", self.average_wait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessArrival;
    use pretty_assertions::assert_eq;

    fn finished(pid: u32, arrival: u32, processing: u32, end: u32) -> ProcessStats {
        let mut stats = ProcessStats::new(ProcessArrival::new(pid, arrival, processing));
        stats.processed_time = processing;
        stats.end_time = end;
        stats
    }

    #[test]
    fn averages_over_all_processes() {
        let processes = vec![finished(1, 0, 3, 2), finished(2, 0, 2, 4)];
        let report = SimulationReport::from_processes(&processes);
        assert_eq!(report.average_turnaround, 4.0);
        assert_eq!(report.average_wait, 1.5);
    }

    #[test]
    fn empty_set_reports_zero() {
        let report = SimulationReport::from_processes(&[]);
        assert_eq!(report.average_turnaround, 0.0);
        assert_eq!(report.average_wait, 0.0);
    }

    #[test]
    fn display_uses_two_decimal_places() {
        let processes = vec![finished(1, 0, 3, 2), finished(2, 0, 2, 4)];
        let report = SimulationReport::from_processes(&processes);
        assert_eq!(
            report.to_string(),
            "Average turnaround time:\t4.00\nAverage wait time:\t1.50"
        );
    }
}
