/*!
 * Process Records
 * Immutable arrival facts and driver-owned outcome statistics
 */

use serde::{Deserialize, Serialize};

use crate::core::types::{Pid, Tick};

/// Initial data read in for a process; never mutated after parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessArrival {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub processing_time: Tick,
}

impl ProcessArrival {
    pub fn new(pid: Pid, arrival_time: Tick, processing_time: Tick) -> Self {
        Self {
            pid,
            arrival_time,
            processing_time,
        }
    }
}

/// Final accounting for a simulated process, owned by the driver.
///
/// The driver keeps these authoritative for final results while the
/// active policy keeps its own in-flight copies; the two are synced at
/// tick granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    pub arrival: ProcessArrival,
    /// Total processing units this process has already received
    pub processed_time: Tick,
    /// Tick at which the process finished; 0 while unfinished
    pub end_time: Tick,
}

impl ProcessStats {
    pub fn new(arrival: ProcessArrival) -> Self {
        Self {
            arrival,
            processed_time: 0,
            end_time: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.processed_time >= self.arrival.processing_time
    }

    /// Ticks from arrival to completion, inclusive.
    /// Only meaningful once the process has finished.
    pub fn turnaround_time(&self) -> Tick {
        self.end_time - self.arrival.arrival_time + 1
    }

    /// Turnaround time minus the ticks actually executed
    pub fn wait_time(&self) -> Tick {
        self.turnaround_time() - self.processed_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn turnaround_is_inclusive_of_both_ends() {
        let mut stats = ProcessStats::new(ProcessArrival::new(1, 0, 3));
        stats.processed_time = 3;
        stats.end_time = 2;
        assert_eq!(stats.turnaround_time(), 3);
        assert_eq!(stats.wait_time(), 0);
    }

    #[test]
    fn wait_time_counts_unscheduled_ticks() {
        let mut stats = ProcessStats::new(ProcessArrival::new(2, 0, 2));
        stats.processed_time = 2;
        stats.end_time = 4;
        assert_eq!(stats.turnaround_time(), 5);
        assert_eq!(stats.wait_time(), 3);
    }

    #[test]
    fn finished_only_when_fully_processed() {
        let mut stats = ProcessStats::new(ProcessArrival::new(3, 1, 2));
        assert!(!stats.is_finished());
        stats.processed_time = 1;
        assert!(!stats.is_finished());
        stats.processed_time = 2;
        assert!(stats.is_finished());
    }
}
