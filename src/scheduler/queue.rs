/*!
 * Ready Queue
 * Ordered collection of admitted, not-yet-finished processes
 */

use std::collections::VecDeque;
use std::fmt;

use super::entry::ScheduledProcess;
use crate::core::types::Pid;

/// A single ready queue.
///
/// `insert` maintains the `(arrival_time, pid)` total order; `push_back`
/// deliberately bypasses it because the tail position of a requeued
/// process is part of the round-robin/demotion semantics.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    entries: VecDeque<ScheduledProcess>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Ordered insert: earlier arrivals first, ties broken by the
    /// smaller pid
    pub fn insert(&mut self, process: ScheduledProcess) {
        let mut pos = 0;
        while pos < self.entries.len()
            && self.entries[pos].arrival.arrival_time < process.arrival.arrival_time
        {
            pos += 1;
        }
        while pos < self.entries.len()
            && self.entries[pos].arrival.arrival_time == process.arrival.arrival_time
            && self.entries[pos].arrival.pid < process.arrival.pid
        {
            pos += 1;
        }
        self.entries.insert(pos, process);
    }

    /// Requeue at the tail after a quantum expiry or demotion
    pub fn push_back(&mut self, process: ScheduledProcess) {
        self.entries.push_back(process);
    }

    /// Detach and return the first element, if any
    pub fn pop_front(&mut self) -> Option<ScheduledProcess> {
        self.entries.pop_front()
    }

    pub fn front(&self) -> Option<&ScheduledProcess> {
        self.entries.front()
    }

    /// Detach the element at `index` (scoring-policy selection)
    pub fn remove(&mut self, index: usize) -> Option<ScheduledProcess> {
        self.entries.remove(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledProcess> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ScheduledProcess> {
        self.entries.iter_mut()
    }

    /// Pids in queue order, for introspection and tests
    pub fn pids(&self) -> Vec<Pid> {
        self.entries.iter().map(|p| p.arrival.pid).collect()
    }
}

impl fmt::Display for ReadyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "pid {} ({}/{} run, arrived {})",
                p.arrival.pid, p.processed_time, p.arrival.processing_time, p.arrival.arrival_time
            )?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessArrival;
    use pretty_assertions::assert_eq;

    fn proc(pid: Pid, arrival: u32) -> ScheduledProcess {
        ScheduledProcess::new(ProcessArrival::new(pid, arrival, 5))
    }

    #[test]
    fn insert_orders_by_arrival_time() {
        let mut queue = ReadyQueue::new();
        queue.insert(proc(1, 5));
        queue.insert(proc(2, 0));
        queue.insert(proc(3, 3));
        assert_eq!(queue.pids(), vec![2, 3, 1]);
    }

    #[test]
    fn insert_breaks_arrival_ties_by_pid() {
        let mut queue = ReadyQueue::new();
        queue.insert(proc(5, 2));
        queue.insert(proc(1, 2));
        queue.insert(proc(3, 2));
        assert_eq!(queue.pids(), vec![1, 3, 5]);
    }

    #[test]
    fn push_back_skips_ordering() {
        let mut queue = ReadyQueue::new();
        queue.insert(proc(1, 4));
        queue.push_back(proc(2, 0));
        assert_eq!(queue.pids(), vec![1, 2]);
    }

    #[test]
    fn pop_front_returns_head_or_none() {
        let mut queue = ReadyQueue::new();
        assert!(queue.pop_front().is_none());
        queue.insert(proc(1, 0));
        queue.insert(proc(2, 1));
        assert_eq!(queue.pop_front().map(|p| p.pid()), Some(1));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_detaches_by_index() {
        let mut queue = ReadyQueue::new();
        queue.insert(proc(1, 0));
        queue.insert(proc(2, 1));
        queue.insert(proc(3, 2));
        assert_eq!(queue.remove(1).map(|p| p.pid()), Some(2));
        assert_eq!(queue.pids(), vec![1, 3]);
        assert!(queue.remove(5).is_none());
    }
}
