/*!
 * schedsim - Discrete Process-Scheduling Simulator
 *
 * Advances simulated time one unit at a time, admits processes as they
 * arrive, asks a pluggable scheduling policy which process (if any) to
 * run for that unit, and records per-process turnaround and wait-time
 * statistics.
 */

pub mod core;
pub mod input;
pub mod process;
pub mod scheduler;
pub mod sim;

// Re-exports
pub use crate::core::errors::{InputError, SimulationError};
pub use crate::core::types::{Pid, Tick, MAX_PID, TIME_BOUND};
pub use crate::input::read_process_file;
pub use crate::process::{ProcessArrival, ProcessStats};
pub use crate::scheduler::{
    FeedbackScheduler, Policy, PolicyKind, QuantumConfig, QuantumGrowth, ScoringScheduler,
    UnknownPolicy,
};
pub use crate::sim::{Driver, SimulationReport};
