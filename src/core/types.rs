/*!
 * Core Types
 * Common types and limits used across the simulator
 */

/// Process ID type (input files use pid 0 as "no process", so valid
/// pids are strictly positive)
pub type Pid = u32;

/// One discrete unit of simulated CPU time
pub type Tick = u32;

/// Exclusive upper bound for process ids
pub const MAX_PID: Pid = 1_000_000;

/// Simulation horizon: a hard safety cutoff against policies that never
/// finish, not a scheduling parameter. Also the exclusive upper bound
/// for arrival times, processing times, and the process count.
pub const TIME_BOUND: Tick = 1_000_000;
