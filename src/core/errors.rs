/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Pid, Tick};

/// Errors raised while reading and validating a process file.
///
/// Every variant is fatal: the simulation never starts on invalid input.
/// Line numbers are 1-based and count process lines, not file lines.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InputError {
    #[error("Unable to read {0}!")]
    #[diagnostic(
        code(input::open_failed),
        help("Please ensure the file exists and is readable.")
    )]
    Open(String),

    #[error("Error reading number of processes.")]
    #[diagnostic(
        code(input::missing_count),
        help("Please ensure the file begins with a line containing the number of processes in the file.")
    )]
    MissingCount,

    #[error("Error reading number of processes.")]
    #[diagnostic(
        code(input::invalid_count),
        help("Please ensure there are between 1 and 1,000,000 processes.")
    )]
    InvalidCount,

    #[error("Error reading process on line {line}!")]
    #[diagnostic(
        code(input::malformed_line),
        help("Please ensure each process line matches the following format (with pid>0): pid,arrival_time,processing_time")
    )]
    MalformedLine { line: usize },

    #[error("Error reading process on line {line}!")]
    #[diagnostic(
        code(input::pid_out_of_range),
        help("Please ensure each process id is less than 1,000,000.")
    )]
    PidOutOfRange { line: usize },

    #[error("Error reading process on line {line}!")]
    #[diagnostic(
        code(input::duplicate_pid),
        help("Please ensure each process's PID is unique.")
    )]
    DuplicatePid { line: usize },

    #[error("Error reading process on line {line}!")]
    #[diagnostic(
        code(input::arrival_out_of_range),
        help("Please ensure each process has an arrival time between 0 and 1,000,000.")
    )]
    ArrivalOutOfRange { line: usize },

    #[error("Error reading process on line {line}!")]
    #[diagnostic(
        code(input::processing_out_of_range),
        help("Please ensure each process has a processing time between 1 and 1,000,000.")
    )]
    ProcessingOutOfRange { line: usize },

    #[error("Expected {expected} processes but the file only contains {found}.")]
    #[diagnostic(
        code(input::too_few_processes),
        help("Please ensure the count line matches the number of process lines.")
    )]
    TooFewProcesses { expected: usize, found: usize },
}

/// Fatal simulation failures.
///
/// Integrity variants signal a bug in the active policy, not user error;
/// no partial statistics are reported after any of these.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid pid {pid}!")]
    #[diagnostic(
        code(simulation::unknown_pid),
        help("The policy scheduled a pid outside the admitted process set.")
    )]
    UnknownPid { pid: Pid, time: Tick },

    #[error("Process {pid} scheduled for too long!")]
    #[diagnostic(
        code(simulation::overran_processing),
        help("A process was run past its declared processing time.")
    )]
    OverranProcessing { pid: Pid, time: Tick },

    #[error("Simulation did not finish within {bound} time units")]
    #[diagnostic(
        code(simulation::timed_out),
        help("Some processes never completed before the safety cutoff.")
    )]
    TimedOut { bound: Tick },

    #[error("Failed to write simulation output: {0}")]
    #[diagnostic(code(simulation::output_failed))]
    Output(String),
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::Output(err.to_string())
    }
}
