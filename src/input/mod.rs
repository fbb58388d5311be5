/*!
 * Process File Reader
 * Parses and validates "pid,arrival_time,processing_time" input files
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::core::errors::InputError;
use crate::core::types::{Tick, MAX_PID, TIME_BOUND};
use crate::process::ProcessArrival;

/// Read a process file: a count line followed by one process per line.
///
/// Any malformed or out-of-range line aborts the whole read with its
/// 1-based process line number; the simulator core never sees
/// partially-invalid input.
pub fn read_process_file(path: impl AsRef<Path>) -> Result<Vec<ProcessArrival>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| InputError::Open(path.display().to_string()))?;
    let mut lines = BufReader::new(file).lines();

    let count_line = match lines.next() {
        Some(Ok(line)) => line,
        _ => return Err(InputError::MissingCount),
    };
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidCount)?;
    if count < 1 || count >= TIME_BOUND as usize {
        return Err(InputError::InvalidCount);
    }

    let mut processes: Vec<ProcessArrival> = Vec::with_capacity(count);
    for line_no in 1..=count {
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(_)) => return Err(InputError::MalformedLine { line: line_no }),
            None => {
                return Err(InputError::TooFewProcesses {
                    expected: count,
                    found: line_no - 1,
                })
            }
        };
        let arrival = parse_process_line(&line, line_no)?;
        if arrival.pid >= MAX_PID {
            return Err(InputError::PidOutOfRange { line: line_no });
        }
        if arrival.arrival_time >= TIME_BOUND {
            return Err(InputError::ArrivalOutOfRange { line: line_no });
        }
        if arrival.processing_time == 0 || arrival.processing_time >= TIME_BOUND {
            return Err(InputError::ProcessingOutOfRange { line: line_no });
        }
        if processes.iter().any(|p| p.pid == arrival.pid) {
            return Err(InputError::DuplicatePid { line: line_no });
        }
        processes.push(arrival);
    }

    debug!("read {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Parse one `pid,arrival_time,processing_time` line; pid must be > 0
fn parse_process_line(line: &str, line_no: usize) -> Result<ProcessArrival, InputError> {
    let malformed = || InputError::MalformedLine { line: line_no };

    let mut fields = line.trim_end().split(',');
    let pid: u32 = fields
        .next()
        .ok_or_else(malformed)?
        .trim()
        .parse()
        .map_err(|_| malformed())?;
    let arrival_time: Tick = fields
        .next()
        .ok_or_else(malformed)?
        .trim()
        .parse()
        .map_err(|_| malformed())?;
    let processing_time: Tick = fields
        .next()
        .ok_or_else(malformed)?
        .trim()
        .parse()
        .map_err(|_| malformed())?;
    if fields.next().is_some() || pid == 0 {
        return Err(malformed());
    }

    Ok(ProcessArrival::new(pid, arrival_time, processing_time))
}
