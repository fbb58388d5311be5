/*!
 * schedsim - CLI Entry Point
 * Reads a process file, runs the selected scheduling policy over it,
 * and prints the per-tick schedule plus summary statistics
 */

use std::env;
use std::io;
use std::process::ExitCode;

use log::LevelFilter;
use miette::Diagnostic;

use schedsim::{read_process_file, Driver, PolicyKind, TIME_BOUND};

struct Args {
    debug: bool,
    policy: PolicyKind,
    file: String,
}

fn usage(cmd: &str, error: Option<&str>) {
    if let Some(error) = error {
        println!("Error: {}\n", error);
    }
    println!("Usage: {} [-d] [-p POLICY] FILE", cmd);
    println!("Where:");
    println!("\t-d\tspecifies that the simulator should execute in debug mode");
    println!(
        "\t-p\tselects the scheduling policy: fcfs (default), round-robin, mlfq-linear, mlfq-quadratic, scoring"
    );
    println!("\tFILE\tis the name of the file to read processes from");
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut debug = false;
    let mut policy = PolicyKind::Fcfs;
    let mut file = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-d" => debug = true,
            "-p" | "--policy" => {
                let name = iter
                    .next()
                    .ok_or_else(|| "Missing policy name after -p".to_string())?;
                policy = name.parse().map_err(|e| format!("{}", e))?;
            }
            _ if file.is_none() && !arg.starts_with('-') => file = Some(arg.clone()),
            _ => return Err("Invalid command line arguments".to_string()),
        }
    }

    let file = file.ok_or_else(|| "Invalid command line arguments".to_string())?;
    Ok(Args { debug, policy, file })
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();
    let args = match parse_args(&argv[1..]) {
        Ok(args) => args,
        Err(message) => {
            usage(&argv[0], Some(&message));
            return ExitCode::from(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(if args.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let processes = match read_process_file(&args.file) {
        Ok(processes) => processes,
        Err(error) => {
            println!("{}", error);
            if let Some(help) = error.help() {
                println!("{}", help);
            }
            return ExitCode::from(1);
        }
    };

    let mut driver = Driver::new(args.policy.build(), &processes);
    let mut out = io::stdout().lock();
    match driver.run(TIME_BOUND, &mut out) {
        Ok(()) => {
            drop(out);
            println!("{}", driver.report());
            ExitCode::SUCCESS
        }
        Err(error) => {
            // Failed runs report the failure and print no statistics
            drop(out);
            println!("{}", error);
            ExitCode::SUCCESS
        }
    }
}
