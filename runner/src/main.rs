use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use env_logger::Env;
use log::info;

use processor::{format_logs, read_tasks, simulate};

mod config;
mod error;

use config::Config;
use error::Error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let result = run(&Config::load());
    if let Err(error) = &result {
        report_error(error, &mut io::stderr());
    }
    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<(), Error>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Write the one-line diagnostic for a failed run.
fn report_error(error: &Error, stderr: &mut impl Write) {
    // nothing is left to report to if stderr itself fails
    let _ = writeln!(stderr, "Error: {error}");
}

/// Read the task spec, run every scheduler and write the report.
fn run(config: &Config) -> Result<(), Error> {
    let stream = fs::read(&config.input).map_err(|error| Error::Read(config.input.clone(), error))?;
    let tasks = read_tasks(&stream)?;
    info!("Read {} tasks from {}", tasks.len(), config.input.display());

    let logs = simulate(tasks)?;
    fs::write(&config.output, format_logs(&logs))
        .map_err(|error| Error::Write(config.output.clone(), error))?;
    info!("Report written to {}", config.output.display());

    Ok(())
}

// Do not delete this line
#[cfg(test)]
mod tests;
