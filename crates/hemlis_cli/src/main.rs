//! Command-line entry point.
//!
//! # Responsibility
//! - Parse the message argument and direction flags.
//! - Print one transcoded result per message to stdout, in input order.
//!
//! # Invariants
//! - Fallback warnings go to stderr through the logger, never stdout.
//! - Any failure exits non-zero after a single stderr line.

use clap::Parser;
use hemlis_core::{init_logging, resolve_messages, transcode, Direction, ScanError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::process::ExitCode;

/// Hide messages in whitespace by way of Morse code.
#[derive(Debug, Parser)]
#[command(name = "hemlis", version, about)]
struct Cli {
    /// Message to encode, or a file containing embedded messages.
    message: String,

    /// Decode the message instead of encoding it.
    #[arg(short, long)]
    decode: bool,

    /// Log level (trace|debug|info|warn|error|off).
    #[arg(long, env = "HEMLIS_LOG", default_value = "warn")]
    log_level: String,

    /// Absolute directory for rolling log files instead of stderr.
    #[arg(long, env = "HEMLIS_LOG_DIR")]
    log_dir: Option<String>,
}

impl Cli {
    fn direction(&self) -> Direction {
        if self.decode {
            Direction::Decode
        } else {
            Direction::Encode
        }
    }
}

#[derive(Debug)]
enum CliError {
    Scan(ScanError),
    Output(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Scan(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<ScanError> for CliError {
    fn from(value: ScanError) -> Self {
        Self::Scan(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_level, cli.log_dir.as_deref()) {
        eprintln!("hemlis: {err}");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hemlis: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let direction = cli.direction();
    let messages = resolve_messages(&cli.message)?;
    debug!(
        "event=cli_run module=cli status=start direction={:?} messages={}",
        direction,
        messages.len()
    );

    for message in &messages {
        writeln!(out, "{}", transcode(message, direction))?;
    }
    out.flush()?;
    Ok(())
}
