//! toy-robot CLI
//!
//! Usage: toy-robot [OPTIONS] [INPUT_FILE]

use anyhow::Context as _;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use toy_robot::{CommandSource, DEFAULT_TABLE_SIZE, Interpreter, RobotConfig};
use tracing::info;

mod logging;

use logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "toy-robot", version)]
#[command(about = "Drive a toy robot around a square table", long_about = None)]
struct Cli {
    /// Command file to read (default: standard input)
    input: Option<PathBuf>,

    /// Side length of the square table
    #[arg(long, default_value_t = DEFAULT_TABLE_SIZE)]
    table_size: i32,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RobotConfig {
        table_size: cli.table_size,
    };
    let mut interpreter = Interpreter::new(config)?;
    let source = CommandSource::open(cli.input.as_deref())?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = interpreter
        .run(source.lines(), &mut stdout.lock(), &mut stderr.lock())
        .context("command run aborted")?;

    info!(
        lines = summary.lines,
        rejected = summary.rejected,
        "finished"
    );
    Ok(())
}
