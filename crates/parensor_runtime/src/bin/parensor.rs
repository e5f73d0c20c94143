//! Parensor CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use parensor_runtime::{RunOptions, init_logging, run_file};
use tracing::{error, info};

/// Runs a Parensor program.
#[derive(Parser, Debug)]
#[command(name = "parensor", version, about)]
struct Cli {
    /// Program file to run
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Write program output here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Name table: twelve words standing in for opcodes 0 through 11
    #[arg(short, long, value_name = "PATH")]
    words: Option<PathBuf>,

    /// Stop with an error after this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Write a MessagePack snapshot of the final state
    #[arg(long, value_name = "PATH")]
    dump_state: Option<PathBuf>,
}

impl Cli {
    fn into_options(self) -> RunOptions {
        RunOptions {
            program: self.input,
            output: self.output,
            words: self.words,
            max_steps: self.max_steps,
            dump_state: self.dump_state,
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    // Usage errors exit with 1 like every other failure; help and version exit with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run_file(&cli.into_options()) {
        Ok(summary) => {
            info!(
                steps = summary.steps,
                instructions = summary.instructions,
                "halted"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e.report());
            ExitCode::FAILURE
        }
    }
}
