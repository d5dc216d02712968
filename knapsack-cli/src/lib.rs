//! Command-line interface for solving and generating knapsack instances.
//!
//! `knapsack solve` loads an instance file, runs one algorithm, scores the
//! result against the dynamic programming optimum and prints a short
//! report. `knapsack generate` writes a seeded lab-inventory instance.
//! Both commands layer configuration files, `KNAPSACK_*` environment
//! variables and CLI flags through `ortho_config`.
#![forbid(unsafe_code)]

use std::io::{self, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod error;
mod generate;
mod solve;

pub use error::CliError;

use generate::GenerateArgs;
use solve::SolveArgs;

const ARG_INSTANCE: &str = "instance";
const ARG_ALGO: &str = "algo";
const ARG_SEARCH_ORDER: &str = "search-order";
const ARG_NODE_LIMIT: &str = "node-limit";
const ARG_TIME_LIMIT_MS: &str = "time-limit-ms";
const ARG_OUTPUT: &str = "output";
const ARG_ITEMS: &str = "items";
const ARG_CAPACITY: &str = "capacity";
const ARG_SEED: &str = "seed";
const ARG_PROJECT: &str = "project";
const ARG_ID_PREFIX: &str = "id-prefix";
const ENV_INSTANCE: &str = "KNAPSACK_CMDS_SOLVE_INSTANCE";
const ENV_OUTPUT: &str = "KNAPSACK_CMDS_GENERATE_OUTPUT";

/// Run the CLI with the current process arguments and environment,
/// writing reports to stdout.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input files, the
/// solver or the evaluator fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Solve(args) => solve::run_solve(args, writer),
        Command::Generate(args) => generate::run_generate(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "knapsack",
    about = "Solve and generate 0/1 knapsack instances",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an instance file and report the optimality gap.
    Solve(SolveArgs),
    /// Write a seeded lab-inventory instance to disk.
    Generate(GenerateArgs),
}

/// Fail unless `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match knapsack_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
