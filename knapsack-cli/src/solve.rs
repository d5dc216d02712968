//! `solve` command: load, solve, evaluate, report.

use std::io::Write;
use std::time::{Duration, Instant};

use camino::Utf8PathBuf;
use clap::Parser;
use knapsack_core::{Algorithm, Solution, Solver};
use knapsack_eval::Gap;
use knapsack_solver::{BranchAndBoundConfig, BranchAndBoundSolver, SearchOrder, solver_for};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ALGO, ARG_INSTANCE, ARG_NODE_LIMIT, ARG_SEARCH_ORDER, ARG_TIME_LIMIT_MS, CliError,
    ENV_INSTANCE, require_existing,
};

const DEFAULT_ALGO: &str = "dp";

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a 0/1 knapsack instance stored as JSON, then score \
                 the selection against the exact optimum. Settings can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Solve a knapsack instance"
)]
#[ortho_config(prefix = "KNAPSACK")]
pub(crate) struct SolveArgs {
    /// Path to the instance JSON file.
    #[arg(long = ARG_INSTANCE, value_name = "path")]
    #[serde(default)]
    pub(crate) instance: Option<Utf8PathBuf>,
    /// Algorithm: greedy, dp or bnb (default dp).
    #[arg(long = ARG_ALGO, value_name = "name")]
    #[serde(default)]
    pub(crate) algo: Option<String>,
    /// Branch-and-bound frontier: depth-first (default) or best-first.
    #[arg(long = ARG_SEARCH_ORDER, value_name = "order")]
    #[serde(default)]
    pub(crate) search_order: Option<String>,
    /// Stop branch-and-bound after expanding this many nodes.
    #[arg(long = ARG_NODE_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) node_limit: Option<u64>,
    /// Stop branch-and-bound after this many milliseconds.
    #[arg(long = ARG_TIME_LIMIT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) time_limit_ms: Option<u64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the instance file.
    pub(crate) instance: Utf8PathBuf,
    /// Algorithm name as given, echoed in the report.
    pub(crate) algo_label: String,
    /// Parsed algorithm.
    pub(crate) algorithm: Algorithm,
    /// Branch-and-bound settings; ignored by other algorithms.
    pub(crate) bnb: BranchAndBoundConfig,
}

impl SolveConfig {
    fn solver(&self) -> Box<dyn Solver> {
        match self.algorithm {
            Algorithm::BranchAndBound => {
                Box::new(BranchAndBoundSolver::with_config(self.bnb.clone()))
            }
            other => solver_for(other),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let instance = args.instance.ok_or(CliError::MissingArgument {
            field: ARG_INSTANCE,
            env: ENV_INSTANCE,
        })?;
        let algo_label = args.algo.unwrap_or_else(|| DEFAULT_ALGO.to_owned());
        let algorithm = algo_label.parse::<Algorithm>()?;
        let order = args
            .search_order
            .as_deref()
            .map(parse_search_order)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            instance,
            algo_label,
            algorithm,
            bnb: BranchAndBoundConfig {
                order,
                node_limit: args.node_limit,
                time_limit: args.time_limit_ms.map(Duration::from_millis),
            },
        })
    }
}

pub(crate) fn parse_search_order(raw: &str) -> Result<SearchOrder, CliError> {
    match raw.trim().to_lowercase().replace('_', "-").as_str() {
        "depth-first" | "dfs" => Ok(SearchOrder::DepthFirst),
        "best-first" | "bfs" => Ok(SearchOrder::BestFirst),
        _ => Err(CliError::InvalidSearchOrder {
            value: raw.to_owned(),
        }),
    }
}

/// Everything printed after a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveReport {
    pub(crate) project: String,
    pub(crate) algo_label: String,
    pub(crate) elapsed: Duration,
    pub(crate) gap: Gap,
    pub(crate) solution: Solution,
}

pub(crate) fn run_solve(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_solve(&config)?;
    write_report(writer, &report)
}

pub(crate) fn execute_solve(config: &SolveConfig) -> Result<SolveReport, CliError> {
    require_existing(&config.instance, ARG_INSTANCE)?;
    let instance = knapsack_data::load_instance(&config.instance)?;
    let solver = config.solver();

    let started = Instant::now();
    let solution = solver
        .solve(&instance)
        .map_err(|source| CliError::Solve { source })?;
    let elapsed = started.elapsed();

    let gap = knapsack_eval::evaluate(&instance, &solution)?;
    log::info!(
        "{} solved {} in {elapsed:?}: value {} (gap {gap})",
        solution.algorithm(),
        instance.project(),
        solution.total_value()
    );
    Ok(SolveReport {
        project: instance.project().to_owned(),
        algo_label: config.algo_label.clone(),
        elapsed,
        gap,
        solution,
    })
}

pub(crate) fn write_report(writer: &mut dyn Write, report: &SolveReport) -> Result<(), CliError> {
    let solution = &report.solution;
    writeln!(
        writer,
        "Project={} Algo={} Time_ms={:.2} Gap={}",
        report.project,
        report.algo_label,
        millis(report.elapsed),
        report.gap
    )
    .and_then(|()| {
        writeln!(
            writer,
            "Total_Value={} Total_Weight={}",
            solution.total_value(),
            solution.total_weight()
        )
    })
    .and_then(|()| writeln!(writer, "Selected_Items={} items", solution.items().len()))
    .and_then(|()| writeln!(writer, "Algorithm={}", solution.algorithm()))
    .map_err(CliError::WriteOutput)
}

#[expect(
    clippy::float_arithmetic,
    reason = "elapsed time is reported in fractional milliseconds"
)]
fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
