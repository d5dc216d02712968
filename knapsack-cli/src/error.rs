//! Error types emitted by the knapsack CLI.
//!
//! Messages describe the failing step only; `main` prints the source chain
//! beneath them.

use std::sync::Arc;

use camino::Utf8PathBuf;
use knapsack_core::{ParseAlgorithmError, SolveError};
use knapsack_data::{GenerateError, InstanceIoError};
use knapsack_eval::EvaluationError;
use thiserror::Error;

/// Errors emitted by the knapsack CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The algorithm name is not recognised.
    #[error("invalid --algo value")]
    InvalidAlgorithm(#[from] ParseAlgorithmError),
    /// The search order name is not recognised.
    #[error("unknown search order {value:?} (expected depth-first or best-first)")]
    InvalidSearchOrder {
        /// Rejected value.
        value: String,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading the instance file failed.
    #[error("failed to load instance")]
    LoadInstance(#[from] InstanceIoError),
    /// Writing the generated instance failed.
    #[error("failed to save generated instance")]
    SaveInstance {
        /// Underlying I/O failure.
        #[source]
        source: InstanceIoError,
    },
    /// Generating an instance failed.
    #[error("failed to generate instance")]
    Generate(#[from] GenerateError),
    /// The solver rejected the instance.
    #[error("solver failed")]
    Solve {
        /// Solver error.
        #[source]
        source: SolveError,
    },
    /// Scoring the solution failed.
    #[error("failed to evaluate solution")]
    Evaluate(#[from] EvaluationError),
    /// Writing the command output failed.
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}
