//! Errors raised while scoring a solution.

use knapsack_core::{SolutionError, SolveError};
use thiserror::Error;

/// Errors returned by [`evaluate`](crate::evaluate) and
/// [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The optimum could not be computed.
    #[error("failed to compute the optimum")]
    Solve(#[from] SolveError),
    /// The solution is not a feasible subset of the instance.
    #[error("solution does not fit the instance")]
    InvalidSolution {
        /// Reason the solution was rejected.
        #[source]
        source: SolutionError,
    },
    /// The solution is worth more than the optimum.
    #[error("solution value {value} exceeds the optimum {optimum}")]
    ExceedsOptimum {
        /// Value claimed by the solution.
        value: u64,
        /// Optimum of the instance.
        optimum: u64,
    },
}
