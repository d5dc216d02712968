use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Instance, Solution};

/// Identifies which strategy produced a [`Solution`].
///
/// # Examples
/// ```rust
/// use knapsack_core::Algorithm;
///
/// let algorithm: Algorithm = "bnb".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::BranchAndBound);
/// assert_eq!(algorithm.to_string(), "branch_and_bound");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Density-ordered greedy heuristic.
    Greedy,
    /// Exact dynamic programming over capacity.
    Dp,
    /// Exact branch-and-bound with a fractional relaxation bound.
    BranchAndBound,
}

impl Algorithm {
    /// Every algorithm, in a stable order.
    pub const ALL: [Self; 3] = [Self::Greedy, Self::Dp, Self::BranchAndBound];

    /// Canonical tag used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Dp => "dp",
            Self::BranchAndBound => "branch_and_bound",
        }
    }

    /// Whether the algorithm always finds the optimum.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        !matches!(self, Self::Greedy)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected greedy, dp or bnb)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "dp" => Ok(Self::Dp),
            "bnb" | "branch_and_bound" => Ok(Self::BranchAndBound),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The instance is not tagged as a 0/1 knapsack problem.
    #[error("no knapsack solver applies to project {project:?}")]
    UnsupportedProblem {
        /// Project label of the rejected instance.
        project: String,
    },
    /// The capacity is too large to tabulate.
    #[error("capacity {capacity} is too large for the dynamic programming table")]
    CapacityTooLarge {
        /// Requested capacity.
        capacity: u64,
    },
}

/// Alias for the solver error type.
pub type Error = SolveError;

/// Choose a subset of an instance's items.
///
/// Implementations borrow the instance without mutating it and must return
/// [`Error::UnsupportedProblem`] for instances that are not 0/1 knapsack
/// problems rather than attempting a partial solve.
/// Solvers must be `Send + Sync` so one value can be shared across threads.
pub trait Solver: Send + Sync {
    /// The strategy this solver implements.
    fn algorithm(&self) -> Algorithm;

    /// Solve an instance, producing a feasible selection or an error.
    ///
    /// # Errors
    /// Returns [`Error`] when the instance cannot be solved.
    fn solve(&self, instance: &Instance) -> Result<Solution, Error>;
}
