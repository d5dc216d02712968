//! Optimality-gap evaluation for knapsack solutions.
//!
//! The gap of a solution is its relative shortfall against the true optimum
//! `V*` computed by the dynamic programming solver:
//!
//! ```text
//! gap = (V* - value) / V*    when V* > 0
//! gap = 0                    when V* = 0
//! ```
//!
//! [`evaluate`] re-solves on every call. [`Evaluator`] caches optima per
//! instance, and [`gap_from_optimum`] scores against an optimum the caller
//! already knows.
//!
//! # Examples
//!
//! ```
//! use knapsack_core::{Instance, Item, Solver};
//! use knapsack_eval::evaluate;
//! use knapsack_solver::GreedySolver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let instance = Instance::new(
//!     "knapsack",
//!     50,
//!     vec![Item::new("A", 60, 10), Item::new("B", 100, 20), Item::new("C", 120, 30)],
//! )?;
//! let greedy = GreedySolver.solve(&instance)?;
//! let gap = evaluate(&instance, &greedy)?;
//! assert!((gap.value() - 60.0 / 220.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod evaluator;
mod gap;

pub use error::EvaluationError;
pub use evaluator::Evaluator;
pub use gap::{Gap, gap_from_optimum};

use knapsack_core::{Instance, Solution};

/// Score `solution` against the optimum of `instance`.
///
/// The solution is checked for feasibility first; the optimum is then
/// recomputed with the dynamic programming solver.
///
/// # Errors
/// Returns [`EvaluationError::Solve`] when the instance is not a knapsack
/// problem or its optimum cannot be tabulated,
/// [`EvaluationError::InvalidSolution`] when the solution is not a feasible
/// subset of the instance, and [`EvaluationError::ExceedsOptimum`] when the
/// solution claims more than the optimum.
pub fn evaluate(instance: &Instance, solution: &Solution) -> Result<Gap, EvaluationError> {
    validate(instance, solution)?;
    let optimum = knapsack_solver::optimal_value(instance)?;
    score(instance, solution, optimum)
}

fn validate(instance: &Instance, solution: &Solution) -> Result<(), EvaluationError> {
    instance.ensure_supported()?;
    solution
        .check_against(instance)
        .map_err(|source| EvaluationError::InvalidSolution { source })
}

fn score(instance: &Instance, solution: &Solution, optimum: u64) -> Result<Gap, EvaluationError> {
    let gap = gap_from_optimum(optimum, solution.total_value())?;
    log::debug!(
        "{} solution for {} scored {} against optimum {optimum} (gap {gap})",
        solution.algorithm(),
        instance.project(),
        solution.total_value(),
    );
    Ok(gap)
}
