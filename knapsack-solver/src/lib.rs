//! Knapsack solving strategies.
//!
//! Three implementations of the [`Solver`] trait share one contract: borrow
//! an [`Instance`](knapsack_core::Instance), leave it untouched, and return a
//! feasible [`Solution`](knapsack_core::Solution).
//!
//! - [`GreedySolver`] ranks items by density and packs greedily. Fast, not
//!   exact.
//! - [`DynamicProgrammingSolver`] tabulates the best value for every
//!   capacity budget. Exact, O(n × capacity) time and memory.
//! - [`BranchAndBoundSolver`] searches the include/exclude tree, pruning
//!   with the fractional relaxation bound. Exact, exponential in the worst
//!   case, and optionally bounded by node or time limits.

#![forbid(unsafe_code)]

mod bnb;
mod dp;
mod greedy;

pub use bnb::{
    BranchAndBoundConfig, BranchAndBoundSolver, SearchOrder, SearchOutcome, SearchStats,
};
pub use dp::{DynamicProgrammingSolver, MAX_TABLE_CELLS, optimal_value};
pub use greedy::GreedySolver;

use knapsack_core::{Algorithm, Solver};

/// Construct the default solver for `algorithm`.
///
/// # Examples
/// ```
/// use knapsack_core::{Algorithm, Instance, Item};
/// use knapsack_solver::solver_for;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let instance = Instance::new("knapsack", 5, vec![Item::new("A", 3, 4)])?;
/// let solution = solver_for(Algorithm::BranchAndBound).solve(&instance)?;
/// assert_eq!(solution.total_value(), 3);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn solver_for(algorithm: Algorithm) -> Box<dyn Solver> {
    match algorithm {
        Algorithm::Greedy => Box::new(GreedySolver),
        Algorithm::Dp => Box::new(DynamicProgrammingSolver),
        Algorithm::BranchAndBound => Box::new(BranchAndBoundSolver::default()),
    }
}

/// Indices of `items` stable-sorted by density, highest first.
///
/// Equal densities keep their original relative order.
fn density_order(items: &[knapsack_core::Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&lhs, &rhs| {
        let lhs_density = items.get(lhs).map_or(0.0, knapsack_core::Item::density);
        let rhs_density = items.get(rhs).map_or(0.0, knapsack_core::Item::density);
        rhs_density.total_cmp(&lhs_density)
    });
    order
}
