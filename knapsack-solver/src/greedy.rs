//! Density-ordered greedy heuristic.

use knapsack_core::{Algorithm, Instance, Solution, SolveError, Solver};

use crate::density_order;

/// Packs items in descending value/weight density while they fit.
///
/// The result is feasible but not necessarily optimal. Selected items are
/// reported in the order they were packed.
///
/// # Examples
/// ```
/// use knapsack_core::{Instance, Item, Solver};
/// use knapsack_solver::GreedySolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let instance = Instance::new(
///     "knapsack",
///     50,
///     vec![Item::new("A", 60, 10), Item::new("B", 100, 20), Item::new("C", 120, 30)],
/// )?;
/// let solution = GreedySolver.solve(&instance)?;
/// assert_eq!(solution.total_value(), 160);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        instance.ensure_supported()?;
        let items = instance.items();
        let capacity = instance.capacity();

        let mut packed = Vec::new();
        let mut weight = 0_u64;
        for item in density_order(items)
            .into_iter()
            .filter_map(|idx| items.get(idx))
        {
            if let Some(next) = weight.checked_add(item.weight)
                && next <= capacity
            {
                weight = next;
                packed.push(item.clone());
            }
        }

        let solution = Solution::from_items(packed, Algorithm::Greedy);
        log::debug!(
            "greedy packed {} of {} items: value {} weight {}/{}",
            solution.items().len(),
            items.len(),
            solution.total_value(),
            solution.total_weight(),
            capacity
        );
        Ok(solution)
    }
}
