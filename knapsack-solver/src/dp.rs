//! Exact dynamic programming over capacity budgets.
//!
//! Row `i` of the table holds the best value reachable with the first `i`
//! items for every budget `0..=capacity`. Time and memory are both
//! O(n × capacity), which makes this solver unsuitable for very large
//! capacities; it remains the reference oracle for evaluation. Tables above
//! [`MAX_TABLE_CELLS`] entries are refused with
//! [`SolveError::CapacityTooLarge`] instead of being allocated.

use knapsack_core::{Algorithm, Instance, Item, Solution, SolveError, Solver};

/// Exact solver tabulating `dp[i][w]`.
///
/// Selected items are reported in instance order.
///
/// # Examples
/// ```
/// use knapsack_core::{Instance, Item, Solver};
/// use knapsack_solver::DynamicProgrammingSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let instance = Instance::new(
///     "knapsack",
///     50,
///     vec![Item::new("A", 60, 10), Item::new("B", 100, 20), Item::new("C", 120, 30)],
/// )?;
/// let solution = DynamicProgrammingSolver.solve(&instance)?;
/// assert_eq!(solution.total_value(), 220);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicProgrammingSolver;

impl Solver for DynamicProgrammingSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dp
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        instance.ensure_supported()?;
        let table = Table::build(instance)?;
        let selected = table.reconstruct(instance.items());
        let solution = Solution::from_items(selected, Algorithm::Dp);
        log::debug!(
            "dp solved {} items at capacity {}: value {} weight {}",
            instance.len(),
            instance.capacity(),
            solution.total_value(),
            solution.total_weight()
        );
        Ok(solution)
    }
}

/// Optimal objective value of `instance`, without reconstructing the
/// selection.
///
/// # Errors
/// Returns [`SolveError`] for unsupported instances or capacities that
/// cannot be tabulated.
pub fn optimal_value(instance: &Instance) -> Result<u64, SolveError> {
    instance.ensure_supported()?;
    Ok(Table::build(instance)?.best())
}

/// Largest number of `u64` entries (1 GiB) the table may hold.
pub const MAX_TABLE_CELLS: usize = 1 << 27;

struct Table {
    rows: Vec<Vec<u64>>,
    capacity: usize,
}

impl Table {
    fn build(instance: &Instance) -> Result<Self, SolveError> {
        let too_large = || SolveError::CapacityTooLarge {
            capacity: instance.capacity(),
        };
        let capacity = usize::try_from(instance.capacity()).map_err(|_| too_large())?;
        let width = capacity.checked_add(1).ok_or_else(too_large)?;
        let height = instance.len().saturating_add(1);
        if !within_budget(width, height) {
            return Err(too_large());
        }

        let mut rows = Vec::new();
        rows.try_reserve_exact(height).map_err(|_| too_large())?;
        let mut previous = empty_row(width).ok_or_else(too_large)?;
        previous.resize(width, 0);
        for item in instance.items() {
            let current = next_row(&previous, item).ok_or_else(too_large)?;
            rows.push(previous);
            previous = current;
        }
        rows.push(previous);
        Ok(Self { rows, capacity })
    }

    fn best(&self) -> u64 {
        self.rows
            .last()
            .and_then(|row| row.get(self.capacity))
            .copied()
            .unwrap_or(0)
    }

    /// Walk back from `(n, capacity)`, taking item `i - 1` wherever row `i`
    /// differs from row `i - 1` at the current budget.
    fn reconstruct(&self, items: &[Item]) -> Vec<Item> {
        let mut budget = self.capacity;
        let mut selected = Vec::new();
        for (pair, item) in self.rows.windows(2).zip(items).rev() {
            let [without, with] = pair else {
                continue;
            };
            let differs = with.get(budget) != without.get(budget);
            if differs && let Some(weight) = item_weight(item) {
                budget = budget.saturating_sub(weight);
                selected.push(item.clone());
            }
        }
        selected.reverse();
        selected
    }
}

/// Extend the table by one item; `None` when the row cannot be allocated.
fn next_row(previous: &[u64], item: &Item) -> Option<Vec<u64>> {
    let weight = item_weight(item);
    let mut row = empty_row(previous.len())?;
    row.extend(previous.iter().enumerate().map(|(budget, &skip)| {
        let take = weight
            .and_then(|w| budget.checked_sub(w))
            .and_then(|rest| previous.get(rest))
            .map(|&base| base + item.value);
        take.map_or(skip, |value| value.max(skip))
    }));
    Some(row)
}

fn within_budget(width: usize, height: usize) -> bool {
    width
        .checked_mul(height)
        .is_some_and(|cells| cells <= MAX_TABLE_CELLS)
}

fn empty_row(width: usize) -> Option<Vec<u64>> {
    let mut row = Vec::new();
    row.try_reserve_exact(width).ok()?;
    Some(row)
}

/// Item weight as a table offset; weights beyond `usize` never fit.
fn item_weight(item: &Item) -> Option<usize> {
    usize::try_from(item.weight).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapsack_core::test_support::{
        brute_force_optimum, classic_instance, empty_instance, instance_from_pairs,
    };
    use rstest::rstest;

    #[rstest]
    fn classic_instance_selects_b_and_c_in_instance_order() {
        let solution = DynamicProgrammingSolver
            .solve(&classic_instance())
            .expect("solve");
        let ids: Vec<&str> = solution.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C"]);
        assert_eq!(solution.total_value(), 220);
        assert_eq!(solution.total_weight(), 50);
        assert_eq!(solution.algorithm(), Algorithm::Dp);
    }

    #[rstest]
    fn table_rows_follow_the_recurrence() {
        let instance = instance_from_pairs(4, &[(3, 2), (4, 3)]);
        let table = Table::build(&instance).expect("table");
        assert_eq!(
            table.rows,
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 3, 3, 3],
                vec![0, 0, 3, 4, 4],
            ]
        );
    }

    #[rstest]
    #[case(instance_from_pairs(10, &[(5, 4), (4, 3), (3, 2), (7, 5)]))]
    #[case(instance_from_pairs(7, &[(1, 1), (6, 2), (10, 3), (16, 5)]))]
    #[case(instance_from_pairs(0, &[(9, 0), (3, 1)]))]
    fn matches_brute_force(#[case] instance: Instance) {
        let solution = DynamicProgrammingSolver.solve(&instance).expect("solve");
        assert_eq!(solution.total_value(), brute_force_optimum(&instance));
        assert!(solution.total_weight() <= instance.capacity());
        assert_eq!(
            optimal_value(&instance).expect("optimum"),
            solution.total_value()
        );
    }

    #[rstest]
    fn empty_instance_yields_empty_solution() {
        let solution = DynamicProgrammingSolver
            .solve(&empty_instance(25))
            .expect("solve");
        assert!(solution.items().is_empty());
        assert_eq!(solution.total_value(), 0);
        assert_eq!(solution.total_weight(), 0);
    }

    #[rstest]
    fn zero_capacity_only_takes_free_items() {
        let instance = instance_from_pairs(0, &[(4, 1), (6, 0)]);
        let solution = DynamicProgrammingSolver.solve(&instance).expect("solve");
        let ids: Vec<&str> = solution.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["I1"]);
    }

    #[rstest]
    fn oversized_items_are_never_selected() {
        let instance = instance_from_pairs(5, &[(100, 6), (1, u64::MAX - 10)]);
        let solution = DynamicProgrammingSolver.solve(&instance).expect("solve");
        assert!(solution.items().is_empty());
    }

    #[rstest]
    fn unsupported_projects_are_rejected() {
        let instance =
            Instance::new("graph_colouring", 5, vec![Item::new("A", 1, 1)]).expect("instance");
        let err = DynamicProgrammingSolver
            .solve(&instance)
            .expect_err("unsupported");
        assert!(matches!(err, SolveError::UnsupportedProblem { .. }));
        assert!(optimal_value(&instance).is_err());
    }

    #[rstest]
    #[case(1 << 45)]
    #[case(u64::MAX)]
    fn oversized_tables_are_refused(#[case] capacity: u64) {
        let instance = instance_from_pairs(capacity, &[(5, 3)]);
        let expected = SolveError::CapacityTooLarge { capacity };
        assert_eq!(DynamicProgrammingSolver.solve(&instance), Err(expected.clone()));
        assert_eq!(optimal_value(&instance), Err(expected));
    }

    #[rstest]
    #[case(MAX_TABLE_CELLS, 1, true)]
    #[case(MAX_TABLE_CELLS, 2, false)]
    #[case(1 << 20, 1 << 7, true)]
    #[case(usize::MAX, 2, false)]
    fn cell_budget_bounds_the_table(
        #[case] width: usize,
        #[case] height: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(within_budget(width, height), expected);
    }
}
