//! Property-based tests for the knapsack solvers.
//!
//! # Invariants tested
//!
//! - **Feasibility:** total weight never exceeds capacity.
//! - **Consistency:** totals equal the sums over the selected items.
//! - **Optimality:** DP and branch-and-bound (both frontiers) agree with
//!   exhaustive enumeration.
//! - **Heuristic bound:** greedy never beats the DP optimum.
//! - **Idempotence:** solving twice yields identical solutions.


use knapsack_core::Solver;
use knapsack_core::test_support::brute_force_optimum;
use knapsack_solver::{
    BranchAndBoundConfig, BranchAndBoundSolver, DynamicProgrammingSolver, GreedySolver,
    SearchOrder, optimal_value,
};
use proptest::prelude::*;

use proptest_support::{assert_consistent, instance_strategy};

fn best_first() -> BranchAndBoundSolver {
    BranchAndBoundSolver::with_config(BranchAndBoundConfig {
        order: SearchOrder::BestFirst,
        ..BranchAndBoundConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every solver returns a feasible, self-consistent selection.
    #[test]
    fn solutions_are_feasible_and_consistent(instance in instance_strategy(0, 14, 120)) {
        let solvers: [Box<dyn Solver>; 4] = [
            Box::new(GreedySolver),
            Box::new(DynamicProgrammingSolver),
            Box::new(BranchAndBoundSolver::new()),
            Box::new(best_first()),
        ];
        for solver in &solvers {
            let solution = solver.solve(&instance).expect("solve should succeed");
            assert_consistent(&instance, &solution)?;
        }
    }

    /// Property: exact solvers agree with each other and with enumeration.
    #[test]
    fn exact_solvers_find_the_optimum(instance in instance_strategy(0, 12, 100)) {
        let expected = brute_force_optimum(&instance);
        let dp = DynamicProgrammingSolver.solve(&instance).expect("dp");
        let dfs = BranchAndBoundSolver::new().solve(&instance).expect("bnb");
        let bfs = best_first().solve(&instance).expect("best-first bnb");

        prop_assert_eq!(dp.total_value(), expected);
        prop_assert_eq!(dfs.total_value(), dp.total_value());
        prop_assert_eq!(bfs.total_value(), dp.total_value());
        prop_assert_eq!(optimal_value(&instance).expect("optimum"), expected);
    }

    /// Property: the greedy heuristic never exceeds the optimum.
    #[test]
    fn greedy_is_bounded_by_the_optimum(instance in instance_strategy(0, 20, 200)) {
        let greedy = GreedySolver.solve(&instance).expect("greedy");
        let dp = DynamicProgrammingSolver.solve(&instance).expect("dp");
        prop_assert!(
            greedy.total_value() <= dp.total_value(),
            "greedy {} beat dp {}",
            greedy.total_value(),
            dp.total_value()
        );
    }

    /// Property: repeated solves of an unchanged instance are identical.
    #[test]
    fn solving_is_idempotent(instance in instance_strategy(0, 14, 120)) {
        let before = instance.clone();
        let solvers: [Box<dyn Solver>; 3] = [
            Box::new(GreedySolver),
            Box::new(DynamicProgrammingSolver),
            Box::new(BranchAndBoundSolver::new()),
        ];
        for solver in &solvers {
            let first = solver.solve(&instance).expect("first solve");
            let second = solver.solve(&instance).expect("second solve");
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(instance, before);
    }
}
