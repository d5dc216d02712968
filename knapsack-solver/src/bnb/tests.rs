//! Tests for the `BranchAndBoundSolver`.

use std::time::Duration;

use super::*;
use knapsack_core::test_support::{
    brute_force_optimum, classic_instance, empty_instance, instance_from_pairs,
};
use rstest::rstest;

fn ids(solution: &Solution) -> Vec<&str> {
    solution.items().iter().map(|item| item.id.as_str()).collect()
}

fn solver(order: SearchOrder) -> BranchAndBoundSolver {
    BranchAndBoundSolver::with_config(BranchAndBoundConfig {
        order,
        ..BranchAndBoundConfig::default()
    })
}

#[rstest]
fn classic_instance_is_solved_exactly() {
    let outcome = BranchAndBoundSolver::new()
        .search(&classic_instance())
        .expect("search");
    assert_eq!(ids(&outcome.solution), vec!["B", "C"]);
    assert_eq!(outcome.solution.total_value(), 220);
    assert_eq!(outcome.solution.total_weight(), 50);
    assert_eq!(outcome.solution.algorithm(), Algorithm::BranchAndBound);
    assert!(outcome.stats.nodes_expanded > 0);
    assert!(outcome.stats.peak_frontier >= 1);
    assert!(!outcome.stats.limit_reached);
}

#[rstest]
fn depth_first_explores_skip_branch_first() {
    // Both single items are optimal; skipping X first finds Y.
    let instance = instance_from_pairs(5, &[(10, 5), (10, 5)]);
    let solution = solver(SearchOrder::DepthFirst)
        .solve(&instance)
        .expect("solve");
    assert_eq!(ids(&solution), vec!["I1"]);
}

#[rstest]
fn best_first_finds_take_branch_first_on_ties() {
    let instance = instance_from_pairs(5, &[(10, 5), (10, 5)]);
    let solution = solver(SearchOrder::BestFirst)
        .solve(&instance)
        .expect("solve");
    assert_eq!(ids(&solution), vec!["I0"]);
}

#[rstest]
#[case(SearchOrder::DepthFirst)]
#[case(SearchOrder::BestFirst)]
fn both_orders_match_brute_force(#[case] order: SearchOrder) {
    let instances = [
        instance_from_pairs(10, &[(5, 4), (4, 3), (3, 2), (7, 5)]),
        instance_from_pairs(7, &[(1, 1), (6, 2), (10, 3), (16, 5)]),
        instance_from_pairs(26, &[(24, 12), (13, 7), (23, 11), (15, 8), (16, 9)]),
        instance_from_pairs(3, &[(2, 0), (0, 0), (5, 4)]),
    ];
    for instance in &instances {
        let solution = solver(order).solve(instance).expect("solve");
        assert_eq!(solution.total_value(), brute_force_optimum(instance));
        assert!(solution.total_weight() <= instance.capacity());
    }
}

#[rstest]
fn zero_weight_items_are_taken() {
    let instance = instance_from_pairs(0, &[(4, 1), (6, 0)]);
    let solution = BranchAndBoundSolver::new().solve(&instance).expect("solve");
    assert_eq!(ids(&solution), vec!["I1"]);
    assert_eq!(solution.total_value(), 6);
}

#[rstest]
#[case(empty_instance(10))]
#[case(instance_from_pairs(2, &[(7, 3), (9, 4)]))]
fn nothing_fits_yields_empty_selection(#[case] instance: Instance) {
    let outcome = BranchAndBoundSolver::new().search(&instance).expect("search");
    assert!(outcome.solution.items().is_empty());
    assert_eq!(outcome.solution.total_value(), 0);
    assert!(!outcome.stats.limit_reached);
}

#[rstest]
fn node_limit_returns_best_found_so_far() {
    let config = BranchAndBoundConfig {
        node_limit: Some(1),
        ..BranchAndBoundConfig::default()
    };
    let outcome = BranchAndBoundSolver::with_config(config)
        .search(&classic_instance())
        .expect("search");
    assert!(outcome.stats.limit_reached);
    assert_eq!(outcome.stats.nodes_expanded, 1);
    assert!(outcome.solution.total_weight() <= 50);
}

#[rstest]
fn zero_time_limit_stops_immediately() {
    let config = BranchAndBoundConfig {
        time_limit: Some(Duration::ZERO),
        ..BranchAndBoundConfig::default()
    };
    let outcome = BranchAndBoundSolver::with_config(config)
        .search(&classic_instance())
        .expect("search");
    assert!(outcome.stats.limit_reached);
    assert!(outcome.solution.items().is_empty());
}

#[rstest]
fn generous_limits_do_not_change_the_result() {
    let config = BranchAndBoundConfig {
        order: SearchOrder::DepthFirst,
        node_limit: Some(10_000),
        time_limit: Some(Duration::from_secs(60)),
    };
    let outcome = BranchAndBoundSolver::with_config(config)
        .search(&classic_instance())
        .expect("search");
    assert!(!outcome.stats.limit_reached);
    assert_eq!(outcome.solution.total_value(), 220);
}

#[rstest]
fn solving_twice_is_identical() {
    let instance = instance_from_pairs(26, &[(24, 12), (13, 7), (23, 11), (15, 8), (16, 9)]);
    let solver = BranchAndBoundSolver::new();
    let first = solver.search(&instance).expect("search");
    let second = solver.search(&instance).expect("search");
    assert_eq!(first, second);
}

#[rstest]
fn unsupported_projects_are_rejected() {
    let instance =
        Instance::new("bin_packing", 5, vec![Item::new("A", 1, 1)]).expect("instance");
    let err = BranchAndBoundSolver::new()
        .solve(&instance)
        .expect_err("unsupported");
    assert_eq!(
        err,
        SolveError::UnsupportedProblem {
            project: "bin_packing".to_owned()
        }
    );
}

#[rstest]
#[case(SearchOrder::DepthFirst)]
#[case(SearchOrder::BestFirst)]
fn values_beyond_float_precision_stay_exact(#[case] order: SearchOrder) {
    let large = 1_u64 << 53;
    let instance = Instance::new(
        "knapsack",
        1,
        vec![Item::new("Y", large + 1, 1), Item::new("X", large, 1)],
    )
    .expect("instance");
    let solution = solver(order).solve(&instance).expect("solve");
    let optimum = crate::optimal_value(&instance).expect("optimum");
    assert_eq!(optimum, large + 1);
    assert_eq!(solution.total_value(), optimum);
    assert_eq!(ids(&solution), vec!["Y"]);
}
