//! Exact branch-and-bound search.
//!
//! Items are ranked by density on a private copy of the order. Each node
//! decides one more item; children are kept only while their relaxation
//! bound strictly beats the incumbent, and the incumbent only changes on a
//! strict improvement, so the first optimum found wins. The default
//! depth-first frontier pushes "take" before "skip", so "skip" is explored
//! first.

mod frontier;
mod node;

use std::time::{Duration, Instant};

use knapsack_core::{Algorithm, Instance, Item, Solution, SolveError, Solver};

use self::frontier::{BestFirst, DepthFirst, Frontier};
use self::node::{Node, Relaxation};
use crate::density_order;

/// Order in which open nodes are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Explicit stack: "skip" branches are explored before "take" branches.
    #[default]
    DepthFirst,
    /// Priority queue on the relaxation bound.
    BestFirst,
}

/// Configuration for [`BranchAndBoundSolver`].
///
/// Without limits the search always runs to completion and is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchAndBoundConfig {
    /// Frontier discipline.
    pub order: SearchOrder,
    /// Stop after expanding this many nodes.
    pub node_limit: Option<u64>,
    /// Stop once this much wall-clock time has elapsed.
    pub time_limit: Option<Duration>,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and evaluated, leaves included.
    pub nodes_expanded: u64,
    /// Nodes discarded because their bound could not beat the incumbent.
    pub nodes_pruned: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
    /// Whether a node or time limit stopped the search early, in which case
    /// the solution is the best found rather than a proven optimum.
    pub limit_reached: bool,
}

/// Result of [`BranchAndBoundSolver::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best selection found, items in density order.
    pub solution: Solution,
    /// Search counters.
    pub stats: SearchStats,
}

/// Exact solver exploring the include/exclude tree with bound pruning.
///
/// # Examples
/// ```
/// use knapsack_core::{Instance, Item, Solver};
/// use knapsack_solver::BranchAndBoundSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let instance = Instance::new(
///     "knapsack",
///     50,
///     vec![Item::new("A", 60, 10), Item::new("B", 100, 20), Item::new("C", 120, 30)],
/// )?;
/// let solution = BranchAndBoundSolver::new().solve(&instance)?;
/// assert_eq!(solution.total_value(), 220);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundSolver {
    config: BranchAndBoundConfig,
}

impl BranchAndBoundSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BranchAndBoundConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: BranchAndBoundConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BranchAndBoundConfig {
        &self.config
    }

    /// Run the search and report counters alongside the solution.
    ///
    /// # Errors
    /// Returns [`SolveError::UnsupportedProblem`] for non-knapsack instances.
    pub fn search(&self, instance: &Instance) -> Result<SearchOutcome, SolveError> {
        instance.ensure_supported()?;
        let items = instance.items();
        let ranked: Vec<&Item> = density_order(items)
            .into_iter()
            .filter_map(|idx| items.get(idx))
            .collect();
        let search = Search {
            relaxation: Relaxation::new(&ranked, instance.capacity()),
            ranked: &ranked,
            capacity: instance.capacity(),
            config: &self.config,
        };
        let (chosen, stats) = match self.config.order {
            SearchOrder::DepthFirst => search.run(DepthFirst::default()),
            SearchOrder::BestFirst => search.run(BestFirst::default()),
        };

        let selected = chosen
            .into_iter()
            .filter_map(|position| ranked.get(position).map(|item| (*item).clone()))
            .collect();
        let solution = Solution::from_items(selected, Algorithm::BranchAndBound);

        if stats.limit_reached {
            log::warn!(
                "branch-and-bound stopped by search limit after {} nodes; returning best found (value {})",
                stats.nodes_expanded,
                solution.total_value()
            );
        }
        log::debug!(
            "branch-and-bound solved {} items: value {} weight {}/{}, {} expanded, {} pruned",
            items.len(),
            solution.total_value(),
            solution.total_weight(),
            instance.capacity(),
            stats.nodes_expanded,
            stats.nodes_pruned
        );
        Ok(SearchOutcome { solution, stats })
    }
}

impl Solver for BranchAndBoundSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BranchAndBound
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        self.search(instance).map(|outcome| outcome.solution)
    }
}

struct Search<'a> {
    relaxation: Relaxation<'a>,
    ranked: &'a [&'a Item],
    capacity: u64,
    config: &'a BranchAndBoundConfig,
}

impl Search<'_> {
    /// Explore until the frontier empties or a limit trips; returns the
    /// incumbent's chosen positions.
    fn run<F: Frontier>(&self, mut frontier: F) -> (Vec<usize>, SearchStats) {
        let started_at = Instant::now();
        let mut stats = SearchStats::default();
        let mut best_value = 0_u64;
        let mut best_chosen = Vec::new();

        frontier.push(Node::root(self.relaxation.upper_bound(0, 0, 0)));
        stats.peak_frontier = frontier.len();

        while let Some(node) = frontier.pop() {
            if self.limit_hit(&stats, started_at) {
                stats.limit_reached = true;
                break;
            }
            if node.value > best_value {
                best_value = node.value;
                best_chosen.clone_from(&node.chosen);
            }
            // The incumbent may have improved since this node was queued.
            if node.bound <= best_value {
                stats.nodes_pruned += 1;
                continue;
            }
            stats.nodes_expanded += 1;

            let Some(item) = self.ranked.get(node.depth) else {
                continue;
            };
            let depth = node.depth + 1;

            if let Some(weight) = node.weight.checked_add(item.weight)
                && weight <= self.capacity
            {
                let bound = self
                    .relaxation
                    .upper_bound(depth, node.value + item.value, weight);
                if bound > best_value {
                    frontier.push(node.take(item, bound));
                } else {
                    stats.nodes_pruned += 1;
                }
            }

            let bound = self.relaxation.upper_bound(depth, node.value, node.weight);
            if bound > best_value {
                frontier.push(node.skip(bound));
            } else {
                stats.nodes_pruned += 1;
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        (best_chosen, stats)
    }

    fn limit_hit(&self, stats: &SearchStats, started_at: Instant) -> bool {
        let nodes = self
            .config
            .node_limit
            .is_some_and(|limit| stats.nodes_expanded >= limit);
        let time = self
            .config
            .time_limit
            .is_some_and(|limit| started_at.elapsed() >= limit);
        nodes || time
    }
}

#[cfg(test)]
mod tests;
