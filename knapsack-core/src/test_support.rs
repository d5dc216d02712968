//! Test-only fixtures shared by unit, property and behaviour tests across
//! the workspace.

use crate::{Algorithm, Instance, Item, Solution, SolveError, Solver};

/// Build a knapsack instance from `(value, weight)` pairs.
///
/// Items receive ids `I0`, `I1`, ... in input order.
///
/// # Panics
/// Panics if the pairs overflow the instance totals.
#[must_use]
pub fn instance_from_pairs(capacity: u64, pairs: &[(u64, u64)]) -> Instance {
    let items = pairs
        .iter()
        .enumerate()
        .map(|(idx, &(value, weight))| Item::new(format!("I{idx}"), value, weight))
        .collect();
    #[expect(
        clippy::expect_used,
        reason = "fixtures are built from trusted literals"
    )]
    let instance =
        Instance::new("knapsack_test", capacity, items).expect("fixture instance should be valid");
    instance
}

/// The textbook instance: capacity 50, items A(60, 10), B(100, 20),
/// C(120, 30). The optimum is 220 (B and C); greedy reaches 160.
///
/// # Panics
/// Never panics; the literal data is valid.
#[must_use]
pub fn classic_instance() -> Instance {
    let items = vec![
        Item::new("A", 60, 10),
        Item::new("B", 100, 20),
        Item::new("C", 120, 30),
    ];
    #[expect(
        clippy::expect_used,
        reason = "fixtures are built from trusted literals"
    )]
    let instance =
        Instance::new("knapsack_classic", 50, items).expect("classic instance should be valid");
    instance
}

/// An instance with no items.
///
/// # Panics
/// Never panics; an empty item list is always valid.
#[must_use]
pub fn empty_instance(capacity: u64) -> Instance {
    instance_from_pairs(capacity, &[])
}

/// Best value over every subset, by exhaustive enumeration.
///
/// Only suitable for a handful of items.
#[must_use]
pub fn brute_force_optimum(instance: &Instance) -> u64 {
    let mut best = 0;
    let mut stack = vec![(0_usize, 0_u64, 0_u64)];
    while let Some((next, value, weight)) = stack.pop() {
        let Some(item) = instance.items().get(next) else {
            best = best.max(value);
            continue;
        };
        stack.push((next + 1, value, weight));
        let taken = weight + item.weight;
        if taken <= instance.capacity() {
            stack.push((next + 1, value + item.value, taken));
        }
    }
    best
}

/// `Solver` returning the same canned solution for every supported
/// instance.
#[derive(Debug, Clone)]
pub struct FixedSolver {
    solution: Solution,
}

impl FixedSolver {
    /// Wrap a canned solution.
    #[must_use]
    pub const fn new(solution: Solution) -> Self {
        Self { solution }
    }
}

impl Solver for FixedSolver {
    fn algorithm(&self) -> Algorithm {
        self.solution.algorithm()
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        instance.ensure_supported()?;
        Ok(self.solution.clone())
    }
}
