//! Evaluation with memoised optima.

use std::collections::HashMap;

use knapsack_core::{Instance, Solution};

use crate::{EvaluationError, Gap};

/// Evaluates solutions, computing each instance's optimum at most once.
///
/// Optima are keyed by instance content, so two equal instances share an
/// entry. Failed computations are not cached.
///
/// # Examples
/// ```
/// use knapsack_core::{Algorithm, Instance, Item, Solution};
/// use knapsack_eval::Evaluator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let instance = Instance::new("knapsack", 5, vec![Item::new("A", 3, 4)])?;
/// let mut evaluator = Evaluator::new();
/// let empty = Solution::empty(Algorithm::Greedy);
/// assert_eq!(evaluator.evaluate(&instance, &empty)?.value(), 1.0);
/// assert_eq!(evaluator.cached(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct Evaluator {
    optima: HashMap<Instance, u64>,
}

impl Evaluator {
    /// Construct an evaluator with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Optimum of `instance`, computed on first request.
    ///
    /// # Errors
    /// Returns [`EvaluationError::Solve`] when the instance is not a knapsack
    /// problem or its optimum cannot be tabulated.
    pub fn optimum(&mut self, instance: &Instance) -> Result<u64, EvaluationError> {
        if let Some(&optimum) = self.optima.get(instance) {
            return Ok(optimum);
        }
        let optimum = knapsack_solver::optimal_value(instance)?;
        self.optima.insert(instance.clone(), optimum);
        Ok(optimum)
    }

    /// Score `solution` against the cached optimum of `instance`.
    ///
    /// # Errors
    /// Fails for the same reasons as [`evaluate`](crate::evaluate).
    pub fn evaluate(
        &mut self,
        instance: &Instance,
        solution: &Solution,
    ) -> Result<Gap, EvaluationError> {
        crate::validate(instance, solution)?;
        let optimum = self.optimum(instance)?;
        crate::score(instance, solution, optimum)
    }

    /// Number of instances with a cached optimum.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.optima.len()
    }

    /// Drop every cached optimum.
    pub fn clear(&mut self) {
        self.optima.clear();
    }
}
