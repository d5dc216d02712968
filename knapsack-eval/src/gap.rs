//! The optimality gap and its arithmetic.

use std::fmt;

use crate::EvaluationError;

/// Relative shortfall of a solution against the optimum, in `0.0..=1.0`.
///
/// Displayed with four decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Gap(f64);

impl Gap {
    /// The gap of an optimal solution.
    pub const ZERO: Self = Self(0.0);

    /// Raw ratio.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the solution matches the optimum exactly.
    #[must_use]
    #[expect(clippy::float_cmp, reason = "an optimal gap is exactly zero")]
    pub fn is_optimal(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Score `value` against a known `optimum`.
///
/// An optimum of zero scores every admissible value as zero gap.
///
/// # Errors
/// Returns [`EvaluationError::ExceedsOptimum`] when `value > optimum`.
///
/// # Examples
/// ```
/// use knapsack_eval::gap_from_optimum;
///
/// # fn main() -> Result<(), knapsack_eval::EvaluationError> {
/// assert_eq!(gap_from_optimum(200, 150)?.value(), 0.25);
/// assert!(gap_from_optimum(0, 0)?.is_optimal());
/// # Ok(())
/// # }
/// ```
pub fn gap_from_optimum(optimum: u64, value: u64) -> Result<Gap, EvaluationError> {
    if value > optimum {
        return Err(EvaluationError::ExceedsOptimum { value, optimum });
    }
    if optimum == 0 {
        return Ok(Gap::ZERO);
    }
    Ok(Gap(shortfall_ratio(optimum - value, optimum)))
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the gap is reported as a floating-point ratio"
)]
fn shortfall_ratio(shortfall: u64, optimum: u64) -> f64 {
    shortfall as f64 / optimum as f64
}
