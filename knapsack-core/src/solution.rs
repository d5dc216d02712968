//! Solver output.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Algorithm, Instance, Item};

/// A selected subset of items with its aggregate value and weight.
///
/// Totals are derived from the selected items at construction, so they
/// always agree with [`Solution::items`].
///
/// # Examples
/// ```
/// use knapsack_core::{Algorithm, Item, Solution};
///
/// let solution = Solution::from_items(
///     vec![Item::new("B", 100, 20), Item::new("C", 120, 30)],
///     Algorithm::Dp,
/// );
/// assert_eq!(solution.total_value(), 220);
/// assert_eq!(solution.total_weight(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    items: Vec<Item>,
    total_value: u64,
    total_weight: u64,
    algorithm: Algorithm,
}

/// Reasons a [`Solution`] does not fit an [`Instance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionError {
    /// The same item was selected more than once.
    #[error("item {id:?} is selected more than once")]
    DuplicateItem {
        /// Identifier of the repeated item.
        id: String,
    },
    /// A selected item is not part of the instance.
    #[error("item {id:?} is not part of the instance")]
    UnknownItem {
        /// Identifier of the foreign item.
        id: String,
    },
    /// The selection is heavier than the knapsack allows.
    #[error("selected weight {weight} exceeds capacity {capacity}")]
    CapacityExceeded {
        /// Total selected weight.
        weight: u64,
        /// Instance capacity.
        capacity: u64,
    },
}

impl Solution {
    /// Build a solution, summing value and weight over `items`.
    ///
    /// Sums saturate; items drawn from a validated [`Instance`] never reach
    /// the limit.
    #[must_use]
    pub fn from_items(items: Vec<Item>, algorithm: Algorithm) -> Self {
        let total_value = items
            .iter()
            .fold(0_u64, |acc, item| acc.saturating_add(item.value));
        let total_weight = items
            .iter()
            .fold(0_u64, |acc, item| acc.saturating_add(item.weight));
        Self {
            items,
            total_value,
            total_weight,
            algorithm,
        }
    }

    /// A solution selecting nothing.
    #[must_use]
    pub const fn empty(algorithm: Algorithm) -> Self {
        Self {
            items: Vec::new(),
            total_value: 0,
            total_weight: 0,
            algorithm,
        }
    }

    /// Selected items.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of selected values.
    #[must_use]
    pub const fn total_value(&self) -> u64 {
        self.total_value
    }

    /// Sum of selected weights.
    #[must_use]
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Algorithm that produced the solution.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Check the selection is a feasible subset of `instance`.
    ///
    /// # Errors
    /// Returns the first [`SolutionError`] found.
    pub fn check_against(&self, instance: &Instance) -> Result<(), SolutionError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(SolutionError::DuplicateItem {
                    id: item.id.clone(),
                });
            }
            if !instance.items().contains(item) {
                return Err(SolutionError::UnknownItem {
                    id: item.id.clone(),
                });
            }
        }
        if self.total_weight > instance.capacity() {
            return Err(SolutionError::CapacityExceeded {
                weight: self.total_weight,
                capacity: instance.capacity(),
            });
        }
        Ok(())
    }
}
