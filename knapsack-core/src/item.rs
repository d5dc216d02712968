//! Items that may be packed into the knapsack.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single candidate item with an identifier, a value and a weight.
///
/// Items are plain data; uniqueness of `id` is enforced by
/// [`Instance`](crate::Instance) rather than by the item itself.
///
/// # Examples
/// ```
/// use knapsack_core::Item;
///
/// let item = Item::new("A", 60, 10);
/// assert_eq!(item.density(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Identifier, unique within an instance.
    pub id: String,
    /// Value gained when the item is selected.
    pub value: u64,
    /// Capacity consumed when the item is selected.
    pub weight: u64,
}

impl Item {
    /// Construct an item.
    pub fn new(id: impl Into<String>, value: u64, weight: u64) -> Self {
        Self {
            id: id.into(),
            value,
            weight,
        }
    }

    /// Value per unit of weight.
    ///
    /// Zero-weight items are free value and report `f64::INFINITY`, so they
    /// rank ahead of every weighted item.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "density is a floating-point ranking heuristic"
    )]
    pub fn density(&self) -> f64 {
        if self.weight == 0 {
            return f64::INFINITY;
        }
        self.value as f64 / self.weight as f64
    }

    /// Whether the item consumes no capacity.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.weight == 0
    }
}
