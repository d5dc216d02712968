//! Seeded instance generation.

use std::ops::RangeInclusive;

use knapsack_core::{Instance, InstanceError, Item};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Parameters for [`generate`].
///
/// The defaults reproduce the "Lab Inventory A" instance: fifteen items,
/// capacity 50, values in `10..=50` and weights in `2..=20`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of items.
    pub items: usize,
    /// Knapsack capacity.
    pub capacity: u64,
    /// Seed for the random generator.
    pub seed: u64,
    /// Inclusive range item values are drawn from.
    pub values: RangeInclusive<u64>,
    /// Inclusive range item weights are drawn from.
    pub weights: RangeInclusive<u64>,
    /// Item ids are `{id_prefix}-{n:03}`, numbered from 1.
    pub id_prefix: String,
    /// Project label.
    pub project: String,
    /// Description; a summary naming the item count is used when absent.
    pub description: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            items: 15,
            capacity: 50,
            seed: 3642,
            values: 10..=50,
            weights: 2..=20,
            id_prefix: "LAB-A".to_owned(),
            project: "knapsack_01_labA".to_owned(),
            description: None,
        }
    }
}

/// Errors returned by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A sampling range contains no values.
    #[error("{quantity} range {start}..={end} is empty")]
    EmptyRange {
        /// Either `"value"` or `"weight"`.
        quantity: &'static str,
        /// Range start.
        start: u64,
        /// Range end.
        end: u64,
    },
    /// The generated items do not form a valid instance.
    #[error("generated items do not form a valid instance")]
    Instance(#[from] InstanceError),
}

/// Generate an instance; equal configurations yield equal instances.
///
/// # Errors
/// Returns [`GenerateError::EmptyRange`] when a sampling range is empty and
/// [`GenerateError::Instance`] when the item totals overflow.
///
/// # Examples
/// ```
/// use knapsack_data::{GeneratorConfig, generate};
///
/// # fn main() -> Result<(), knapsack_data::GenerateError> {
/// let instance = generate(&GeneratorConfig::default())?;
/// assert_eq!(instance.len(), 15);
/// assert_eq!(instance.items()[0].id, "LAB-A-001");
/// # Ok(())
/// # }
/// ```
pub fn generate(config: &GeneratorConfig) -> Result<Instance, GenerateError> {
    ensure_non_empty("value", &config.values)?;
    ensure_non_empty("weight", &config.weights)?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let items = (1..=config.items)
        .map(|n| {
            let value = rng.gen_range(config.values.clone());
            let weight = rng.gen_range(config.weights.clone());
            Item::new(format!("{}-{n:03}", config.id_prefix), value, weight)
        })
        .collect();
    let description = config.description.clone().unwrap_or_else(|| {
        format!(
            "Lab Inventory A - {} items with varying value/weight ratios",
            config.items
        )
    });

    let instance = Instance::new(config.project.as_str(), config.capacity, items)?
        .with_description(description);
    log::debug!(
        "generated {} items for {} with seed {}",
        instance.len(),
        instance.project(),
        config.seed
    );
    Ok(instance)
}

fn ensure_non_empty(
    quantity: &'static str,
    range: &RangeInclusive<u64>,
) -> Result<(), GenerateError> {
    if range.is_empty() {
        return Err(GenerateError::EmptyRange {
            quantity,
            start: *range.start(),
            end: *range.end(),
        });
    }
    Ok(())
}
