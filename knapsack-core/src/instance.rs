//! Problem instances handed to solvers.
//!
//! An [`Instance`] is validated once at construction and is read-only
//! afterwards. Solvers borrow it and never reorder its items in place.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Item, SolveError};

/// Capability tag deciding which solvers accept an instance.
///
/// The tag is fixed when the instance is built, either explicitly or by
/// [`ProblemKind::from_project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProblemKind {
    /// Single-constraint 0/1 knapsack.
    Knapsack01,
    /// Anything else; rejected by every solver.
    Unsupported,
}

impl ProblemKind {
    /// Infer the kind from a project label.
    ///
    /// Labels containing `knapsack` (in any case) are knapsack problems.
    ///
    /// # Examples
    /// ```
    /// use knapsack_core::ProblemKind;
    ///
    /// assert_eq!(ProblemKind::from_project("Knapsack_01_labA"), ProblemKind::Knapsack01);
    /// assert_eq!(ProblemKind::from_project("tsp_berlin52"), ProblemKind::Unsupported);
    /// ```
    #[must_use]
    pub fn from_project(project: &str) -> Self {
        if project.to_lowercase().contains("knapsack") {
            Self::Knapsack01
        } else {
            Self::Unsupported
        }
    }
}

/// Errors returned when building an [`Instance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// Two items share an identifier.
    #[error("duplicate item id {id:?}")]
    DuplicateItemId {
        /// The repeated identifier.
        id: String,
    },
    /// Summing every item's weight or value overflows `u64`.
    #[error("total item {quantity} overflows u64")]
    TotalOverflow {
        /// Either `"weight"` or `"value"`.
        quantity: &'static str,
    },
}

/// A knapsack capacity together with the candidate items.
///
/// # Examples
/// ```
/// use knapsack_core::{Instance, Item, ProblemKind};
///
/// # fn main() -> Result<(), knapsack_core::InstanceError> {
/// let instance = Instance::new(
///     "knapsack_demo",
///     50,
///     vec![Item::new("A", 60, 10), Item::new("B", 100, 20)],
/// )?;
/// assert_eq!(instance.kind(), ProblemKind::Knapsack01);
/// assert_eq!(instance.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "InstanceRecord", into = "InstanceRecord")
)]
pub struct Instance {
    project: String,
    description: Option<String>,
    kind: ProblemKind,
    capacity: u64,
    items: Vec<Item>,
}

impl Instance {
    /// Validate and build an instance, inferring its kind from `project`.
    ///
    /// # Errors
    /// Returns [`InstanceError`] for duplicate ids or overflowing totals.
    pub fn new(
        project: impl Into<String>,
        capacity: u64,
        items: Vec<Item>,
    ) -> Result<Self, InstanceError> {
        let label = project.into();
        let kind = ProblemKind::from_project(&label);
        Self::with_kind(kind, label, capacity, items)
    }

    /// Validate and build an instance with an explicit kind.
    ///
    /// # Errors
    /// Returns [`InstanceError`] for duplicate ids or overflowing totals.
    pub fn with_kind(
        kind: ProblemKind,
        project: impl Into<String>,
        capacity: u64,
        items: Vec<Item>,
    ) -> Result<Self, InstanceError> {
        validate_items(&items)?;
        Ok(Self {
            project: project.into(),
            description: None,
            kind,
            capacity,
            items,
        })
    }

    /// Attach a free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Project label the instance was created under.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Optional human-readable description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Capability tag.
    #[must_use]
    pub const fn kind(&self) -> ProblemKind {
        self.kind
    }

    /// Knapsack capacity.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Items in their original order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fail with [`SolveError::UnsupportedProblem`] unless this is a 0/1
    /// knapsack instance.
    ///
    /// # Errors
    /// Returns [`SolveError::UnsupportedProblem`] for other kinds.
    pub fn ensure_supported(&self) -> Result<(), SolveError> {
        match self.kind {
            ProblemKind::Knapsack01 => Ok(()),
            ProblemKind::Unsupported => Err(SolveError::UnsupportedProblem {
                project: self.project.clone(),
            }),
        }
    }
}

fn validate_items(items: &[Item]) -> Result<(), InstanceError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(InstanceError::DuplicateItemId {
                id: item.id.clone(),
            });
        }
    }
    checked_total(items.iter().map(|item| item.weight))
        .ok_or(InstanceError::TotalOverflow { quantity: "weight" })?;
    checked_total(items.iter().map(|item| item.value))
        .ok_or(InstanceError::TotalOverflow { quantity: "value" })?;
    Ok(())
}

fn checked_total(mut quantities: impl Iterator<Item = u64>) -> Option<u64> {
    quantities.try_fold(0_u64, u64::checked_add)
}

/// Wire form of an [`Instance`]; the kind is optional and inferred when
/// absent.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InstanceRecord {
    #[serde(default = "unknown_project")]
    project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<ProblemKind>,
    capacity: u64,
    items: Vec<Item>,
}

#[cfg(feature = "serde")]
fn unknown_project() -> String {
    "unknown".to_owned()
}

#[cfg(feature = "serde")]
impl TryFrom<InstanceRecord> for Instance {
    type Error = InstanceError;

    fn try_from(record: InstanceRecord) -> Result<Self, Self::Error> {
        let kind = record
            .kind
            .unwrap_or_else(|| ProblemKind::from_project(&record.project));
        let instance = Self::with_kind(kind, record.project, record.capacity, record.items)?;
        Ok(match record.description {
            Some(description) => instance.with_description(description),
            None => instance,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Instance> for InstanceRecord {
    fn from(instance: Instance) -> Self {
        Self {
            project: instance.project,
            description: instance.description,
            kind: Some(instance.kind),
            capacity: instance.capacity,
            items: instance.items,
        }
    }
}
