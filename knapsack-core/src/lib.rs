//! Core domain types for the knapsack engine.
//!
//! Items, instances and solutions carry just enough validation to keep the
//! solvers honest: instances reject duplicate ids and overflowing totals at
//! construction, and solutions derive their totals from the selected items.
//! The [`Solver`] trait is the seam every strategy plugs into.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod instance;
mod item;
mod solution;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use instance::{Instance, InstanceError, ProblemKind};
pub use item::Item;
pub use solution::{Solution, SolutionError};
pub use solver::{Algorithm, Error, ParseAlgorithmError, SolveError, Solver};
