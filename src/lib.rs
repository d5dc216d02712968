//! Facade crate for the knapsack engine.
//!
//! This crate re-exports the core domain types and the three solvers.
//! Optimality-gap evaluation and instance file handling sit behind the
//! `eval` and `data` feature flags, both enabled by default.

#![forbid(unsafe_code)]

pub use knapsack_core::{
    Algorithm, Instance, InstanceError, Item, ParseAlgorithmError, ProblemKind, Solution,
    SolutionError, SolveError, Solver,
};

pub use knapsack_solver::{
    BranchAndBoundConfig, BranchAndBoundSolver, DynamicProgrammingSolver, GreedySolver,
    SearchOrder, SearchOutcome, SearchStats, optimal_value, solver_for,
};

#[cfg(feature = "eval")]
pub use knapsack_eval::{EvaluationError, Evaluator, Gap, evaluate, gap_from_optimum};

#[cfg(feature = "data")]
pub use knapsack_data::{
    GenerateError, GeneratorConfig, InstanceIoError, generate, load_instance, save_instance,
};
