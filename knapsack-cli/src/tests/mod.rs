//! Shared test harness modules for the knapsack CLI.
#![expect(
    clippy::expect_used,
    reason = "tests use expect for readable failures"
)]

use super::*;

mod helpers;
