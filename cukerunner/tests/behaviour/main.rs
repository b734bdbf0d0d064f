//! Behavioural tests for the runner using `rstest-bdd`.
//!
//! The `scenarios!` macro binds every feature under `tests/features` to the
//! step definitions in `steps`, injecting a fresh `RunnerWorld` per
//! scenario.

mod fixtures;
mod steps;

use fixtures::{RunnerWorld, world};
use rstest_bdd_macros::scenarios;

scenarios!("tests/features", fixtures = [world: RunnerWorld]);
