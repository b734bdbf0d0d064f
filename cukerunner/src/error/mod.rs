//! Error types produced while configuring and driving the runner.

mod constructors;
mod types;

pub use types::{BoxError, CukeError, RunFailure, RuntimeStage};
