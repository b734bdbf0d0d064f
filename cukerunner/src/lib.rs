//! Property-driven adapter that runs BDD features inside a host test runner.
//!
//! The crate reads `cukerunner.properties`, composes the runtime options
//! (`--tags`, `--glue`, report plugins and the features directory), asks a
//! [`BddRuntime`] for its features and exposes the non-empty ones through the
//! host's [`ParentRunner`] contract. After every child has run,
//! [`RunEvent::TestRunFinished`] is sent on the runtime's [`EventBus`].
//!
//! Feature parsing, step matching and report writing stay with the runtime;
//! scheduling and result aggregation stay with the host.

mod error;
mod host;
pub mod options;
pub mod properties;
mod result_ext;
mod runner;
mod runtime;

/// Convenience alias for results returned by this crate.
pub type CukeResult<T> = Result<T, CukeError>;

pub use error::{BoxError, CukeError, RunFailure, RuntimeStage};
pub use host::{ChildrenInvoker, ParentRunner, Statement};
pub use options::{OptionsBlob, Plugin, RunnerSettings, RuntimeOptions};
pub use properties::{Properties, PropertiesOrigin, PropertySource};
pub use result_ext::RuntimeResultExt;
pub use runner::CukeRunner;
pub use runtime::{BddRuntime, EventBus, FeatureRunner, RunEvent, RuntimeFactory};
