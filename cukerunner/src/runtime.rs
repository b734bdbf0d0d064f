//! Capabilities the runner needs from a BDD runtime.
//!
//! The runner never names a concrete runtime. A runtime is created from
//! [`RuntimeOptions`] by a [`RuntimeFactory`], enumerates its feature units,
//! wraps each in a [`FeatureRunner`], and exposes an [`EventBus`] for
//! lifecycle events.

use std::time::SystemTime;

use crate::{BoxError, RunFailure, RuntimeOptions};

/// Constructs a runtime from composed options.
pub trait RuntimeFactory {
    /// Runtime produced by this factory.
    type Runtime: BddRuntime;

    /// Builds the runtime.
    ///
    /// # Errors
    ///
    /// Returns any error raised while the runtime interprets `options`.
    fn create(&self, options: &RuntimeOptions) -> Result<Self::Runtime, BoxError>;
}

/// A constructed BDD runtime.
pub trait BddRuntime {
    /// Unit of discovery: one parsed feature file.
    type Feature;
    /// Runner wrapping a single feature.
    type Runner: FeatureRunner;
    /// Event bus receiving lifecycle events.
    type Bus: EventBus;

    /// Enumerates candidate features in the runtime's own order.
    ///
    /// # Errors
    ///
    /// Returns any error raised while locating or parsing feature files.
    fn discover(&mut self) -> Result<Vec<Self::Feature>, BoxError>;

    /// Wraps `feature` in a runner.
    ///
    /// # Errors
    ///
    /// Returns any error raised while preparing the feature for execution.
    fn feature_runner(&self, feature: Self::Feature) -> Result<Self::Runner, BoxError>;

    /// The runtime's event bus.
    fn event_bus(&self) -> &Self::Bus;
}

/// Executes and describes a single feature.
pub trait FeatureRunner {
    /// Host-visible description of the feature.
    type Description;
    /// Host notifier receiving per-scenario results.
    type Notifier: ?Sized;

    /// Whether the feature has no scenarios left after tag filtering.
    fn is_empty(&self) -> bool;

    /// The feature's own description.
    fn description(&self) -> &Self::Description;

    /// Runs the feature, reporting results through `notifier`.
    ///
    /// # Errors
    ///
    /// Returns [`RunFailure`] only when the run cannot complete; scenario
    /// failures are reported through the notifier instead.
    fn run(&self, notifier: &mut Self::Notifier) -> Result<(), RunFailure>;
}

/// Lifecycle events published by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunEvent {
    /// Every feature has finished.
    TestRunFinished {
        /// Bus clock reading when the event was raised.
        time: SystemTime,
    },
}

/// Receives lifecycle events; implementations supply any interior
/// mutability they need.
pub trait EventBus {
    /// Current reading of the bus clock.
    fn time(&self) -> SystemTime;

    /// Publishes `event`.
    fn send(&self, event: RunEvent);
}
