//! Scenario state shared between behavioural steps.

use std::cell::RefCell;

use cukerunner::CukeRunner;
use rstest::fixture;
use rstest_bdd::Slot;
use test_helpers::properties::PropertiesFixture;
use test_helpers::runtime::{FakeFactory, FakeRuntime, RecordingNotifier};

/// World for runner scenarios.
///
/// Clone-able values live in `Slot`s; the runner, factory and temporary
/// files sit in `RefCell`s.
#[derive(Default)]
pub struct RunnerWorld {
    /// Accumulated properties file text.
    pub properties_text: Slot<String>,
    /// Set when the scenario wants no properties file at all.
    pub properties_missing: Slot<bool>,
    /// Composed options blob after a successful configuration.
    pub options_blob: Slot<String>,
    /// Key named by a missing-property failure.
    pub missing_key: Slot<String>,
    /// Rendered error of a failed configuration.
    pub error: Slot<String>,
    /// Whether the last run aborted.
    pub run_aborted: Slot<bool>,
    /// Runtime factory for the scenario.
    pub factory: RefCell<Option<FakeFactory>>,
    /// Runner built by the configuration step.
    pub runner: RefCell<Option<CukeRunner<FakeRuntime>>>,
    /// Notifier handed to the runner.
    pub notifier: RefCell<RecordingNotifier>,
    /// Temporary directory holding the properties file.
    pub properties_file: RefCell<Option<PropertiesFixture>>,
}

/// Fixture providing a fresh `RunnerWorld` for each scenario.
#[fixture]
pub fn world() -> RunnerWorld {
    RunnerWorld::default()
}
