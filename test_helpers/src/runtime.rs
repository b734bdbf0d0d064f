//! In-memory BDD runtime for driving `cukerunner` in tests.
//!
//! Features are described with a compact layout string such as
//! `"login:2,empty:0,broken!:1"`: each entry names a feature and its
//! scenario count, and a trailing `!` makes the feature abort when run.
//!
//! # Examples
//!
//! ```
//! use cukerunner_test_helpers::runtime::parse_features;
//!
//! let features = parse_features("login:2,broken!:1")?;
//! assert_eq!(features.len(), 2);
//! assert!(features.iter().any(|feature| feature.aborts));
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result, anyhow};
use cukerunner::{
    BddRuntime, BoxError, EventBus, FeatureRunner, RunEvent, RunFailure, RuntimeFactory,
    RuntimeOptions, RuntimeStage,
};

/// Clock reading reported by the fake event bus.
pub const BUS_CLOCK: Duration = Duration::from_secs(1_700_000_000);

/// Entry written to the shared run log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A feature started running.
    Ran(String),
    /// The finish event arrived on the bus.
    Finished(SystemTime),
}

impl LogEntry {
    /// Short label used in assertions: the feature name or `finished`.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Ran(name) => name,
            Self::Finished(_) => "finished",
        }
    }
}

/// Shared, ordered record of feature runs and bus events.
pub type RunLog = Rc<RefCell<Vec<LogEntry>>>;

/// Feature description produced by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFeature {
    /// Feature name, used as its description.
    pub name: String,
    /// Scenarios left after tag filtering.
    pub scenarios: usize,
    /// Whether running the feature aborts.
    pub aborts: bool,
}

/// Parses a feature layout string.
///
/// # Errors
///
/// Returns an error for entries without a `name:count` shape.
pub fn parse_features(layout: &str) -> Result<Vec<FakeFeature>> {
    layout
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (raw_name, count) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("feature entry '{entry}' lacks a scenario count"))?;
            let (name, aborts) = raw_name
                .strip_suffix('!')
                .map_or((raw_name, false), |stripped| (stripped, true));
            Ok(FakeFeature {
                name: name.to_owned(),
                scenarios: count
                    .parse()
                    .with_context(|| format!("scenario count in '{entry}'"))?,
                aborts,
            })
        })
        .collect()
}

/// Notifier recording the descriptions of started children.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// Descriptions of started children, in order.
    pub started: Vec<String>,
}

/// Event bus appending finish events to the run log.
pub struct FakeBus {
    log: RunLog,
}

impl EventBus for FakeBus {
    fn time(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + BUS_CLOCK
    }

    fn send(&self, event: RunEvent) {
        if let RunEvent::TestRunFinished { time } = event {
            self.log.borrow_mut().push(LogEntry::Finished(time));
        }
    }
}

/// Runner for one fake feature.
pub struct FakeRunner {
    feature: FakeFeature,
    log: RunLog,
}

impl FeatureRunner for FakeRunner {
    type Description = String;
    type Notifier = RecordingNotifier;

    fn is_empty(&self) -> bool {
        self.feature.scenarios == 0
    }

    fn description(&self) -> &String {
        &self.feature.name
    }

    fn run(&self, notifier: &mut RecordingNotifier) -> Result<(), RunFailure> {
        notifier.started.push(self.feature.name.clone());
        self.log
            .borrow_mut()
            .push(LogEntry::Ran(self.feature.name.clone()));
        if self.feature.aborts {
            return Err(RunFailure::new(format!("{} aborted", self.feature.name)));
        }
        Ok(())
    }
}

/// Runtime serving a fixed list of features.
pub struct FakeRuntime {
    features: Vec<FakeFeature>,
    fail_at: Option<RuntimeStage>,
    discoveries: usize,
    bus: FakeBus,
    log: RunLog,
}

impl FakeRuntime {
    /// Number of times [`BddRuntime::discover`] ran.
    #[must_use]
    pub const fn discoveries(&self) -> usize {
        self.discoveries
    }
}

fn stage_failure(stage: RuntimeStage) -> BoxError {
    format!("fake runtime refused to {stage}").into()
}

impl BddRuntime for FakeRuntime {
    type Feature = FakeFeature;
    type Runner = FakeRunner;
    type Bus = FakeBus;

    fn discover(&mut self) -> Result<Vec<FakeFeature>, BoxError> {
        self.discoveries += 1;
        if self.fail_at == Some(RuntimeStage::Discover) {
            return Err(stage_failure(RuntimeStage::Discover));
        }
        Ok(self.features.clone())
    }

    fn feature_runner(&self, feature: FakeFeature) -> Result<FakeRunner, BoxError> {
        if self.fail_at == Some(RuntimeStage::Wrap) {
            return Err(stage_failure(RuntimeStage::Wrap));
        }
        Ok(FakeRunner {
            feature,
            log: Rc::clone(&self.log),
        })
    }

    fn event_bus(&self) -> &FakeBus {
        &self.bus
    }
}

/// Factory capturing the options it was given.
pub struct FakeFactory {
    features: Vec<FakeFeature>,
    fail_at: Option<RuntimeStage>,
    log: RunLog,
    seen_options: RefCell<Vec<RuntimeOptions>>,
}

impl FakeFactory {
    /// Factory whose runtime discovers the features in `layout`.
    ///
    /// # Errors
    ///
    /// Returns an error when `layout` is malformed.
    pub fn new(layout: &str) -> Result<Self> {
        Ok(Self {
            features: parse_features(layout)?,
            fail_at: None,
            log: RunLog::default(),
            seen_options: RefCell::default(),
        })
    }

    /// Makes the runtime fail at `stage`.
    #[must_use]
    pub const fn failing_at(mut self, stage: RuntimeStage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    /// Shared run log.
    #[must_use]
    pub fn log(&self) -> RunLog {
        Rc::clone(&self.log)
    }

    /// Labels of the run log entries, in order.
    #[must_use]
    pub fn log_labels(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .map(|entry| entry.label().to_owned())
            .collect()
    }

    /// Options passed to every `create` call.
    #[must_use]
    pub fn seen_options(&self) -> Vec<RuntimeOptions> {
        self.seen_options.borrow().clone()
    }
}

impl RuntimeFactory for FakeFactory {
    type Runtime = FakeRuntime;

    fn create(&self, options: &RuntimeOptions) -> Result<FakeRuntime, BoxError> {
        self.seen_options.borrow_mut().push(options.clone());
        if self.fail_at == Some(RuntimeStage::Create) {
            return Err(stage_failure(RuntimeStage::Create));
        }
        Ok(FakeRuntime {
            features: self.features.clone(),
            fail_at: self.fail_at,
            discoveries: 0,
            bus: FakeBus {
                log: Rc::clone(&self.log),
            },
            log: Rc::clone(&self.log),
        })
    }
}
