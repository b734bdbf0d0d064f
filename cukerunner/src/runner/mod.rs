//! The adapter between the host test runner and a BDD runtime.

mod finish;

use tracing::{debug, info};

use crate::{
    BddRuntime, ChildrenInvoker, CukeResult, FeatureRunner, ParentRunner, Properties,
    PropertySource, RunFailure, RunnerSettings, RuntimeFactory, RuntimeOptions,
    RuntimeResultExt, RuntimeStage, Statement,
};
use finish::RunFinished;

type NotifierOf<R> = <<R as BddRuntime>::Runner as FeatureRunner>::Notifier;

/// Runs the non-empty features of a BDD runtime as host children.
///
/// Construction is all-or-nothing: properties are loaded and validated, the
/// runtime is created and its features are discovered and wrapped before a
/// runner is returned.
///
/// # Examples
///
/// ```rust,ignore
/// use cukerunner::{CukeRunner, PropertySource};
///
/// let runner = CukeRunner::new(&PropertySource::default(), &MyRuntimeFactory)?;
/// runner.run(&mut notifier)?;
/// ```
pub struct CukeRunner<R: BddRuntime> {
    settings: RunnerSettings,
    options: RuntimeOptions,
    runtime: R,
    children: Vec<R::Runner>,
}

impl<R: BddRuntime> CukeRunner<R> {
    /// Loads properties from `source` and builds the runner.
    ///
    /// Properties that cannot be loaded are logged and treated as empty; the
    /// mandatory-key check then decides whether construction fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CukeError::MissingProperty`] for an absent mandatory
    /// key, [`crate::CukeError::OptionsSyntax`] or
    /// [`crate::CukeError::OptionsParsing`] when the composed options do not
    /// parse, and [`crate::CukeError::Runtime`] when the runtime fails to
    /// create, discover or wrap features.
    pub fn new<F>(source: &PropertySource, factory: &F) -> CukeResult<Self>
    where
        F: RuntimeFactory<Runtime = R>,
    {
        let properties = source.load();
        Self::from_properties(&properties, factory)
    }

    /// Builds the runner from already-loaded properties.
    ///
    /// # Errors
    ///
    /// As for [`CukeRunner::new`].
    pub fn from_properties<F>(properties: &Properties, factory: &F) -> CukeResult<Self>
    where
        F: RuntimeFactory<Runtime = R>,
    {
        let settings = RunnerSettings::from_properties(properties)?;
        let options = RuntimeOptions::try_from(&settings)?;
        info!(options = %options.blob(), "Setting cucumber options");

        let mut runtime = factory.create(&options).at_stage(RuntimeStage::Create)?;
        let features = runtime.discover().at_stage(RuntimeStage::Discover)?;
        let mut children = Vec::with_capacity(features.len());
        for (index, feature) in features.into_iter().enumerate() {
            let runner = runtime
                .feature_runner(feature)
                .at_stage(RuntimeStage::Wrap)?;
            if runner.is_empty() {
                debug!(index, "skipping feature without runnable scenarios");
            } else {
                children.push(runner);
            }
        }

        Ok(Self {
            settings,
            options,
            runtime,
            children,
        })
    }

    /// Validated settings the runner was built from.
    #[must_use]
    pub const fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    /// Options handed to the runtime.
    #[must_use]
    pub const fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    /// The underlying runtime.
    #[must_use]
    pub const fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Runs every child and announces the end of the run.
    ///
    /// # Errors
    ///
    /// Returns the [`RunFailure`] of the first aborted child; no finish
    /// event is sent in that case.
    pub fn run(&self, notifier: &mut NotifierOf<R>) -> Result<(), RunFailure> {
        self.children_invoker(notifier).evaluate()
    }
}

impl<R: BddRuntime> ParentRunner for CukeRunner<R> {
    type Child = R::Runner;
    type Description = <R::Runner as FeatureRunner>::Description;
    type Notifier = NotifierOf<R>;

    fn children(&self) -> &[Self::Child] {
        &self.children
    }

    fn describe_child<'a>(&'a self, child: &'a Self::Child) -> &'a Self::Description {
        child.description()
    }

    fn run_child(
        &self,
        child: &Self::Child,
        notifier: &mut Self::Notifier,
    ) -> Result<(), RunFailure> {
        child.run(notifier)
    }

    fn children_invoker<'a>(&'a self, notifier: &'a mut Self::Notifier) -> impl Statement + 'a {
        RunFinished::new(
            ChildrenInvoker::new(self, notifier),
            self.runtime.event_bus(),
        )
    }
}
