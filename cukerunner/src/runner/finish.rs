//! Statement wrapper that announces the end of a run.

use tracing::debug;

use crate::{EventBus, RunEvent, RunFailure, Statement};

/// Evaluates `inner`, then sends [`RunEvent::TestRunFinished`] on `bus`.
///
/// The event is sent only when `inner` completes; an aborted child
/// propagates its failure and suppresses the event.
pub(crate) struct RunFinished<'a, S, B: ?Sized> {
    inner: S,
    bus: &'a B,
}

impl<'a, S, B: ?Sized> RunFinished<'a, S, B> {
    pub(crate) const fn new(inner: S, bus: &'a B) -> Self {
        Self { inner, bus }
    }
}

impl<S, B> Statement for RunFinished<'_, S, B>
where
    S: Statement,
    B: EventBus + ?Sized,
{
    fn evaluate(&mut self) -> Result<(), RunFailure> {
        self.inner.evaluate()?;
        let time = self.bus.time();
        debug!(?time, "sending test run finished");
        self.bus.send(RunEvent::TestRunFinished { time });
        Ok(())
    }
}
