//! Parent/child contract expected by the host test runner.

use crate::RunFailure;

/// A deferred unit of work evaluated by the host.
pub trait Statement {
    /// Runs the work.
    ///
    /// # Errors
    ///
    /// Returns the first [`RunFailure`] raised while evaluating.
    fn evaluate(&mut self) -> Result<(), RunFailure>;
}

/// A runner that owns an ordered list of children.
pub trait ParentRunner {
    /// Child type.
    type Child;
    /// Description type returned for each child.
    type Description;
    /// Notifier passed to each child run.
    type Notifier: ?Sized;

    /// Children in execution order.
    fn children(&self) -> &[Self::Child];

    /// Describes `child`.
    fn describe_child<'a>(&'a self, child: &'a Self::Child) -> &'a Self::Description;

    /// Runs `child`.
    ///
    /// # Errors
    ///
    /// Returns [`RunFailure`] when the child run aborts.
    fn run_child(&self, child: &Self::Child, notifier: &mut Self::Notifier)
    -> Result<(), RunFailure>;

    /// Statement running every child in order.
    ///
    /// The default evaluates [`ChildrenInvoker`]; implementors may wrap it.
    fn children_invoker<'a>(&'a self, notifier: &'a mut Self::Notifier) -> impl Statement + 'a {
        ChildrenInvoker::new(self, notifier)
    }
}

/// Default children invocation: runs each child sequentially and stops at
/// the first aborted run.
pub struct ChildrenInvoker<'a, R: ParentRunner + ?Sized> {
    runner: &'a R,
    notifier: &'a mut R::Notifier,
}

impl<'a, R: ParentRunner + ?Sized> ChildrenInvoker<'a, R> {
    /// Creates an invoker over `runner`'s children.
    #[must_use]
    pub const fn new(runner: &'a R, notifier: &'a mut R::Notifier) -> Self {
        Self { runner, notifier }
    }
}

impl<R: ParentRunner + ?Sized> Statement for ChildrenInvoker<'_, R> {
    fn evaluate(&mut self) -> Result<(), RunFailure> {
        let runner = self.runner;
        for child in runner.children() {
            runner.run_child(child, &mut *self.notifier)?;
        }
        Ok(())
    }
}
