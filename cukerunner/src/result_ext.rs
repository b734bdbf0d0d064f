//! Extensions for mapping runtime errors to `CukeResult` concisely.
//!
//! Runtime collaborators report failures as boxed errors. These helpers
//! replace repetitive `.map_err(|e| CukeError::runtime(stage, e))` chains
//! during runner initialisation.
//!
//! # Examples
//!
//! ```
//! use cukerunner::{CukeError, CukeResult, RuntimeResultExt, RuntimeStage};
//!
//! fn discover() -> CukeResult<Vec<String>> {
//!     let raw: Result<Vec<String>, std::io::Error> = Ok(vec![]);
//!     raw.at_stage(RuntimeStage::Discover)
//! }
//! # assert!(discover().is_ok());
//! ```

use crate::{BoxError, CukeError, CukeResult, RuntimeStage};

/// Maps any `Result<T, E>` whose error converts into [`BoxError`] into a
/// [`CukeResult<T>`] tagged with the failing initialisation stage.
pub trait RuntimeResultExt<T> {
    /// Convert the error into [`CukeError::Runtime`] for `stage`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`CukeError::Runtime`].
    fn at_stage(self, stage: RuntimeStage) -> CukeResult<T>;
}

impl<T, E> RuntimeResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn at_stage(self, stage: RuntimeStage) -> CukeResult<T> {
        self.map_err(|e| CukeError::runtime(stage, e))
    }
}
