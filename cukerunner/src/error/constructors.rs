//! Convenience constructors for `CukeError`.

use camino::Utf8PathBuf;

use super::{BoxError, CukeError, RuntimeStage};

impl CukeError {
    /// Construct a missing-property error for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cukerunner::CukeError;
    /// let err = CukeError::missing_property("steps.package");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Mandatory property steps.package not set in cukerunner.properties."
    /// );
    /// ```
    #[must_use]
    pub fn missing_property(key: impl Into<String>) -> Self {
        Self::MissingProperty { key: key.into() }
    }

    /// Construct a runtime error for the given initialisation `stage`.
    #[must_use]
    pub fn runtime(stage: RuntimeStage, source: impl Into<BoxError>) -> Self {
        Self::Runtime {
            stage,
            source: source.into(),
        }
    }

    pub(crate) fn properties_file(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::PropertiesFile {
            path: path.into(),
            source,
        }
    }

    /// Returns the key named by a [`CukeError::MissingProperty`].
    #[must_use]
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Self::MissingProperty { key } => Some(key.as_str()),
            _ => None,
        }
    }

    /// Whether the loader treats this error as a soft failure.
    ///
    /// Soft failures are logged and leave the properties empty; they never
    /// abort runner construction on their own.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::PropertiesFile { .. }
                | Self::PropertiesNotFound { .. }
                | Self::MalformedProperties { .. }
        )
    }
}

impl From<clap::Error> for CukeError {
    fn from(e: clap::Error) -> Self {
        Self::OptionsParsing(Box::new(e))
    }
}
