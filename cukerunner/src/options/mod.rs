//! Composition of the options handed to the BDD runtime.
//!
//! [`RunnerSettings`] validates the four recognised properties;
//! [`OptionsBlob`] renders them in the runtime's command-line form and
//! [`RuntimeOptions`] carries the same information in typed form.

mod plugin;
mod runtime_options;

use std::fmt;

use crate::CukeResult;
use crate::properties::{Properties, keys};

pub use plugin::{Plugin, PluginParseError};
pub use runtime_options::RuntimeOptions;

/// Tag expression used when `tags` is not configured.
pub const DEFAULT_TAGS: &str = "@web";

/// Report directory used when `cucumber.report.directory` is not configured.
pub const DEFAULT_REPORT_DIRECTORY: &str = "target/report/cucumber";

/// Target of the fixed HTML plugin declaration.
pub const HTML_REPORT_TARGET: &str = "report";

/// File name of the JSON report inside the report directory.
pub const JSON_REPORT_FILE: &str = "cucumber.json";

/// Validated runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    tags: String,
    steps_package: String,
    report_directory: String,
    features_directory: String,
}

impl RunnerSettings {
    /// Validates `properties`, applying defaults to the optional keys.
    ///
    /// Lookups run in blob order (tags, steps package, report directory,
    /// features directory), so the first missing mandatory key in that order
    /// is the one reported.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CukeError::MissingProperty`] when `steps.package` or
    /// `features.directory` is absent or empty.
    pub fn from_properties(properties: &Properties) -> CukeResult<Self> {
        let tags = properties.get_or(keys::TAGS, DEFAULT_TAGS).to_owned();
        let steps_package = properties.require(keys::STEPS_PACKAGE)?.to_owned();
        let report_directory = properties
            .get_or(keys::REPORT_DIRECTORY, DEFAULT_REPORT_DIRECTORY)
            .to_owned();
        let features_directory = properties.require(keys::FEATURES_DIRECTORY)?.to_owned();
        Ok(Self {
            tags,
            steps_package,
            report_directory,
            features_directory,
        })
    }

    /// Tag filter expression.
    #[must_use]
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Glue location for step definitions.
    #[must_use]
    pub fn steps_package(&self) -> &str {
        &self.steps_package
    }

    /// Directory receiving the JSON report, verbatim.
    #[must_use]
    pub fn report_directory(&self) -> &str {
        &self.report_directory
    }

    /// Directory containing the feature files, verbatim.
    #[must_use]
    pub fn features_directory(&self) -> &str {
        &self.features_directory
    }

    /// Path of the JSON report, joined textually with `/`.
    #[must_use]
    pub fn json_report_path(&self) -> String {
        format!("{}/{JSON_REPORT_FILE}", self.report_directory)
    }

    /// Renders the options blob.
    ///
    /// # Examples
    ///
    /// ```
    /// use cukerunner::{Properties, RunnerSettings};
    ///
    /// let props: Properties = [
    ///     ("steps.package", "com.example.steps"),
    ///     ("features.directory", "src/test/resources/features"),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let settings = RunnerSettings::from_properties(&props)?;
    /// assert_eq!(
    ///     settings.options_blob().as_str(),
    ///     "--tags @web --glue com.example.steps --plugin pretty --plugin html:report \
    ///      --plugin json:target/report/cucumber/cucumber.json src/test/resources/features"
    /// );
    /// # Ok::<(), cukerunner::CukeError>(())
    /// ```
    #[must_use]
    pub fn options_blob(&self) -> OptionsBlob {
        OptionsBlob(format!(
            "--tags {} --glue {} --plugin pretty --plugin html:{HTML_REPORT_TARGET} --plugin json:{} {}",
            self.tags,
            self.steps_package,
            self.json_report_path(),
            self.features_directory,
        ))
    }
}

/// The runtime's command-line style options string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsBlob(String);

impl OptionsBlob {
    /// Borrow the blob text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the blob, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for OptionsBlob {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for OptionsBlob {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OptionsBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests;
