//! Primary error enum for runner configuration and initialisation.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Boxed error returned by runtime collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Phase of runtime initialisation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeStage {
    /// Constructing the runtime from the composed options.
    Create,
    /// Enumerating feature units.
    Discover,
    /// Wrapping a feature unit in its runner.
    Wrap,
}

impl fmt::Display for RuntimeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Discover => "discover",
            Self::Wrap => "wrap",
        })
    }
}

/// Errors that can occur while configuring the runner.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CukeError {
    /// A mandatory property was absent or empty.
    #[error("Mandatory property {key} not set in cukerunner.properties.")]
    MissingProperty {
        /// Name of the missing key.
        key: String,
    },

    /// The properties file could not be read.
    #[error("Error loading settings from '{path}': {source}")]
    PropertiesFile {
        /// Location that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No resource root contained the default properties file.
    #[error("properties file '{file_name}' not found in {}", display_roots(.searched))]
    PropertiesNotFound {
        /// File name that was searched for.
        file_name: String,
        /// Resource roots inspected, in order.
        searched: Vec<Utf8PathBuf>,
    },

    /// The properties file contained an invalid escape sequence.
    #[error("malformed properties in '{path}' at line {line}: {message}")]
    MalformedProperties {
        /// Location of the offending file.
        path: Utf8PathBuf,
        /// One-based line where the offending entry starts.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// The options blob could not be split into words.
    #[error("unbalanced quoting in runtime options: {blob}")]
    OptionsSyntax {
        /// The offending blob.
        blob: String,
    },

    /// The options blob contained unknown or malformed flags.
    #[error("Failed to parse runtime options: {0}")]
    OptionsParsing(#[from] Box<clap::Error>),

    /// The BDD runtime failed while the runner was being initialised.
    #[error("BDD runtime failed during {stage}: {source}")]
    Runtime {
        /// Initialisation phase that failed.
        stage: RuntimeStage,
        /// Error reported by the runtime.
        #[source]
        source: BoxError,
    },
}

fn display_roots(roots: &[Utf8PathBuf]) -> String {
    if roots.is_empty() {
        return String::from("no resource roots");
    }
    roots
        .iter()
        .map(|root| format!("'{root}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A feature run that aborted instead of reporting through the notifier.
///
/// Ordinary scenario failures are the notifier's business; this error is
/// reserved for children that could not complete at all.
#[derive(Debug, Error)]
#[error("feature run aborted: {source}")]
pub struct RunFailure {
    #[source]
    source: BoxError,
}

impl RunFailure {
    /// Wraps the error that aborted a child run.
    #[must_use]
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the underlying error.
    #[must_use]
    pub fn into_source(self) -> BoxError {
        self.source
    }
}
