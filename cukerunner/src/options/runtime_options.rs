//! Typed runtime options, parsed from or built alongside the options blob.

use camino::Utf8PathBuf;
use clap::Parser;

use super::{OptionsBlob, Plugin, RunnerSettings};
use crate::{CukeError, CukeResult};

/// Command-line grammar of the options blob.
#[derive(Debug, Parser)]
#[command(
    name = "cukerunner",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct OptionsArgs {
    /// Tag expressions selecting scenarios.
    #[arg(long = "tags", value_name = "EXPRESSION")]
    tags: Vec<String>,
    /// Step definition locations.
    #[arg(long = "glue", value_name = "LOCATION")]
    glue: Vec<String>,
    /// Report plugin declarations.
    #[arg(long = "plugin", value_name = "NAME[:TARGET]")]
    plugins: Vec<Plugin>,
    /// Feature files or directories.
    #[arg(value_name = "FEATURE")]
    features: Vec<String>,
}

/// Options handed to a [`crate::RuntimeFactory`].
///
/// Runtimes receive this value explicitly; the verbatim blob is kept for
/// runtimes that prefer to parse the text themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    tag_filters: Vec<String>,
    glue: Vec<String>,
    plugins: Vec<Plugin>,
    feature_paths: Vec<Utf8PathBuf>,
    blob: OptionsBlob,
}

impl RuntimeOptions {
    /// Parses an options blob.
    ///
    /// The blob is split into shell words first, so quoted values may
    /// contain spaces.
    ///
    /// # Errors
    ///
    /// Returns [`CukeError::OptionsSyntax`] for unbalanced quotes and
    /// [`CukeError::OptionsParsing`] for unknown flags or invalid plugins.
    ///
    /// # Examples
    ///
    /// ```
    /// use cukerunner::{Plugin, RuntimeOptions};
    ///
    /// let options = RuntimeOptions::parse("--tags '@web and not @slow' --glue steps features")?;
    /// assert_eq!(options.tag_filters(), ["@web and not @slow"]);
    /// assert!(options.plugins().is_empty());
    /// # Ok::<(), cukerunner::CukeError>(())
    /// ```
    pub fn parse(blob: &str) -> CukeResult<Self> {
        let words = shlex::split(blob).ok_or_else(|| CukeError::OptionsSyntax {
            blob: blob.to_owned(),
        })?;
        let args = OptionsArgs::try_parse_from(words)?;
        Ok(Self {
            tag_filters: args.tags,
            glue: args.glue,
            plugins: args.plugins,
            feature_paths: args.features.into_iter().map(Utf8PathBuf::from).collect(),
            blob: OptionsBlob::from(blob.to_owned()),
        })
    }

    /// Tag filter expressions, in declaration order.
    #[must_use]
    pub fn tag_filters(&self) -> &[String] {
        &self.tag_filters
    }

    /// Glue locations, in declaration order.
    #[must_use]
    pub fn glue(&self) -> &[String] {
        &self.glue
    }

    /// Report plugins, in declaration order.
    #[must_use]
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Feature paths to discover.
    #[must_use]
    pub fn feature_paths(&self) -> &[Utf8PathBuf] {
        &self.feature_paths
    }

    /// The verbatim blob these options describe.
    #[must_use]
    pub const fn blob(&self) -> &OptionsBlob {
        &self.blob
    }
}

impl TryFrom<&RunnerSettings> for RuntimeOptions {
    type Error = CukeError;

    /// Parses the settings' options blob, so the typed fields always agree
    /// with [`RuntimeOptions::blob`]. Values containing whitespace split into
    /// separate words exactly as a runtime reading the blob would see them.
    fn try_from(settings: &RunnerSettings) -> CukeResult<Self> {
        Self::parse(settings.options_blob().as_str())
    }
}
