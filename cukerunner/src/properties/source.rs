//! Locating and loading the runner's properties file.
//!
//! The override location wins when present: either a path set on the
//! builder or the value of the override environment variable. Otherwise the
//! default file name is looked up under each resource root in turn.

use std::collections::BTreeMap;
use std::env;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

use super::helpers::{is_file, read_text};
use super::parser::parse_properties;
use super::{Properties, PropertiesOrigin};
use crate::{CukeError, CukeResult};

/// File name looked up under the resource roots.
pub const DEFAULT_PROPERTIES_FILE: &str = "cukerunner.properties";

/// Environment variable naming an alternate properties file.
pub const PROPERTIES_OVERRIDE_ENV: &str = "CUKERUNNER_PROPERTIES";

const DEFAULT_RESOURCE_ROOTS: [&str; 2] = ["tests/resources", "."];

/// Resolved location of the properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertiesLocation {
    /// Explicit override path.
    Override(Utf8PathBuf),
    /// Default file found under a resource root.
    Resource(Utf8PathBuf),
    /// No resource root contains the default file.
    Missing {
        /// File name searched for.
        file_name: String,
        /// Roots inspected, in order.
        searched: Vec<Utf8PathBuf>,
    },
}

/// Describes where runner properties are read from.
///
/// # Examples
///
/// ```rust,no_run
/// use cukerunner::PropertySource;
///
/// let source = PropertySource::builder()
///     .resource_roots(["src/test/resources"])
///     .build();
/// let props = source.load();
/// println!("loaded {} properties", props.len());
/// ```
#[derive(Debug, Clone)]
pub struct PropertySource {
    env_var: Option<String>,
    override_path: Option<Utf8PathBuf>,
    file_name: String,
    resource_roots: Vec<Utf8PathBuf>,
}

impl Default for PropertySource {
    fn default() -> Self {
        PropertySourceBuilder::new().build()
    }
}

impl PropertySource {
    /// Creates a builder initialised with the default locations.
    #[must_use]
    pub fn builder() -> PropertySourceBuilder {
        PropertySourceBuilder::new()
    }

    /// Source that reads exactly `path`.
    #[must_use]
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        PropertySourceBuilder::new().override_path(path).build()
    }

    fn env_override(&self) -> Option<Utf8PathBuf> {
        let name = self.env_var.as_deref()?;
        let raw = env::var_os(name)?;
        Some(Utf8PathBuf::from(raw.to_string_lossy().into_owned()))
    }

    /// Resolves the file that [`PropertySource::load`] would read.
    #[must_use]
    pub fn location(&self) -> PropertiesLocation {
        if let Some(path) = self.override_path.clone().or_else(|| self.env_override()) {
            return PropertiesLocation::Override(path);
        }
        self.resource_roots
            .iter()
            .map(|root| root.join(&self.file_name))
            .find(|candidate| is_file(candidate))
            .map_or_else(
                || PropertiesLocation::Missing {
                    file_name: self.file_name.clone(),
                    searched: self.resource_roots.clone(),
                },
                PropertiesLocation::Resource,
            )
    }

    /// Loads the properties, reporting every failure.
    ///
    /// # Errors
    ///
    /// Returns [`CukeError::PropertiesFile`], [`CukeError::PropertiesNotFound`]
    /// or [`CukeError::MalformedProperties`] when the file cannot be used.
    pub fn try_load(&self) -> CukeResult<Properties> {
        match self.location() {
            PropertiesLocation::Override(path) => {
                info!(path = %path, "Loading cukerunner properties from override location");
                let entries = read_entries(&path)?;
                Ok(Properties::with_origin(
                    entries,
                    PropertiesOrigin::Override(path),
                ))
            }
            PropertiesLocation::Resource(path) => {
                info!(path = %path, "Loading cukerunner properties from resource root");
                let entries = read_entries(&path)?;
                Ok(Properties::with_origin(
                    entries,
                    PropertiesOrigin::Resource(path),
                ))
            }
            PropertiesLocation::Missing {
                file_name,
                searched,
            } => Err(CukeError::PropertiesNotFound {
                file_name,
                searched,
            }),
        }
    }

    /// Loads the properties, downgrading failures to a warning.
    ///
    /// A file that cannot be found, read or decoded yields an empty store
    /// whose origin is [`PropertiesOrigin::Unavailable`]. Mandatory lookups
    /// against that store then fail with [`CukeError::MissingProperty`].
    #[must_use]
    pub fn load(&self) -> Properties {
        self.try_load().unwrap_or_else(|err| {
            warn!(error = %err, "Error loading cukerunner settings");
            Properties::unavailable(&err)
        })
    }
}

fn read_entries(path: &Utf8Path) -> CukeResult<BTreeMap<String, String>> {
    let data = read_text(path).map_err(|e| CukeError::properties_file(path, e))?;
    parse_at(path, &data)
}

pub(super) fn parse_at(
    path: impl Into<Utf8PathBuf>,
    data: &str,
) -> CukeResult<BTreeMap<String, String>> {
    parse_properties(data).map_err(|failure| CukeError::MalformedProperties {
        path: path.into(),
        line: failure.line,
        message: failure.message,
    })
}

/// Builder for [`PropertySource`].
#[derive(Debug, Clone)]
pub struct PropertySourceBuilder {
    env_var: Option<String>,
    override_path: Option<Utf8PathBuf>,
    file_name: String,
    resource_roots: Vec<Utf8PathBuf>,
}

impl Default for PropertySourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySourceBuilder {
    /// Creates a builder consulting [`PROPERTIES_OVERRIDE_ENV`] and looking
    /// for [`DEFAULT_PROPERTIES_FILE`] under `tests/resources` then `.`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            env_var: Some(String::from(PROPERTIES_OVERRIDE_ENV)),
            override_path: None,
            file_name: String::from(DEFAULT_PROPERTIES_FILE),
            resource_roots: DEFAULT_RESOURCE_ROOTS
                .iter()
                .map(|root| Utf8PathBuf::from(*root))
                .collect(),
        }
    }

    /// Sets the environment variable consulted for an override path.
    #[must_use]
    pub fn env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = Some(env_var.into());
        self
    }

    /// Stops consulting any environment variable.
    #[must_use]
    pub fn without_env_var(mut self) -> Self {
        self.env_var = None;
        self
    }

    /// Reads `path` instead of searching, taking precedence over the
    /// environment.
    #[must_use]
    pub fn override_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    /// Overrides the file name searched under the resource roots.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Replaces the resource roots searched for the default file.
    #[must_use]
    pub fn resource_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        self.resource_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Finalises the builder.
    #[must_use]
    pub fn build(self) -> PropertySource {
        PropertySource {
            env_var: self.env_var,
            override_path: self.override_path,
            file_name: self.file_name,
            resource_roots: self.resource_roots,
        }
    }
}
