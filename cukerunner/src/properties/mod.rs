//! Runner properties: loading, storage and checked lookups.
//!
//! Properties come from a `.properties` file located through a
//! [`PropertySource`]. Loading never fails hard: an unreadable file leaves
//! an empty store behind, and the first mandatory lookup then reports the
//! missing key.

mod helpers;
pub mod keys;
mod parser;
mod source;

use std::collections::BTreeMap;
use std::str::FromStr;

use camino::Utf8PathBuf;
use tracing::info;

use crate::{CukeError, CukeResult};

pub use source::{
    DEFAULT_PROPERTIES_FILE, PROPERTIES_OVERRIDE_ENV, PropertiesLocation, PropertySource,
    PropertySourceBuilder,
};

/// Where a [`Properties`] store came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PropertiesOrigin {
    /// Built in memory rather than read from disk.
    #[default]
    Inline,
    /// Read from the override location.
    Override(Utf8PathBuf),
    /// Read from the default file under a resource root.
    Resource(Utf8PathBuf),
    /// Loading failed; the store is empty.
    Unavailable {
        /// Rendered loading error.
        reason: String,
    },
}

/// String key/value store backing the runner configuration.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: BTreeMap<String, String>,
    origin: PropertiesOrigin,
}

impl Properties {
    pub(crate) const fn with_origin(
        entries: BTreeMap<String, String>,
        origin: PropertiesOrigin,
    ) -> Self {
        Self { entries, origin }
    }

    pub(crate) fn unavailable(err: &CukeError) -> Self {
        Self::with_origin(
            BTreeMap::new(),
            PropertiesOrigin::Unavailable {
                reason: err.to_string(),
            },
        )
    }

    /// Returns where these properties were loaded from.
    #[must_use]
    pub const fn origin(&self) -> &PropertiesOrigin {
        &self.origin
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw lookup without logging. Empty values are returned as stored.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Looks up a mandatory property.
    ///
    /// # Errors
    ///
    /// Returns [`CukeError::MissingProperty`] naming `key` when the property
    /// is absent or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cukerunner::Properties;
    ///
    /// let props: Properties = [("steps.package", "com.example.steps")]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(props.require("steps.package").ok(), Some("com.example.steps"));
    /// assert!(props.require("features.directory").is_err());
    /// ```
    pub fn require(&self, key: &str) -> CukeResult<&str> {
        let value = self
            .non_empty(key)
            .ok_or_else(|| CukeError::missing_property(key))?;
        info!(key, value, "Reading property");
        Ok(value)
    }

    /// Looks up an optional property, falling back to `default` when the
    /// property is absent or empty.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.non_empty(key).map_or_else(
            || {
                info!(key, default, "Property not set in cukerunner.properties, using default value");
                default
            },
            |value| {
                info!(key, value, "Reading property");
                value
            },
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::with_origin(entries, PropertiesOrigin::Inline)
    }
}

impl FromStr for Properties {
    type Err = CukeError;

    /// Parses `.properties` text held in memory.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        source::parse_at(Utf8PathBuf::from("<inline>"), data)
            .map(|entries| Self::with_origin(entries, PropertiesOrigin::Inline))
    }
}
