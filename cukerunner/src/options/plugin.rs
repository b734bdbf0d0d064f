//! Report plugin declarations (`--plugin name[:target]`).

use std::fmt;
use std::str::FromStr;

use camino::Utf8PathBuf;
use thiserror::Error;

/// A report plugin requested from the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plugin {
    /// Human-readable console output.
    Pretty,
    /// HTML report written into a directory.
    Html(Utf8PathBuf),
    /// JSON report written to a file.
    Json(Utf8PathBuf),
    /// Any other plugin, passed through untouched.
    Other {
        /// Plugin name.
        name: String,
        /// Text after the first `:`, if any.
        target: Option<String>,
    },
}

/// Rejected plugin declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid plugin declaration '{0}': the plugin name is empty")]
pub struct PluginParseError(String);

impl FromStr for Plugin {
    type Err = PluginParseError;

    fn from_str(decl: &str) -> Result<Self, Self::Err> {
        let (name, target) = decl
            .split_once(':')
            .map_or((decl, None), |(head, tail)| (head, Some(tail)));
        if name.is_empty() {
            return Err(PluginParseError(decl.to_owned()));
        }
        Ok(match (name, target) {
            ("pretty", None) => Self::Pretty,
            ("html", Some(dir)) if !dir.is_empty() => Self::Html(Utf8PathBuf::from(dir)),
            ("json", Some(file)) if !file.is_empty() => Self::Json(Utf8PathBuf::from(file)),
            _ => Self::Other {
                name: name.to_owned(),
                target: target.map(str::to_owned),
            },
        })
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Html(dir) => write!(f, "html:{dir}"),
            Self::Json(file) => write!(f, "json:{file}"),
            Self::Other { name, target: None } => f.write_str(name),
            Self::Other {
                name,
                target: Some(target),
            } => write!(f, "{name}:{target}"),
        }
    }
}
