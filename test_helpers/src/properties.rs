//! Throwaway properties files for loader and runner tests.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// File name the runner looks for under its resource roots.
pub const DEFAULT_FILE_NAME: &str = "cukerunner.properties";

/// Renders `key=value` lines in the given order.
///
/// # Examples
///
/// ```
/// use cukerunner_test_helpers::properties::render;
///
/// assert_eq!(render([("tags", "@web"), ("steps.package", "s")]), "tags=@web\nsteps.package=s\n");
/// ```
pub fn render<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect()
}

/// A temporary resource root holding one properties file.
///
/// The directory is removed when the fixture is dropped.
pub struct PropertiesFixture {
    dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl PropertiesFixture {
    /// Writes `contents` to `cukerunner.properties` in a fresh directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory or file cannot be created.
    pub fn new(contents: &str) -> Result<Self> {
        Self::with_name(DEFAULT_FILE_NAME, contents)
    }

    /// Writes `contents` to `name` in a fresh directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory or file cannot be created.
    pub fn with_name(name: &str, contents: &str) -> Result<Self> {
        let fixture = Self::empty(name)?;
        std::fs::write(&fixture.path, contents)
            .with_context(|| format!("write {}", fixture.path))?;
        Ok(fixture)
    }

    /// A fresh directory where `cukerunner.properties` does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn missing() -> Result<Self> {
        Self::empty(DEFAULT_FILE_NAME)
    }

    fn empty(name: &str) -> Result<Self> {
        let dir = TempDir::new().context("create temporary resource root")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|p| anyhow!("temporary directory is not valid UTF-8: {}", p.display()))?;
        let path = root.join(name);
        Ok(Self { dir, root, path })
    }

    /// Directory containing the file.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of the properties file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Underlying temporary directory.
    #[must_use]
    pub const fn dir(&self) -> &TempDir {
        &self.dir
    }
}
