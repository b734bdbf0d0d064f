//! Helpers for safely mutating environment variables in tests.
//!
//! Every mutation runs under a global re-entrant mutex and returns an RAII
//! guard restoring the previous value on drop. [`PropertiesOverride`] also
//! keeps the lock for its whole lifetime, so tests pointing the runner at a
//! properties file cannot interleave.
//!
//! # Examples
//!
//! ```
//! use cukerunner_test_helpers::env;
//!
//! let _override = env::override_properties("/tmp/custom.properties");
//! assert_eq!(
//!     std::env::var(env::PROPERTIES_OVERRIDE_ENV).ok().as_deref(),
//!     Some("/tmp/custom.properties")
//! );
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::LazyLock;

/// Variable naming an alternate properties file.
pub const PROPERTIES_OVERRIDE_ENV: &str = "CUKERUNNER_PROPERTIES";

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

fn lock() -> ReentrantMutexGuard<'static, ()> {
    ENV_MUTEX.lock()
}

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping the guard restores the variable immediately"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = lock();
        match self.original.take() {
            // SAFETY: the global mutex serialises environment mutation.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: as above.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Sets `key` to `value` until the returned guard is dropped.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    let key = key.into();
    let _guard = lock();
    let original = env::var_os(&key);
    // SAFETY: the global mutex serialises environment mutation.
    unsafe { env::set_var(&key, value) };
    EnvVarGuard { key, original }
}

/// Removes `key` until the returned guard is dropped.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    let key = key.into();
    let _guard = lock();
    let original = env::var_os(&key);
    // SAFETY: the global mutex serialises environment mutation.
    unsafe { env::remove_var(&key) };
    EnvVarGuard { key, original }
}

/// Holds the environment lock while the override variable is mutated.
#[must_use = "dropping releases the lock and restores the override variable"]
pub struct PropertiesOverride {
    // Declared first so the variable is restored before the lock is released.
    _var: EnvVarGuard,
    _lock: ReentrantMutexGuard<'static, ()>,
}

/// Points [`PROPERTIES_OVERRIDE_ENV`] at `path` for the guard's lifetime.
pub fn override_properties(path: impl AsRef<OsStr>) -> PropertiesOverride {
    let held = lock();
    PropertiesOverride {
        _var: set_var(PROPERTIES_OVERRIDE_ENV, path),
        _lock: held,
    }
}

/// Clears [`PROPERTIES_OVERRIDE_ENV`] for the guard's lifetime.
pub fn clear_properties_override() -> PropertiesOverride {
    let held = lock();
    PropertiesOverride {
        _var: remove_var(PROPERTIES_OVERRIDE_ENV),
        _lock: held,
    }
}

#[cfg(test)]
mod tests;
