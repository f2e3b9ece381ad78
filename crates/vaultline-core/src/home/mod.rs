//! Home directory resolution.
//!
//! [`HomeLocator`] is the seam the global config store is built on. The
//! CLI uses [`SystemHome`]; tests and embedding callers pin a directory with
//! [`FixedHome`].

use std::path::PathBuf;

use crate::config::ConfigError;

/// Resolves the invoking user's home directory.
pub trait HomeLocator {
    fn home_dir(&self) -> Result<PathBuf, ConfigError>;
}

/// Home directory as reported by the host (`$HOME` on Unix, the profile
/// folder on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeLocator for SystemHome {
    fn home_dir(&self) -> Result<PathBuf, ConfigError> {
        dirs::home_dir().ok_or_else(|| ConfigError::Environment {
            subject: "home directory",
            message: "the host environment did not report one".to_string(),
        })
    }
}

/// A home directory fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHome(PathBuf);

impl FixedHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl HomeLocator for FixedHome {
    fn home_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.0.clone())
    }
}

impl<T: HomeLocator + ?Sized> HomeLocator for &T {
    fn home_dir(&self) -> Result<PathBuf, ConfigError> {
        (**self).home_dir()
    }
}
