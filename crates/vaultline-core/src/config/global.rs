//! Global config persistence.
//!
//! Reads and writes `~/.vaultline/vaultline-config.json`. The store is an
//! explicit value built over a [`HomeLocator`]; nothing is cached between
//! calls, so every operation sees the file as it is on disk right now.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::errors::ConfigError;
use crate::config::paths::ConfigPaths;
use crate::config::types::{GlobalConfig, UserCredentials};
use crate::home::{HomeLocator, SystemHome};

/// Store for the per-user global config.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfigStore<H = SystemHome> {
    home: H,
}

impl GlobalConfigStore<SystemHome> {
    /// Store rooted at the invoking user's home directory.
    pub fn new() -> Self {
        Self { home: SystemHome }
    }
}

impl<H: HomeLocator> GlobalConfigStore<H> {
    pub fn with_home(home: H) -> Self {
        Self { home }
    }

    /// Resolve the config file and directory paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Environment` if the home directory cannot be
    /// determined.
    pub fn resolve_paths(&self) -> Result<ConfigPaths, ConfigError> {
        let home = self.home.home_dir()?;
        Ok(ConfigPaths::under_home(&home))
    }

    /// Whether the global config file exists.
    pub fn exists(&self) -> bool {
        match self.resolve_paths() {
            Ok(paths) => paths.config_file.exists(),
            Err(e) => {
                tracing::debug!(
                    event = "core.config.global.path_resolve_failed",
                    error = %e
                );
                false
            }
        }
    }

    /// Load the global config.
    ///
    /// A missing file is the normal "never configured" state and loads as
    /// `GlobalConfig::default()`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Environment` if the home directory cannot be determined
    /// - `ConfigError::Storage` if the file exists but cannot be read
    /// - `ConfigError::Decode` if the file is not a valid config record
    pub fn load(&self) -> Result<GlobalConfig, ConfigError> {
        let paths = self.resolve_paths()?;
        read_config_file(&paths.config_file)
    }

    /// Replace the global config file with `config`.
    ///
    /// Creates the config directory when absent. The new contents are
    /// written to a sibling temp file and renamed over the target, so
    /// readers never observe a half-written file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Environment` if the home directory cannot be
    /// determined, otherwise `ConfigError::Storage` naming the failed step.
    pub fn save(&self, config: &GlobalConfig) -> Result<(), ConfigError> {
        let paths = self.resolve_paths()?;

        let json = serde_json::to_string_pretty(config).map_err(|e| {
            tracing::error!(
                event = "core.config.global.serialization_failed",
                error = %e
            );
            ConfigError::Storage {
                operation: "serialize config",
                path: paths.config_file.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            }
        })?;

        ensure_config_dir(&paths.config_dir)?;
        write_config_file(&paths, &json)?;

        tracing::info!(
            event = "core.config.global.saved",
            path = %paths.config_file.display()
        );

        Ok(())
    }

    /// Read-modify-write helper for partial changes.
    ///
    /// Returns the record that was saved.
    pub fn update<F>(&self, apply: F) -> Result<GlobalConfig, ConfigError>
    where
        F: FnOnce(&mut GlobalConfig),
    {
        let mut config = self.load()?;
        apply(&mut config);
        self.save(&config)?;
        Ok(config)
    }

    /// Record a successful login.
    ///
    /// Overwrites the logged-in email and keeps whatever vault backend was
    /// already configured.
    pub fn initialize_from_credentials(
        &self,
        credentials: &UserCredentials,
    ) -> Result<(), ConfigError> {
        tracing::info!(event = "core.config.global.initialize_started");

        let paths = self.resolve_paths()?;
        ensure_config_dir(&paths.config_dir)?;

        let existing = read_config_file(&paths.config_file)?;
        let config = GlobalConfig {
            logged_in_user_email: credentials.email.clone(),
            vault_backend_type: existing.vault_backend_type,
        };

        self.save(&config)?;

        tracing::info!(
            event = "core.config.global.initialize_completed",
            vault_backend = config.vault_backend().unwrap_or("default")
        );

        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<GlobalConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                event = "core.config.global.not_found",
                path = %path.display(),
                "No global config yet, using defaults"
            );
            return Ok(GlobalConfig::default());
        }
        Err(e) => {
            tracing::error!(
                event = "core.config.global.read_failed",
                path = %path.display(),
                error = %e
            );
            return Err(ConfigError::Storage {
                operation: "read config file",
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        tracing::error!(
            event = "core.config.global.json_parse_failed",
            path = %path.display(),
            error = %e
        );
        ConfigError::Decode {
            path: path.display().to_string(),
            source: e,
        }
    })
}

/// Create the config directory if it is missing.
///
/// `create_dir_all` succeeds when the directory already exists, so two
/// processes creating it at once both succeed.
fn ensure_config_dir(dir: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(dir).map_err(|e| ConfigError::Storage {
        operation: "create config directory",
        path: dir.display().to_string(),
        source: e,
    })
}

fn write_config_file(paths: &ConfigPaths, json: &str) -> Result<(), ConfigError> {
    // Unique temp file per save, so overlapping saves never share one
    let mut temp_file = NamedTempFile::new_in(&paths.config_dir).map_err(|e| {
        ConfigError::Storage {
            operation: "create temp config file",
            path: paths.config_dir.display().to_string(),
            source: e,
        }
    })?;

    temp_file
        .write_all(json.as_bytes())
        .map_err(|e| ConfigError::Storage {
            operation: "write config file",
            path: temp_file.path().display().to_string(),
            source: e,
        })?;

    // Atomically persist temp file to destination; on failure the temp file
    // is removed when the returned handle drops
    temp_file
        .persist(&paths.config_file)
        .map_err(|e| ConfigError::Storage {
            operation: "replace config file",
            path: paths.config_file.display().to_string(),
            source: e.error,
        })?;

    Ok(())
}
