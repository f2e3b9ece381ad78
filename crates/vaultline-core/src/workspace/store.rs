//! Workspace config loading.
//!
//! Read-only: the marker file is created by the project `init` flow and is
//! never written or removed here.

use std::fs;
use std::path::Path;

use crate::config::ConfigError;
use crate::workspace::WORKSPACE_CONFIG_FILE_NAME;
use crate::workspace::locator::{find_marker_from, find_workspace_config};
use crate::workspace::types::WorkspaceConfig;

/// Load the workspace config nearest to the working directory.
///
/// # Errors
///
/// Propagates `Environment` or `NotFound` from the search, then `Storage`
/// or `Decode` from reading the located file.
pub fn load_from_current_directory() -> Result<WorkspaceConfig, ConfigError> {
    let path = find_workspace_config()?;
    load_from_path(&path)
}

/// Load the workspace config nearest to `start`.
pub fn load_nearest(start: &Path) -> Result<WorkspaceConfig, ConfigError> {
    let path = find_marker_from(start, WORKSPACE_CONFIG_FILE_NAME)?;
    load_from_path(&path)
}

/// Load a workspace config from an explicit path, without searching.
///
/// # Errors
///
/// - `ConfigError::Storage` if the file cannot be read
/// - `ConfigError::Decode` if the content is not a workspace config
pub fn load_from_path(path: &Path) -> Result<WorkspaceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        tracing::warn!(
            event = "core.workspace.read_failed",
            path = %path.display(),
            error = %e
        );
        ConfigError::Storage {
            operation: "read workspace config",
            path: path.display().to_string(),
            source: e,
        }
    })?;

    let config: WorkspaceConfig = serde_json::from_str(&content).map_err(|e| {
        tracing::warn!(
            event = "core.workspace.json_parse_failed",
            path = %path.display(),
            error = %e
        );
        ConfigError::Decode {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    tracing::debug!(
        event = "core.workspace.loaded",
        path = %path.display(),
        workspace_id = %config.workspace_id
    );

    Ok(config)
}

/// Whether `.vaultline.json` sits directly in the working directory.
///
/// Does not ascend: a marker in a parent directory does not count.
pub fn exists_in_current_directory() -> bool {
    exists_in(Path::new("."))
}

/// Whether `.vaultline.json` sits directly in `dir`.
///
/// Stat failures of any kind are reported as "absent".
pub fn exists_in(dir: &Path) -> bool {
    let candidate = dir.join(WORKSPACE_CONFIG_FILE_NAME);
    match fs::metadata(&candidate) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(
                event = "core.workspace.exists_check_failed",
                path = %candidate.display(),
                error = %e
            );
            false
        }
    }
}
