//! Upward search for the workspace marker file.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;
use crate::workspace::WORKSPACE_CONFIG_FILE_NAME;

/// Directories from `start` up to the filesystem root.
///
/// Yields `start` first and the root last. The sequence ends once a
/// directory has no parent, which only the root (or the empty path, for a
/// relative `start`) satisfies.
pub fn ancestors(start: &Path) -> impl Iterator<Item = &Path> {
    std::iter::successors(Some(start), |dir| dir.parent())
}

/// Find the nearest `marker` file at or above `start`.
///
/// Each call walks the filesystem again; nothing is cached.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no directory in the chain contains
/// `marker`.
pub fn find_marker_from(start: &Path, marker: &str) -> Result<PathBuf, ConfigError> {
    let found = ancestors(start)
        .map(|dir| dir.join(marker))
        .find(|candidate| candidate.exists());

    match found {
        Some(path) => {
            tracing::debug!(
                event = "core.workspace.marker_found",
                path = %path.display()
            );
            Ok(path)
        }
        None => {
            tracing::debug!(
                event = "core.workspace.marker_not_found",
                start = %start.display(),
                marker = marker
            );
            Err(ConfigError::NotFound {
                file_name: marker.to_string(),
            })
        }
    }
}

/// Find the nearest `.vaultline.json` at or above the working directory.
///
/// # Errors
///
/// - `ConfigError::Environment` if the working directory cannot be determined
/// - `ConfigError::NotFound` if no ancestor holds the marker
pub fn find_workspace_config() -> Result<PathBuf, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::Environment {
        subject: "current working directory",
        message: e.to_string(),
    })?;
    find_marker_from(&cwd, WORKSPACE_CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Unlikely to exist anywhere above the temp dir on a test machine.
    const TEST_MARKER: &str = ".vaultline-locator-test.json";

    #[test]
    fn test_ancestors_starts_at_start_and_ends_at_root() {
        let start = Path::new("/a/b/c");
        let chain: Vec<&Path> = ancestors(start).collect();
        assert_eq!(
            chain,
            vec![
                Path::new("/a/b/c"),
                Path::new("/a/b"),
                Path::new("/a"),
                Path::new("/"),
            ]
        );
    }

    #[test]
    fn test_ancestors_of_root_is_just_root() {
        let chain: Vec<&Path> = ancestors(Path::new("/")).collect();
        assert_eq!(chain, vec![Path::new("/")]);
        assert_eq!(Path::new("/").parent(), None);
    }

    #[test]
    fn test_finds_marker_in_start_directory() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join(TEST_MARKER);
        fs::write(&marker, "{}").unwrap();

        let found = find_marker_from(temp_dir.path(), TEST_MARKER).unwrap();
        assert_eq!(found, marker);
    }

    #[test]
    fn test_finds_marker_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();
        let marker = temp_dir.path().join("a").join(TEST_MARKER);
        fs::write(&marker, "{}").unwrap();

        let found = find_marker_from(&nested, TEST_MARKER).unwrap();
        assert_eq!(found, marker);
    }

    #[test]
    fn test_nearest_marker_wins() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("project").join("service");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(TEST_MARKER), "{}").unwrap();
        fs::write(temp_dir.path().join("project").join(TEST_MARKER), "{}").unwrap();
        fs::write(nested.join(TEST_MARKER), "{}").unwrap();

        let found = find_marker_from(&nested, TEST_MARKER).unwrap();
        assert_eq!(found, nested.join(TEST_MARKER));
    }

    #[test]
    fn test_missing_marker_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("x").join("y");
        fs::create_dir_all(&nested).unwrap();

        match find_marker_from(&nested, TEST_MARKER) {
            Err(ConfigError::NotFound { file_name }) => assert_eq!(file_name, TEST_MARKER),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_marker_created_between_calls_is_observed() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_marker_from(temp_dir.path(), TEST_MARKER).is_err());

        fs::write(temp_dir.path().join(TEST_MARKER), "{}").unwrap();
        assert!(find_marker_from(temp_dir.path(), TEST_MARKER).is_ok());
    }
}
