use std::path::{Path, PathBuf};

/// Folder under the home directory holding the global config.
pub const CONFIG_FOLDER_NAME: &str = ".vaultline";

/// Global config file name inside [`CONFIG_FOLDER_NAME`].
pub const CONFIG_FILE_NAME: &str = "vaultline-config.json";

/// Resolved locations of the global config.
///
/// Derived from the home directory on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// `<home>/.vaultline/vaultline-config.json`
    pub config_file: PathBuf,
    /// `<home>/.vaultline`
    pub config_dir: PathBuf,
}

impl ConfigPaths {
    pub fn under_home(home: &Path) -> Self {
        let config_dir = home.join(CONFIG_FOLDER_NAME);
        let config_file = config_dir.join(CONFIG_FILE_NAME);
        Self {
            config_file,
            config_dir,
        }
    }
}
