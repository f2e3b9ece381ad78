//! # Global Configuration
//!
//! Per-user settings stored in `~/.vaultline/vaultline-config.json`:
//!
//! ```json
//! {
//!   "loggedInUserEmail": "dev@example.com",
//!   "vaultBackendType": "file"
//! }
//! ```
//!
//! A missing file means "never configured" and loads as the default record.
//! A file that exists but cannot be read or parsed is an error, so callers
//! can tell an unconfigured client from a corrupt one.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vaultline_core::config::{GlobalConfigStore, UserCredentials};
//!
//! fn example() -> Result<(), vaultline_core::config::ConfigError> {
//!     let store = GlobalConfigStore::new();
//!     store.initialize_from_credentials(&UserCredentials::new("dev@example.com"))?;
//!     let config = store.load()?;
//!     assert!(config.is_logged_in());
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod global;
pub mod paths;
pub mod types;

pub use errors::ConfigError;
pub use global::GlobalConfigStore;
pub use paths::{CONFIG_FILE_NAME, CONFIG_FOLDER_NAME, ConfigPaths};
pub use types::{GlobalConfig, UserCredentials};
