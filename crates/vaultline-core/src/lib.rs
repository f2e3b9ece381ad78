//! vaultline-core: Configuration resolution for the vaultline CLI
//!
//! This library resolves the two configuration layers the CLI works with:
//! a per-user global config under the home directory and a per-project
//! workspace config found by searching upward from the working directory.
//!
//! # Main Entry Points
//!
//! - [`config`] - Load and persist the global config
//! - [`workspace`] - Locate and load the workspace config
//! - [`home`] - Home directory resolution used by the global store

pub mod config;
pub mod errors;
pub mod events;
pub mod home;
pub mod logging;
pub mod workspace;

// Re-export commonly used types at crate root for convenience
pub use config::{ConfigError, ConfigPaths, GlobalConfig, GlobalConfigStore, UserCredentials};
pub use errors::VaultlineError;
pub use home::{FixedHome, HomeLocator, SystemHome};
pub use workspace::WorkspaceConfig;

// Re-export logging initialization
pub use logging::init_logging;
