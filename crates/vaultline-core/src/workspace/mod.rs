//! # Workspace Configuration
//!
//! A workspace is any directory tree whose root holds a `.vaultline.json`
//! marker. Commands run anywhere below that root resolve the nearest marker
//! by walking up from the working directory:
//!
//! ```text
//! ~/code/shop/.vaultline.json      <- found from ~/code/shop/api/src
//! ~/code/shop/api/src
//! ```
//!
//! Use [`store::exists_in_current_directory`] for a cheap check that does
//! not ascend, and [`locator::find_workspace_config`] or
//! [`store::load_from_current_directory`] for the full search.

pub mod locator;
pub mod store;
pub mod types;

/// Marker file identifying a workspace root.
pub const WORKSPACE_CONFIG_FILE_NAME: &str = ".vaultline.json";

pub use locator::{ancestors, find_marker_from, find_workspace_config};
pub use store::{
    exists_in, exists_in_current_directory, load_from_current_directory, load_from_path,
    load_nearest,
};
pub use types::WorkspaceConfig;
