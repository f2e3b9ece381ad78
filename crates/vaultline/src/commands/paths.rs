use tracing::error;

use vaultline_core::GlobalConfigStore;
use vaultline_core::events;

pub(crate) fn handle_paths_command() -> Result<(), Box<dyn std::error::Error>> {
    let store = GlobalConfigStore::new();
    let paths = match store.resolve_paths() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("❌ Failed to resolve config paths: {}", e);
            error!(event = "cli.paths_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    println!("Config file: {}", paths.config_file.display());
    println!("Config dir:  {}", paths.config_dir.display());
    println!(
        "Exists:      {}",
        if store.exists() { "yes" } else { "no" }
    );

    Ok(())
}
