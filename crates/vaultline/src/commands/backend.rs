use clap::ArgMatches;
use tracing::{error, info};

use vaultline_core::GlobalConfigStore;
use vaultline_core::events;

pub(crate) fn handle_backend_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = GlobalConfigStore::new();

    let Some(backend_type) = matches.get_one::<String>("type") else {
        return show_backend(&store);
    };

    let backend_type = backend_type.trim();
    if backend_type.is_empty() {
        eprintln!("❌ Backend type must not be empty");
        return Err("Empty backend type".into());
    }

    info!(event = "cli.backend_set_started", backend = backend_type);

    match store.update(|config| config.vault_backend_type = backend_type.to_string()) {
        Ok(config) => {
            println!("✅ Vault backend set to {}", config.vault_backend_type);
            info!(event = "cli.backend_set_completed", backend = backend_type);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to update global config: {}", e);
            error!(event = "cli.backend_set_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn show_backend(store: &GlobalConfigStore) -> Result<(), Box<dyn std::error::Error>> {
    match store.load() {
        Ok(config) => {
            println!(
                "Vault backend: {}",
                config.vault_backend().unwrap_or("default")
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to load global config: {}", e);
            error!(event = "cli.backend_show_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
