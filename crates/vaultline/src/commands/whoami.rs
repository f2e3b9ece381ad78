use clap::ArgMatches;
use tracing::{error, info};

use vaultline_core::GlobalConfigStore;
use vaultline_core::events;

pub(crate) fn handle_whoami_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.whoami_started", json_output = json_output);

    let store = GlobalConfigStore::new();
    let config = match store.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load global config: {}", e);
            error!(event = "cli.whoami_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else if config.is_logged_in() {
        println!("Logged in as {}", config.logged_in_user_email);
    } else {
        println!("Not logged in. Run 'vaultline login --email <EMAIL>' first.");
    }

    info!(
        event = "cli.whoami_completed",
        logged_in = config.is_logged_in()
    );

    Ok(())
}
