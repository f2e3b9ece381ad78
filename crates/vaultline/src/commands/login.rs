use clap::ArgMatches;
use tracing::{error, info};

use vaultline_core::events;
use vaultline_core::{GlobalConfigStore, UserCredentials};

pub(crate) fn handle_login_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = matches
        .get_one::<String>("email")
        .ok_or("Email argument is required")?;

    if !is_plausible_email(email) {
        eprintln!("❌ Invalid email: '{}'", email);
        error!(event = "cli.login_invalid_email");
        return Err("Invalid email".into());
    }

    info!(event = "cli.login_started");

    let store = GlobalConfigStore::new();
    match store.initialize_from_credentials(&UserCredentials::new(email.as_str())) {
        Ok(()) => {
            println!("✅ Logged in as {}", email);
            info!(event = "cli.login_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to update global config: {}", e);
            error!(event = "cli.login_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Cheap shape check; the auth service is the real authority on addresses.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
