use clap::ArgMatches;
use tracing::error;

use vaultline_core::events;

mod backend;
mod completions;
mod login;
mod paths;
mod whoami;
mod workspace;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("login", sub_matches)) => login::handle_login_command(sub_matches),
        Some(("whoami", sub_matches)) => whoami::handle_whoami_command(sub_matches),
        Some(("backend", sub_matches)) => backend::handle_backend_command(sub_matches),
        Some(("workspace", sub_matches)) => workspace::handle_workspace_command(sub_matches),
        Some(("paths", _)) => paths::handle_paths_command(),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
