use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use vaultline_core::events;
use vaultline_core::workspace::{self, WORKSPACE_CONFIG_FILE_NAME};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceResponse {
    path: PathBuf,
    #[serde(flatten)]
    config: vaultline_core::WorkspaceConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_environment: Option<String>,
}

pub(crate) fn handle_workspace_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path_only = matches.get_flag("path");
    let json_output = matches.get_flag("json");
    let here_only = matches.get_flag("here");
    let branch = matches.get_one::<String>("branch");

    info!(
        event = "cli.workspace_started",
        here_only = here_only,
        json_output = json_output
    );

    let located = if here_only {
        if workspace::exists_in_current_directory() {
            Ok(std::env::current_dir()?.join(WORKSPACE_CONFIG_FILE_NAME))
        } else {
            eprintln!("❌ No {} in the current directory", WORKSPACE_CONFIG_FILE_NAME);
            error!(event = "cli.workspace_not_here");
            return Err(format!(
                "{} not found in current directory",
                WORKSPACE_CONFIG_FILE_NAME
            )
            .into());
        }
    } else {
        workspace::find_workspace_config()
    };

    let path = match located {
        Ok(path) => path,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!(
                "Tip: Run this command inside a project that has a {} file.",
                WORKSPACE_CONFIG_FILE_NAME
            );
            error!(event = "cli.workspace_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if path_only {
        println!("{}", path.display());
        info!(event = "cli.workspace_completed", path = %path.display());
        return Ok(());
    }

    let config = match workspace::load_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load workspace config: {}", e);
            error!(event = "cli.workspace_load_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let resolved_environment = branch
        .and_then(|b| config.environment_for_branch(b))
        .map(str::to_string);

    if json_output {
        let response = WorkspaceResponse {
            path: path.clone(),
            config,
            resolved_environment,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!(
            "Workspace:           {}",
            display_or_unset(&config.workspace_id)
        );
        println!("Config file:         {}", path.display());
        println!(
            "Default environment: {}",
            display_or_unset(&config.default_environment)
        );
        for (branch_name, environment) in &config.git_branch_to_environment_mapping {
            println!("  {} -> {}", branch_name, environment);
        }
        if let Some(branch) = branch {
            println!(
                "Environment for {}: {}",
                branch,
                resolved_environment.as_deref().unwrap_or("(none)")
            );
        }
    }

    info!(event = "cli.workspace_completed", path = %path.display());

    Ok(())
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() { "(unset)" } else { value }
}
