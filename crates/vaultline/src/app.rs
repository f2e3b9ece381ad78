use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("vaultline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and update vaultline global and workspace configuration")
        .long_about("vaultline keeps a per-user global config in ~/.vaultline/vaultline-config.json and discovers per-project settings from the nearest .vaultline.json in the current directory or any parent directory.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("login")
                .about("Record the logged-in user in the global config")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .help("Email of the user that logged in")
                        .required(true)
                )
        )
        .subcommand(
            Command::new("whoami")
                .about("Show the logged-in user from the global config")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("backend")
                .about("Show or set the vault backend type")
                .arg(
                    Arg::new("type")
                        .help("Backend type to store (omit to show the current one)")
                        .index(1)
                )
        )
        .subcommand(
            Command::new("workspace")
                .about("Locate and show the workspace config for the current directory")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help("Print only the path of the workspace config file")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("path")
                )
                .arg(
                    Arg::new("here")
                        .long("here")
                        .help("Only look in the current directory, without searching parent directories")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("branch")
                        .long("branch")
                        .short('b')
                        .help("Resolve the environment mapped to this git branch")
                        .conflicts_with("path")
                )
        )
        .subcommand(
            Command::new("paths")
                .about("Print the resolved global config file and directory")
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
