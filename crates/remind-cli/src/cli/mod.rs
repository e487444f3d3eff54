//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use remind_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "remind")]
#[command(version)]
#[command(about = "Terminal client for shared reminder groups")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the reminders API (overrides REMIND_API_URL and config)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show who is logged in
    Whoami,
    /// Forget the stored session
    Logout,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Effect handlers are spawned onto this runtime while the UI loop owns
    // the main thread.
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let _guard = rt.enter();
    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;

    let Some(command) = command else {
        let config = config::Config::load().context("load config")?;
        return commands::interactive::run(&config, api_url.as_deref());
    };

    match command {
        Commands::Whoami => {
            commands::session::whoami();
            Ok(())
        }
        Commands::Logout => commands::session::logout(),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
