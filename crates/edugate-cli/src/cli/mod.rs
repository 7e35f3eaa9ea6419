//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use edugate_core::config::{self, paths};
use edugate_core::dialog::Category;
use edugate_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "edugate")]
#[command(version)]
#[command(about = "School portal login client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in without the TUI (password and CAPTCHA are read from stdin)
    Login {
        /// Log in as a student with this student ID
        #[arg(long, value_name = "ID", conflicts_with = "faculty")]
        student: Option<String>,
        /// Log in as faculty with this email
        #[arg(long, value_name = "EMAIL")]
        faculty: Option<String>,
    },

    /// Inspect or clear the stored session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// List the backend endpoints for the configured base URL
    Endpoints,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum SessionCommands {
    /// Print the stored student and faculty records
    Show,
    /// Remove the stored records
    Clear,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the backend base URL in the config file
    SetBaseUrl {
        /// Base URL, e.g. http://127.0.0.1:5000
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging failures only warn.
    let _log_guard = match logging::init(&paths::logs_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // default to the interactive portal
    let Some(command) = cli.command else {
        return commands::portal::run(&config);
    };

    match command {
        Commands::Login { student, faculty } => match (student, faculty) {
            (Some(id), None) => commands::login::run(&config, Category::Student, &id).await,
            (None, Some(email)) => commands::login::run(&config, Category::Faculty, &email).await,
            _ => anyhow::bail!("Please specify a login type: --student <ID> or --faculty <EMAIL>"),
        },

        Commands::Session { command } => match command {
            SessionCommands::Show => commands::session::show(&config),
            SessionCommands::Clear => commands::session::clear(&config),
        },

        Commands::Endpoints => {
            commands::endpoints::list(&config);
            Ok(())
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetBaseUrl { url } => commands::config::set_base_url(&url),
        },
    }
}
