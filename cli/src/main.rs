mod commands;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelman_core::{Config, HttpGateway};

#[derive(Parser)]
#[command(name = "modelman")]
#[command(author, version, about = "Browse and pull models on a model-serving backend", long_about = None)]
struct Cli {
    /// Backend API base URL (overrides the configured value)
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List models available on the backend
    #[command(alias = "ls")]
    List,

    /// Pull a model onto the backend
    Pull {
        /// Model identifier (e.g., "llama3:8b")
        model: String,
    },

    /// Open interactive TUI
    Ui,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stderr keeps diagnostics out of the TUI screen
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let base_url = cli.backend.unwrap_or(config.backend.base_url);
    let gateway = HttpGateway::new(base_url);

    match cli.command {
        Some(Commands::List) => {
            commands::list::execute(&gateway).await?;
        }
        Some(Commands::Pull { model }) => {
            commands::pull::execute(&gateway, &model).await?;
        }
        Some(Commands::Ui) | None => {
            tui::run(gateway).await?;
        }
    }

    Ok(())
}
