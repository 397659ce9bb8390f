use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (defaults to ~/.config/registry-connect/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON bundle with translated messages
    #[arg(long, global = true)]
    l10n_bundle: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect a generic V2 container registry
    #[command(visible_alias = "c")]
    Connect {
        /// Registry URL; prompts interactively when omitted
        #[arg(long)]
        url: Option<String>,
    },
    /// List connected registries
    #[command(visible_alias = "ls")]
    List {},
    /// Disconnect a registry
    #[command(visible_alias = "rm")]
    Disconnect {
        /// Registry URL
        url: String,
    },
    /// Check whether a URL could be connected
    Check {
        /// Registry URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they do not interleave with prompts
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let session = cli::Session::open(cli.config, cli.l10n_bundle.as_deref())?;

    match cli.command {
        Commands::Connect { url } => cli::registry::handle_connect(session, url.as_deref()).await,
        Commands::List {} => cli::registry::handle_list(&session),
        Commands::Disconnect { url } => cli::registry::handle_disconnect(session, &url),
        Commands::Check { url } => cli::registry::handle_check(&session, &url),
    }
}
