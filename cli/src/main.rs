//! # datastage CLI
//!
//! Command-line interface for datastage - terminal mission control for an
//! autonomous multi-agent research backend.
//!
//! ## Usage
//!
//! - `datastage` - Start the interactive dashboard
//! - `datastage "research topic"` - Run a single mission headlessly
//! - `datastage health` - Probe backend connectivity
//!
//! The dashboard submits a topic, follows the mission's status polls, and
//! renders the results (search hits, extracted content, screenshots, and the
//! agent team) once the mission completes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{health_command, interactive_command, run_command};
use config::CliConfigLoader;

/// datastage - terminal mission control for autonomous market research
#[derive(Parser)]
#[command(name = "datastage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal mission control for autonomous market research")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL override
    #[arg(long)]
    backend_url: Option<String>,

    /// Status poll interval override, in milliseconds
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// User identifier forwarded with the research request
    #[arg(long)]
    user_id: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output mode (default is normal mode)
    #[arg(short = 'd', long = "debug")]
    debug_output: bool,

    /// The research topic (if provided, runs a single headless mission)
    topic: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe backend connectivity
    Health,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(backend_url) = &cli.backend_url {
        loader = loader.with_backend_url_override(backend_url.clone());
    }

    if let Some(interval) = cli.poll_interval_ms {
        loader = loader.with_poll_interval_override(interval);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose || cli.debug_output {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match (cli.topic, cli.command) {
        // If a topic is provided, run a single headless mission
        (Some(topic), None) => run_command(topic, config_loader, cli.user_id).await,
        // A topic combined with a subcommand is an error
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a topic and a subcommand");
            std::process::exit(1);
        }
        // Handle subcommands
        (None, Some(Commands::Health)) => health_command(config_loader).await,
        // Default to the interactive dashboard
        (None, None) => interactive_command(config_loader, cli.user_id).await,
    }
}
