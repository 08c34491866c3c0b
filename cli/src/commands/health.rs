//! Backend connectivity probe command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use colored::Colorize;
use datastage_core::{HttpBackend, ResearchBackend};

/// Probe the backend's health endpoint and report the outcome
pub async fn health_command(config_loader: CliConfigLoader) -> Result<()> {
    let backend_config = config_loader.load().await?;
    let backend =
        HttpBackend::new(&backend_config).context("Failed to build backend client")?;

    match backend.health().await {
        Ok(()) => {
            println!(
                "{} Backend at {} is healthy",
                "✓".green().bold(),
                backend_config.base_url
            );
            Ok(())
        }
        Err(err) => {
            println!(
                "{} Backend at {} is not responding: {}",
                "✗".red().bold(),
                backend_config.base_url,
                err
            );
            Err(err.into())
        }
    }
}
