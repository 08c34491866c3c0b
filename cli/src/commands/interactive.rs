//! Interactive dashboard command

use crate::config::CliConfigLoader;
use crate::interactive::{run_dashboard, DashboardContext};
use anyhow::{bail, Context, Result};
use crossterm::tty::IsTty;
use datastage_core::{HttpBackend, MissionController};
use std::sync::Arc;
use tracing::debug;

/// Start the interactive mission-control dashboard
pub async fn interactive_command(
    config_loader: CliConfigLoader,
    user_id: Option<String>,
) -> Result<()> {
    if !std::io::stdout().is_tty() {
        bail!("The dashboard needs a terminal; pass a topic to run headlessly");
    }

    let backend_config = config_loader.load().await?;
    debug!("Using backend: {}", backend_config.base_url);

    let backend =
        Arc::new(HttpBackend::new(&backend_config).context("Failed to build backend client")?);
    let controller = Arc::new(MissionController::new(
        backend,
        backend_config.poll_interval(),
    ));

    let context = DashboardContext {
        controller: controller.clone(),
        backend_url: backend_config.base_url.clone(),
        user_id,
    };

    let outcome = run_dashboard(context).await;

    // The dashboard is gone; make sure no poll task outlives it
    controller.shutdown().await;

    outcome
}
