//! Single headless mission command
//!
//! Submits the topic, follows the poll loop with a spinner, and prints the
//! results report once the mission completes.

use crate::config::CliConfigLoader;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use datastage_core::{
    HttpBackend, MissionController, MissionEvent, MissionResults, SessionStatus,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// Execute a single research mission
pub async fn run_command(
    topic: String,
    config_loader: CliConfigLoader,
    user_id: Option<String>,
) -> Result<()> {
    let backend_config = config_loader.load().await?;
    info!("Using backend: {}", backend_config.base_url);

    let backend =
        Arc::new(HttpBackend::new(&backend_config).context("Failed to build backend client")?);
    let controller = MissionController::new(backend, backend_config.poll_interval());
    let mut events = controller.subscribe();

    let handle = controller
        .submit_as(&topic, user_id.as_deref())
        .await
        .context("Failed to start research mission")?;
    debug!("Submission attempt {}", handle.attempt_id);

    println!(
        "{} Research mission started (session {})",
        "▶".cyan().bold(),
        handle.session_id
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Waiting for the first status update...");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut results: Option<MissionResults> = None;
    let final_status = loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                spinner.finish_and_clear();
                controller.shutdown().await;
                println!(
                    "{} Mission cancelled; the backend keeps working server-side",
                    "⏹".yellow()
                );
                return Ok(());
            }
            event = events.recv() => match event {
                Ok(MissionEvent::StatusUpdated(status))
                    if status.session_id == handle.session_id =>
                {
                    let mut message = format!("{} - {}", status.status, status.last_step);
                    if let Some(summary) = &status.data_summary {
                        message.push_str(&format!(
                            " ({} urls, {} extracted, {} screenshots)",
                            summary.urls_found,
                            summary.contents_extracted,
                            summary.screenshots_captured
                        ));
                    }
                    spinner.set_message(message);
                }
                Ok(MissionEvent::ResultsReady(fetched))
                    if fetched.session_id == handle.session_id =>
                {
                    results = Some(fetched);
                }
                Ok(MissionEvent::Finished { session_id, status })
                    if session_id == handle.session_id =>
                {
                    break status;
                }
                Ok(_) => {}
                Err(RecvError::Lagged(missed)) => {
                    debug!("Event stream lagged by {} events", missed);
                }
                Err(RecvError::Closed) => bail!("Mission event stream closed unexpectedly"),
            }
        }
    };

    spinner.finish_and_clear();

    match final_status {
        SessionStatus::Completed => {
            println!("{} Mission completed", "✅".green());
            match &results {
                Some(results) => print!("{}", crate::output::render_report(results)),
                None => {
                    // Completed with unreadable results is a degraded state,
                    // not a crash
                    warn!("Mission completed but the results could not be fetched");
                    println!(
                        "{} The results could not be retrieved from the backend",
                        "⚠".yellow().bold()
                    );
                }
            }
            Ok(())
        }
        status => {
            println!(
                "{} Mission ended with status: {}",
                "❌".red().bold(),
                status
            );
            bail!("Research mission failed")
        }
    }
}
