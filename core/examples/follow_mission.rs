//! Example demonstrating how to drive a research mission with the library
//!
//! Submits a topic to a locally running backend and prints every lifecycle
//! event until the mission reaches a terminal status:
//!
//! ```sh
//! cargo run --example follow_mission -- "specialty coffee market in Brazil"
//! ```

use datastage_core::{
    BackendConfig, HttpBackend, MissionController, MissionEvent, SessionStatus,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    datastage_core::init_tracing_with_debug(false);

    let topic = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "specialty coffee market in Brazil".to_string());

    let config = BackendConfig::default();
    let backend = Arc::new(HttpBackend::new(&config)?);
    let controller = MissionController::new(backend, config.poll_interval());
    let mut events = controller.subscribe();

    let handle = controller.submit(&topic).await?;
    println!("Submitted; session {}", handle.session_id);

    loop {
        match events.recv().await? {
            MissionEvent::StatusUpdated(status) => {
                println!("[{}] {}", status.status, status.last_step);
            }
            MissionEvent::ResultsReady(results) => {
                let overview = results.overview();
                println!(
                    "Results: {} urls, {} extracted, {} screenshots",
                    overview.urls_found, overview.contents_extracted, overview.screenshots_captured
                );
            }
            MissionEvent::Finished { status, .. } => {
                println!("Mission finished: {}", status);
                if status == SessionStatus::Error {
                    std::process::exit(1);
                }
                break;
            }
            MissionEvent::SubmissionFailed { message } => {
                eprintln!("Submission failed: {}", message);
                std::process::exit(1);
            }
            MissionEvent::Started { .. } => {}
        }
    }

    Ok(())
}
