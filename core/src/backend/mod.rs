//! Research backend interface
//!
//! The backend runs the actual multi-agent research work; this client only
//! talks to its HTTP surface. The [`ResearchBackend`] trait is the seam the
//! mission controller is written against, so the poll loop can be exercised
//! with scripted backends in tests.

mod http;

pub use http::HttpBackend;

use crate::error::Result;
use crate::mission::types::{MissionResults, MissionStatus, StartedMission};
use async_trait::async_trait;

/// Client-side view of the research backend
#[async_trait]
pub trait ResearchBackend: Send + Sync {
    /// Pre-flight connectivity probe; `Ok` means the backend answered 2xx
    async fn health(&self) -> Result<()>;

    /// Create a research job for the given topic
    async fn start_research(
        &self,
        topic: &str,
        user_id: Option<&str>,
    ) -> Result<StartedMission>;

    /// Fetch the current status of a session
    async fn fetch_status(&self, session_id: &str) -> Result<MissionStatus>;

    /// Fetch the full results of a completed session
    async fn fetch_results(&self, session_id: &str) -> Result<MissionResults>;
}
