//! # datastage-core
//!
//! Core library for datastage - a terminal mission-control client for an
//! autonomous multi-agent market-research backend.
//!
//! This library provides the building blocks for submitting research
//! missions, polling their status until a terminal state, and retrieving the
//! completed results: the backend HTTP client, the mission data model, and
//! the polling controller that drives a session from submission to results.

// Core modules
pub mod backend;
pub mod config;
pub mod error;
pub mod mission;

// Re-export commonly used types
pub use backend::{HttpBackend, ResearchBackend};
pub use config::BackendConfig;
pub use error::{BackendError, ConfigError, Error, Result};
pub use mission::{
    AgentKind, AgentProfile, MissionController, MissionEvent, MissionResults, MissionStatus,
    SessionHandle, SessionStatus,
};

/// Current version of the datastage-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
