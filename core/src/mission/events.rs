//! Mission lifecycle events published by the controller
//!
//! Subscribers (dashboard components, the headless follower) receive these
//! over a broadcast channel. Every event names the session it belongs to so
//! late events from a superseded session can be discarded.

use super::types::{MissionResults, MissionStatus, SessionStatus};

/// Events emitted over the controller's broadcast channel
#[derive(Debug, Clone)]
pub enum MissionEvent {
    /// A new mission was accepted by the backend
    Started { session_id: String, topic: String },

    /// A status poll succeeded; this is a full replacement of the prior status
    StatusUpdated(MissionStatus),

    /// Results were fetched after the mission completed
    ResultsReady(MissionResults),

    /// Submission failed before a session existed; `message` is user-facing
    SubmissionFailed { message: String },

    /// Polling for this session stopped on a terminal status
    Finished {
        session_id: String,
        status: SessionStatus,
    },
}

impl MissionEvent {
    /// The session this event belongs to, if it has one
    pub fn session_id(&self) -> Option<&str> {
        match self {
            MissionEvent::Started { session_id, .. } => Some(session_id),
            MissionEvent::StatusUpdated(status) => Some(&status.session_id),
            MissionEvent::ResultsReady(results) => Some(&results.session_id),
            MissionEvent::SubmissionFailed { .. } => None,
            MissionEvent::Finished { session_id, .. } => Some(session_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_is_exposed_per_variant() {
        let started = MissionEvent::Started {
            session_id: "abc".to_string(),
            topic: "coffee".to_string(),
        };
        assert_eq!(started.session_id(), Some("abc"));

        let failed = MissionEvent::SubmissionFailed {
            message: "backend down".to_string(),
        };
        assert_eq!(failed.session_id(), None);

        let updated = MissionEvent::StatusUpdated(MissionStatus::starting("xyz"));
        assert_eq!(updated.session_id(), Some("xyz"));
    }
}
