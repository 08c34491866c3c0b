//! Mission submission and the status-polling loop
//!
//! [`MissionController`] owns at most one active session. Submission probes
//! the backend, creates the job, and spawns one cancellable poll task scoped
//! to the returned session id. The task fetches status on a fixed interval,
//! replaces the known status wholesale on every success, fetches results
//! exactly once on the transition into `completed`, and dies the moment it
//! observes a terminal status.

use crate::backend::ResearchBackend;
use crate::error::{BackendError, Error, Result};
use crate::mission::events::MissionEvent;
use crate::mission::types::{MissionStatus, SessionStatus};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Capacity of the event channel; a lagging subscriber misses old events
/// rather than blocking the poll loop.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Handle to a successfully submitted mission
#[derive(Debug, Clone)]
pub struct SessionHandle {
    /// Backend-issued session identifier
    pub session_id: String,
    /// Client-side identifier for this submission attempt, used in logs
    pub attempt_id: Uuid,
}

struct ActiveSession {
    session_id: String,
    poll_task: JoinHandle<()>,
}

/// Submits missions and polls their status until a terminal state
pub struct MissionController {
    backend: Arc<dyn ResearchBackend>,
    poll_interval: Duration,
    events: broadcast::Sender<MissionEvent>,
    /// Generation of the live session. Poll tasks carry the generation they
    /// were spawned with and drop anything fetched after it went stale, so a
    /// slow response can never leak state into a newer session.
    live_generation: Arc<AtomicU64>,
    active: Mutex<Option<ActiveSession>>,
}

impl MissionController {
    /// Create a controller over the given backend
    pub fn new(backend: Arc<dyn ResearchBackend>, poll_interval: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            backend,
            poll_interval,
            events,
            live_generation: Arc::new(AtomicU64::new(0)),
            active: Mutex::new(None),
        }
    }

    /// Subscribe to mission lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<MissionEvent> {
        self.events.subscribe()
    }

    /// Clone of the event sender, for wiring into UI contexts
    pub fn event_sender(&self) -> broadcast::Sender<MissionEvent> {
        self.events.clone()
    }

    /// Submit a research topic
    pub async fn submit(&self, topic: &str) -> Result<SessionHandle> {
        self.submit_as(topic, None).await
    }

    /// Submit a research topic on behalf of a specific user
    ///
    /// The topic is trimmed first; an empty topic fails without issuing any
    /// request. A failed health probe aborts before the job is created. Any
    /// previous session is cancelled and its state is gone before the new
    /// session's first status arrives.
    pub async fn submit_as(&self, topic: &str, user_id: Option<&str>) -> Result<SessionHandle> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::EmptyTopic);
        }

        let attempt_id = Uuid::new_v4();
        debug!("Submitting research mission {}: {}", attempt_id, topic);

        self.cancel().await;

        if let Err(err) = self.backend.health().await {
            let err = Error::Backend(BackendError::Unreachable {
                message: err.to_string(),
            });
            let _ = self.events.send(MissionEvent::SubmissionFailed {
                message: err.to_string(),
            });
            return Err(err);
        }

        let started = match self.backend.start_research(topic, user_id).await {
            Ok(started) => started,
            Err(err) => {
                let _ = self.events.send(MissionEvent::SubmissionFailed {
                    message: err.to_string(),
                });
                return Err(err);
            }
        };

        let session_id = started.session_id;
        info!("Mission {} started, session {}", attempt_id, session_id);

        let generation = self.live_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let _ = self.events.send(MissionEvent::Started {
            session_id: session_id.clone(),
            topic: topic.to_string(),
        });
        // Shown until the first poll lands
        let _ = self
            .events
            .send(MissionEvent::StatusUpdated(MissionStatus::starting(
                &session_id,
            )));

        let poll_task = tokio::spawn(poll_session(
            self.backend.clone(),
            session_id.clone(),
            generation,
            self.live_generation.clone(),
            self.events.clone(),
            self.poll_interval,
        ));

        *self.active.lock().await = Some(ActiveSession {
            session_id: session_id.clone(),
            poll_task,
        });

        Ok(SessionHandle {
            session_id,
            attempt_id,
        })
    }

    /// Session id of the most recently submitted mission, if any
    pub async fn active_session(&self) -> Option<String> {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|session| session.session_id.clone())
    }

    /// Cancel the active session's poll task, if one is running
    pub async fn cancel(&self) {
        if let Some(previous) = self.active.lock().await.take() {
            // Invalidate the generation before aborting so a tick already past
            // its fetch cannot publish against the dead session
            self.live_generation.fetch_add(1, Ordering::SeqCst);
            previous.poll_task.abort();
            debug!("Cancelled poll task for session {}", previous.session_id);
        }
    }

    /// Stop polling and release the active session
    pub async fn shutdown(&self) {
        self.cancel().await;
    }
}

async fn poll_session(
    backend: Arc<dyn ResearchBackend>,
    session_id: String,
    generation: u64,
    live_generation: Arc<AtomicU64>,
    events: broadcast::Sender<MissionEvent>,
    poll_interval: Duration,
) {
    let mut interval = tokio::time::interval(poll_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // A tokio interval fires immediately on the first tick; consume it so the
    // first fetch happens one full interval after submission
    interval.tick().await;

    loop {
        interval.tick().await;

        let status = match backend.fetch_status(&session_id).await {
            Ok(status) => status,
            Err(err) => {
                // Silent-skip policy: a failed tick is logged, never surfaced,
                // and the loop keeps its cadence
                warn!(
                    "Status poll failed for session {}: {}; skipping tick",
                    session_id, err
                );
                continue;
            }
        };

        if live_generation.load(Ordering::SeqCst) != generation {
            debug!("Session {} superseded; discarding late status", session_id);
            return;
        }

        let final_status = status.status.clone();
        let _ = events.send(MissionEvent::StatusUpdated(status));

        if !final_status.is_terminal() {
            continue;
        }

        if final_status == SessionStatus::Completed {
            match backend.fetch_results(&session_id).await {
                Ok(results) => {
                    if live_generation.load(Ordering::SeqCst) == generation {
                        let _ = events.send(MissionEvent::ResultsReady(results));
                    }
                }
                Err(err) => {
                    // Degraded but acceptable: the mission shows completed
                    // with no results
                    warn!(
                        "Results fetch failed for completed session {}: {}",
                        session_id, err
                    );
                }
            }
        }

        let _ = events.send(MissionEvent::Finished {
            session_id: session_id.clone(),
            status: final_status,
        });
        // Returning drops the interval with the task; no extra tick can fire
        // after a terminal status
        return;
    }
}
