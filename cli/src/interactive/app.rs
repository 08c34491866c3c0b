//! Interactive dashboard application
//!
//! The dashboard mirrors the mission lifecycle: a topic input, the live
//! status card, the agent team roster, and the tabbed results panel. Mission
//! state arrives over the controller's event stream; key presses drive the
//! input buffer, tab selection, and submission.

use crate::interactive::components::{
    AgentTeamPanel, DatastageLogo, ResultsPanel, ResultsTab, StatusCard, TopicInput,
};
use anyhow::Result;
use datastage_core::config::{DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL_MS};
use datastage_core::{
    HttpBackend, MissionController, MissionEvent, MissionResults, MissionStatus, SessionStatus,
};
use iocraft::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

/// Context shared with the dashboard component tree
#[derive(Clone)]
pub struct DashboardContext {
    pub controller: Arc<MissionController>,
    pub backend_url: String,
    pub user_id: Option<String>,
}

impl DashboardContext {
    /// Context against a default local backend, used for default props
    fn local() -> Self {
        Self {
            controller: Arc::new(MissionController::new(
                Arc::new(HttpBackend::with_base_url(DEFAULT_BASE_URL)),
                Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            )),
            backend_url: DEFAULT_BASE_URL.to_string(),
            user_id: None,
        }
    }
}

#[derive(Clone, Props)]
pub struct DashboardProps {
    pub context: DashboardContext,
}

impl Default for DashboardProps {
    fn default() -> Self {
        Self {
            context: DashboardContext::local(),
        }
    }
}

/// Run the dashboard render loop on a blocking task
pub async fn run_dashboard(context: DashboardContext) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        smol::block_on(async move { element!(DashboardApp(context: context)).render_loop().await })
    })
    .await??;

    Ok(())
}

/// Submit a mission in the background; failures surface via the event stream
fn spawn_mission(controller: Arc<MissionController>, topic: String, user_id: Option<String>) {
    tokio::spawn(async move {
        if let Err(err) = controller.submit_as(&topic, user_id.as_deref()).await {
            // Already published as a SubmissionFailed event
            tracing::debug!("Mission submission failed: {}", err);
        }
    });
}

/// Main dashboard component
#[component]
pub fn DashboardApp(mut hooks: Hooks, props: &DashboardProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();

    let topic_input = hooks.use_state(String::new);
    let is_loading = hooks.use_state(|| false);
    let mission_status = hooks.use_state(|| Option::<MissionStatus>::None);
    let mission_results = hooks.use_state(|| Option::<MissionResults>::None);
    let error = hooks.use_state(|| Option::<String>::None);
    let current_session = hooks.use_state(|| Option::<String>::None);
    let active_tab = hooks.use_state(ResultsTab::default);
    let should_exit = hooks.use_state(|| false);

    let controller = props.context.controller.clone();
    let backend_url = props.context.backend_url.clone();
    let user_id = props.context.user_id.clone();

    // Apply mission events to local state. Events carrying a session id other
    // than the current one belong to a superseded mission and are dropped.
    {
        let mut rx = controller.subscribe();
        let mut is_loading = is_loading;
        let mut mission_status = mission_status;
        let mut mission_results = mission_results;
        let mut error = error;
        let mut current_session = current_session;
        let mut active_tab = active_tab;
        hooks.use_future(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        let is_current = match event.session_id() {
                            Some(session_id) => {
                                current_session.read().as_deref() == Some(session_id)
                            }
                            None => true,
                        };
                        match event {
                            MissionEvent::Started { session_id, .. } => {
                                current_session.set(Some(session_id));
                                mission_status.set(None);
                                mission_results.set(None);
                                error.set(None);
                                active_tab.set(ResultsTab::default());
                                is_loading.set(true);
                            }
                            MissionEvent::StatusUpdated(status) if is_current => {
                                mission_status.set(Some(status));
                            }
                            MissionEvent::ResultsReady(results) if is_current => {
                                mission_results.set(Some(results));
                            }
                            MissionEvent::SubmissionFailed { message } => {
                                error.set(Some(message));
                                is_loading.set(false);
                            }
                            MissionEvent::Finished { .. } if is_current => {
                                is_loading.set(false);
                            }
                            _ => {}
                        }
                    }
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }

    // Keyboard: typing, submission, tab switching, exit
    hooks.use_terminal_events({
        let controller = controller.clone();
        let user_id = user_id.clone();
        let mut topic_input = topic_input;
        let mut active_tab = active_tab;
        let mut should_exit = should_exit;
        let mut is_loading = is_loading;
        let mut mission_results = mission_results;
        let mut error = error;
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    should_exit.set(true);
                }
                KeyCode::Esc => {
                    if topic_input.read().is_empty() {
                        should_exit.set(true);
                    } else {
                        topic_input.set(String::new());
                    }
                }
                KeyCode::Tab | KeyCode::Right => {
                    if mission_results.read().is_some() {
                        active_tab.set(active_tab.get().next());
                    }
                }
                KeyCode::Left => {
                    if mission_results.read().is_some() {
                        active_tab.set(active_tab.get().previous());
                    }
                }
                KeyCode::Enter => {
                    let topic = topic_input.read().clone();
                    if !is_loading.get() && !topic.trim().is_empty() {
                        // Loading starts now; the previous mission's results
                        // and error are gone before the new session appears
                        is_loading.set(true);
                        error.set(None);
                        mission_results.set(None);
                        spawn_mission(controller.clone(), topic, user_id.clone());
                    }
                }
                KeyCode::Char(c) => {
                    if !is_loading.get() {
                        let mut value = topic_input.read().clone();
                        value.push(c);
                        topic_input.set(value);
                    }
                }
                KeyCode::Backspace => {
                    if !is_loading.get() {
                        let mut value = topic_input.read().clone();
                        value.pop();
                        topic_input.set(value);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let topic_value = topic_input.read().clone();
    let loading = is_loading.get();
    let status_snapshot = mission_status.read().clone();
    let results_snapshot = mission_results.read().clone();
    let error_message = error.read().clone();
    let tab = active_tab.get();

    let mission_complete = matches!(
        status_snapshot.as_ref().map(|status| &status.status),
        Some(SessionStatus::Completed)
    );
    let team = results_snapshot
        .as_ref()
        .map(|results| results.team().to_vec())
        .unwrap_or_default();
    let show_results = results_snapshot.is_some() && mission_complete;

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct, padding: 1) {
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                DatastageLogo
                Text(
                    content: "Autonomous market research mission control",
                    color: Color::Cyan,
                )
                Text(content: format!("backend: {}", backend_url), color: Color::DarkGrey)
            }

            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                Text(content: "Research Topic", weight: Weight::Bold)
                TopicInput(value: topic_value, disabled: loading)
                Text(
                    content: "enter launch mission · tab switch results view · esc clear/quit",
                    color: Color::DarkGrey,
                )
            }

            StatusCard(status: status_snapshot, is_loading: loading)

            #(error_message.map(|message| element! {
                View(
                    border_style: BorderStyle::Round,
                    border_color: Color::Red,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(content: format!("⚠ {}", message), color: Color::Red)
                }
            }))

            #(if team.is_empty() {
                None
            } else {
                Some(element! {
                    AgentTeamPanel(team: team.clone(), mission_complete: mission_complete)
                })
            })

            #(if show_results {
                Some(element! {
                    ResultsPanel(results: results_snapshot.clone(), active_tab: tab)
                })
            } else {
                None
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props_point_at_the_local_backend() {
        let props = DashboardProps::default();
        assert_eq!(props.context.backend_url, DEFAULT_BASE_URL);
        assert!(props.context.user_id.is_none());
    }
}
