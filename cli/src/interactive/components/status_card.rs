//! Mission status card component
//!
//! Shows the live view of the last-fetched status: session id, status dot,
//! last step, and the backend's running summary counts when present.

use datastage_core::{MissionStatus, SessionStatus};
use iocraft::prelude::*;

#[derive(Clone, Default, Props)]
pub struct StatusCardProps {
    /// Last-fetched mission status; None before the first mission
    pub status: Option<MissionStatus>,
    /// A mission is being submitted or polled
    pub is_loading: bool,
}

/// Indicator color for a session status
pub fn status_color(status: &SessionStatus) -> Color {
    match status {
        SessionStatus::Completed => Color::Green,
        SessionStatus::InProgress => Color::Blue,
        SessionStatus::Error => Color::Red,
        // initializing and anything the backend invents later
        _ => Color::Yellow,
    }
}

/// Session id shortened for display, as `abcdef123456...`
pub fn short_session_id(session_id: &str) -> String {
    if session_id.chars().count() <= 12 {
        session_id.to_string()
    } else {
        let mut short: String = session_id.chars().take(12).collect();
        short.push_str("...");
        short
    }
}

/// Mission status card
#[component]
pub fn StatusCard(_hooks: Hooks, props: &StatusCardProps) -> impl Into<AnyElement<'static>> {
    let status = props.status.clone();
    let is_loading = props.is_loading;

    let session_row = status
        .as_ref()
        .map(|s| (status_color(&s.status), format!("Session: {}", short_session_id(&s.session_id))));

    let mut detail_lines: Vec<(String, Color)> = Vec::new();
    match &status {
        Some(s) => {
            detail_lines.push((format!("Status: {}", s.status), Color::Grey));
            detail_lines.push((format!("Last Step: {}", s.last_step), Color::Grey));
            if let Some(summary) = &s.data_summary {
                detail_lines.push((
                    format!(
                        "URLs: {} | Contents: {} | Screenshots: {}",
                        summary.urls_found, summary.contents_extracted, summary.screenshots_captured
                    ),
                    Color::DarkGrey,
                ));
            }
            if is_loading {
                detail_lines.push(("⟳ polling...".to_string(), Color::Cyan));
            }
        }
        None => {
            detail_lines.push(("Waiting for a mission to start...".to_string(), Color::DarkGrey));
        }
    }

    element! {
        View(
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "Mission Status", weight: Weight::Bold)
            #(session_row.map(|(dot_color, session_line)| element! {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: "● ", color: dot_color)
                    Text(content: session_line, color: Color::White)
                }
            }))
            #(detail_lines.into_iter().map(|(content, color)| element! {
                Text(content: content, color: color)
            }))
        }
    }
}
