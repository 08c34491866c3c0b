//! Wire types for the research backend's status and results payloads
//!
//! Shapes follow the backend JSON exactly. Optional arrays deserialize to
//! empty vectors; a missing array is never an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a research mission
///
/// Unrecognized backend values are preserved verbatim in [`SessionStatus::Unknown`]
/// and treated as non-terminal so polling continues if the backend grows new
/// intermediate states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    Initializing,
    InProgress,
    Completed,
    Error,
    Unknown(String),
}

impl SessionStatus {
    /// The raw status string as the backend reports it
    pub fn as_str(&self) -> &str {
        match self {
            SessionStatus::Initializing => "initializing",
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
            SessionStatus::Error => "error",
            SessionStatus::Unknown(raw) => raw,
        }
    }

    /// Whether polling should stop on this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Error)
    }
}

impl From<String> for SessionStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "initializing" => SessionStatus::Initializing,
            "in_progress" | "in-progress" => SessionStatus::InProgress,
            "completed" => SessionStatus::Completed,
            "error" => SessionStatus::Error,
            _ => SessionStatus::Unknown(raw),
        }
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Running counts the backend reports while a mission is in flight
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSummary {
    #[serde(default)]
    pub urls_found: u64,
    #[serde(default)]
    pub contents_extracted: u64,
    #[serde(default)]
    pub screenshots_captured: u64,
}

/// A single status poll result; replaced wholesale on every successful poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStatus {
    pub session_id: String,
    pub status: SessionStatus,
    #[serde(default)]
    pub last_step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_summary: Option<DataSummary>,
}

impl MissionStatus {
    /// Synthetic status published right after submission, before the first poll lands
    pub fn starting(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            status: SessionStatus::Initializing,
            last_step: "Initializing...".to_string(),
            data_summary: None,
        }
    }
}

/// Create-job response from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartedMission {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The user request a mission was started for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Kind of agent on the mission team, decoded from the backend's class name
///
/// Each kind maps to a display glyph; anything unrecognized falls back to a
/// generic treatment while keeping the original class name for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentKind {
    WebSailor,
    ViralContent,
    ContentExtractor,
    VisualEvidence,
    Other(String),
}

impl AgentKind {
    /// The backend class name this kind was decoded from
    pub fn class_name(&self) -> &str {
        match self {
            AgentKind::WebSailor => "WebSailorV2",
            AgentKind::ViralContent => "ViralContentAgent",
            AgentKind::ContentExtractor => "ContentExtractorV2",
            AgentKind::VisualEvidence => "VisualEvidenceAgent",
            AgentKind::Other(raw) => raw,
        }
    }

    /// Display glyph for this kind of agent
    pub fn glyph(&self) -> &'static str {
        match self {
            AgentKind::WebSailor => "🔍",
            AgentKind::ViralContent => "⚡",
            AgentKind::ContentExtractor => "🗄",
            AgentKind::VisualEvidence => "📷",
            AgentKind::Other(_) => "👥",
        }
    }
}

impl From<String> for AgentKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "WebSailorV2" => AgentKind::WebSailor,
            "ViralContentAgent" => AgentKind::ViralContent,
            "ContentExtractorV2" => AgentKind::ContentExtractor,
            "VisualEvidenceAgent" => AgentKind::VisualEvidence,
            _ => AgentKind::Other(raw),
        }
    }
}

impl From<AgentKind> for String {
    fn from(kind: AgentKind) -> Self {
        kind.class_name().to_string()
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// A member of the mission's agent team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub agent_class: AgentKind,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// The mission plan produced by the backend's planning stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionPlan {
    #[serde(default)]
    pub search_queries: Vec<String>,
    #[serde(default)]
    pub extraction_tasks: Vec<serde_json::Value>,
    #[serde(default)]
    pub screenshot_targets: Vec<String>,
    #[serde(default)]
    pub team: Vec<AgentProfile>,
}

/// A single web search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Content extracted from a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub method: String,
}

impl ExtractedContent {
    /// A bounded preview of the extracted content, safe on char boundaries
    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let mut preview: String = self.content.chars().take(max_chars).collect();
            preview.push_str("...");
            preview
        }
    }
}

fn default_true() -> bool {
    true
}

/// A screenshot capture attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    #[serde(default = "default_true")]
    pub success: bool,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counts shown on the overview tiles
///
/// Derived from the result array lengths, never from [`DataSummary`]; the
/// backend's running counts can disagree with what was actually delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewCounts {
    pub urls_found: usize,
    pub contents_extracted: usize,
    pub screenshots_captured: usize,
}

/// Full results payload, fetched once after a mission completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionResults {
    pub session_id: String,
    pub user_request: UserRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_plan: Option<MissionPlan>,
    #[serde(default)]
    pub search_results: Vec<SearchResult>,
    #[serde(default)]
    pub extracted_data: Vec<ExtractedContent>,
    #[serde(default)]
    pub screenshot_results: Vec<Screenshot>,
}

impl MissionResults {
    /// Overview tile counts, wired to the delivered arrays
    pub fn overview(&self) -> OverviewCounts {
        OverviewCounts {
            urls_found: self.search_results.len(),
            contents_extracted: self.extracted_data.len(),
            screenshots_captured: self.screenshot_results.len(),
        }
    }

    /// Search queries from the plan; empty when no plan was delivered
    pub fn search_queries(&self) -> &[String] {
        self.mission_plan
            .as_ref()
            .map(|plan| plan.search_queries.as_slice())
            .unwrap_or_default()
    }

    /// The agent team from the plan; empty when no plan was delivered
    pub fn team(&self) -> &[AgentProfile] {
        self.mission_plan
            .as_ref()
            .map(|plan| plan.team.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_round_trip() {
        for raw in ["initializing", "in_progress", "completed", "error"] {
            let status = SessionStatus::from(raw.to_string());
            assert!(!matches!(status, SessionStatus::Unknown(_)));
            assert_eq!(status.as_str(), raw);
        }
    }

    #[test]
    fn hyphenated_in_progress_is_recognized() {
        let status = SessionStatus::from("in-progress".to_string());
        assert_eq!(status, SessionStatus::InProgress);
    }

    #[test]
    fn unknown_status_is_verbatim_and_non_terminal() {
        let status = SessionStatus::from("paused_for_review".to_string());
        assert_eq!(status.as_str(), "paused_for_review");
        assert!(!status.is_terminal());
    }

    #[test]
    fn terminal_statuses() {
        assert!(SessionStatus::Completed.is_terminal());
        assert!(SessionStatus::Error.is_terminal());
        assert!(!SessionStatus::Initializing.is_terminal());
        assert!(!SessionStatus::InProgress.is_terminal());
    }

    #[test]
    fn status_deserializes_from_backend_payload() {
        let json = r#"{
            "session_id": "abc123",
            "status": "in_progress",
            "last_step": "02_search_results",
            "data_summary": {"urls_found": 12, "contents_extracted": 4, "screenshots_captured": 2}
        }"#;
        let status: MissionStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, SessionStatus::InProgress);
        assert_eq!(status.data_summary.unwrap().urls_found, 12);
    }

    #[test]
    fn missing_arrays_deserialize_as_empty() {
        let json = r#"{
            "session_id": "abc123",
            "user_request": {"topic": "coffee market Brazil"}
        }"#;
        let results: MissionResults = serde_json::from_str(json).unwrap();
        assert!(results.search_results.is_empty());
        assert!(results.extracted_data.is_empty());
        assert!(results.screenshot_results.is_empty());
        assert!(results.mission_plan.is_none());
        assert!(results.search_queries().is_empty());
        assert!(results.team().is_empty());
        assert_eq!(results.overview(), OverviewCounts::default());
    }

    #[test]
    fn overview_counts_come_from_array_lengths_not_summary() {
        // The backend's running summary said 12 URLs, but only 3 hits were
        // delivered; the tiles must show 3.
        let json = r#"{
            "session_id": "abc123",
            "user_request": {"topic": "coffee market Brazil"},
            "search_results": [
                {"title": "a", "url": "https://a", "snippet": ""},
                {"title": "b", "url": "https://b", "snippet": ""},
                {"title": "c", "url": "https://c", "snippet": ""}
            ]
        }"#;
        let results: MissionResults = serde_json::from_str(json).unwrap();
        let summary = DataSummary {
            urls_found: 12,
            contents_extracted: 0,
            screenshots_captured: 0,
        };
        assert_eq!(results.overview().urls_found, 3);
        assert_ne!(results.overview().urls_found as u64, summary.urls_found);
    }

    #[test]
    fn agent_kind_maps_known_classes() {
        assert_eq!(
            AgentKind::from("WebSailorV2".to_string()),
            AgentKind::WebSailor
        );
        assert_eq!(
            AgentKind::from("VisualEvidenceAgent".to_string()),
            AgentKind::VisualEvidence
        );
        let other = AgentKind::from("AgentFounder".to_string());
        assert_eq!(other, AgentKind::Other("AgentFounder".to_string()));
        assert_eq!(other.class_name(), "AgentFounder");
        assert_eq!(other.glyph(), "👥");
    }

    #[test]
    fn agent_profile_tolerates_missing_tooling_fields() {
        let json = r#"{"agent_class": "ContentExtractorV2", "role": "extractor", "goal": "extract"}"#;
        let agent: AgentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(agent.agent_class, AgentKind::ContentExtractor);
        assert!(agent.tools.is_empty());
        assert!(agent.constraints.is_empty());
    }

    #[test]
    fn screenshot_success_defaults_to_true() {
        let shot: Screenshot =
            serde_json::from_str(r#"{"url": "https://a", "filepath": "shots/a.png"}"#).unwrap();
        assert!(shot.success);
        let failed: Screenshot =
            serde_json::from_str(r#"{"success": false, "url": "https://b", "error": "timeout"}"#)
                .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn extracted_content_preview_respects_char_boundaries() {
        let content = ExtractedContent {
            url: "https://a".to_string(),
            content: "café".repeat(200),
            method: "trafilatura".to_string(),
        };
        let preview = content.preview(500);
        assert_eq!(preview.chars().count(), 503);
        assert!(preview.ends_with("..."));

        let short = ExtractedContent {
            url: "https://b".to_string(),
            content: "short".to_string(),
            method: "beautifulsoup".to_string(),
        };
        assert_eq!(short.preview(500), "short");
    }

    #[test]
    fn starting_status_is_initializing() {
        let status = MissionStatus::starting("abc123");
        assert_eq!(status.session_id, "abc123");
        assert_eq!(status.status, SessionStatus::Initializing);
        assert!(status.data_summary.is_none());
    }
}
