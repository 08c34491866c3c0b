//! Results report rendering for headless mode
//!
//! Mirrors the dashboard's result panes as sectioned terminal output: the
//! overview counts, the plan's queries and team, then the per-category lists.
//! Sections with no data are omitted; the counts always print, showing zero.

use chrono::Local;
use console::style;
use datastage_core::mission::types::ExtractedContent;
use datastage_core::{AgentProfile, MissionResults};
use std::fmt::Write as _;

const CONTENT_PREVIEW_CHARS: usize = 500;

/// Render a completed mission's results as a terminal report
pub fn render_report(results: &MissionResults) -> String {
    let mut out = String::new();
    let overview = results.overview();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style("Mission Results").bold().underlined());
    let _ = writeln!(out, "Topic:   {}", results.user_request.topic);
    let _ = writeln!(out, "Session: {}", results.session_id);
    let _ = writeln!(
        out,
        "Fetched: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  🔍 URLs Found           {}",
        style(overview.urls_found).bold()
    );
    let _ = writeln!(
        out,
        "  🗄 Contents Extracted   {}",
        style(overview.contents_extracted).bold()
    );
    let _ = writeln!(
        out,
        "  📷 Screenshots Captured {}",
        style(overview.screenshots_captured).bold()
    );

    let queries = results.search_queries();
    if !queries.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Search Queries").bold());
        for query in queries {
            let _ = writeln!(out, "  • {}", query);
        }
    }

    let team = results.team();
    if !team.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Agent Team").bold());
        for agent in team {
            write_agent(&mut out, agent);
        }
    }

    if !results.search_results.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Search Results").bold());
        for hit in &results.search_results {
            let _ = writeln!(out, "  ⏺ {}", style(&hit.title).bold());
            let _ = writeln!(out, "    {}", style(&hit.url).blue());
            if let Some(platform) = &hit.platform {
                let _ = writeln!(out, "    platform: {}", platform);
            }
            if !hit.snippet.is_empty() {
                let _ = writeln!(out, "    {}", hit.snippet);
            }
        }
    }

    if !results.extracted_data.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Extracted Content").bold());
        for content in &results.extracted_data {
            write_extracted(&mut out, content);
        }
    }

    if !results.screenshot_results.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Screenshots").bold());
        for shot in &results.screenshot_results {
            let marker = if shot.success {
                style("captured").green()
            } else {
                style("failed").red()
            };
            let _ = writeln!(out, "  ⏺ {} {}", marker, style(&shot.url).blue());
            if let Some(filepath) = &shot.filepath {
                let _ = writeln!(out, "    file: {}", filepath);
            }
            if let Some(error) = &shot.error {
                let _ = writeln!(out, "    error: {}", error);
            }
        }
    }

    out
}

fn write_agent(out: &mut String, agent: &AgentProfile) {
    let _ = writeln!(
        out,
        "  {} {}",
        agent.agent_class.glyph(),
        style(agent.agent_class.class_name()).bold()
    );
    if !agent.role.is_empty() {
        let _ = writeln!(out, "    role: {}", agent.role);
    }
    if !agent.goal.is_empty() {
        let _ = writeln!(out, "    goal: {}", agent.goal);
    }
}

fn write_extracted(out: &mut String, content: &ExtractedContent) {
    let _ = writeln!(
        out,
        "  ⏺ {} ({})",
        style(&content.url).blue(),
        content.method
    );
    let preview = content.preview(CONTENT_PREVIEW_CHARS);
    for line in preview.lines() {
        let _ = writeln!(out, "    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datastage_core::mission::types::{
        AgentKind, MissionPlan, Screenshot, SearchResult, UserRequest,
    };

    fn sample_results() -> MissionResults {
        MissionResults {
            session_id: "abc123".to_string(),
            user_request: UserRequest {
                topic: "coffee market Brazil".to_string(),
                user_id: None,
            },
            mission_plan: Some(MissionPlan {
                search_queries: vec!["specialty coffee exports Brazil 2026".to_string()],
                extraction_tasks: Vec::new(),
                screenshot_targets: Vec::new(),
                team: vec![AgentProfile {
                    agent_class: AgentKind::WebSailor,
                    role: "Web researcher".to_string(),
                    goal: "Find market reports".to_string(),
                    tools: Vec::new(),
                    constraints: Vec::new(),
                }],
            }),
            search_results: vec![
                SearchResult {
                    title: "Brazil coffee outlook".to_string(),
                    url: "https://example.com/coffee".to_string(),
                    snippet: "Production is up".to_string(),
                    platform: None,
                },
                SearchResult {
                    title: "Harvest report".to_string(),
                    url: "https://example.com/harvest".to_string(),
                    snippet: String::new(),
                    platform: Some("YouTube".to_string()),
                },
            ],
            extracted_data: Vec::new(),
            screenshot_results: vec![Screenshot {
                success: false,
                url: "https://example.com/shot".to_string(),
                filepath: None,
                error: Some("timeout".to_string()),
            }],
        }
    }

    #[test]
    fn report_counts_come_from_array_lengths() {
        let report = render_report(&sample_results());
        assert!(report.contains("URLs Found"));
        assert!(report.contains('2'));
        assert!(report.contains("coffee market Brazil"));
        assert!(report.contains("specialty coffee exports Brazil 2026"));
        assert!(report.contains("WebSailorV2"));
        assert!(report.contains("timeout"));
    }

    #[test]
    fn report_handles_bare_results() {
        let results = MissionResults {
            session_id: "abc123".to_string(),
            user_request: UserRequest {
                topic: "empty".to_string(),
                user_id: None,
            },
            mission_plan: None,
            search_results: Vec::new(),
            extracted_data: Vec::new(),
            screenshot_results: Vec::new(),
        };
        let report = render_report(&results);
        assert!(report.contains("URLs Found"));
        assert!(!report.contains("Search Queries"));
        assert!(!report.contains("Agent Team"));
        assert!(!report.contains("Search Results"));
    }
}
