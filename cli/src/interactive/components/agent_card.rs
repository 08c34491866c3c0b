//! Agent team roster components
//!
//! One card per team member: a glyph for the agent kind, the class name,
//! role, goal, and an execution state footer. Cards are keyed by position;
//! the team list is never reordered after fetch.

use datastage_core::AgentProfile;
use iocraft::prelude::*;

#[derive(Clone, Default, Props)]
pub struct AgentCardProps {
    pub agent: Option<AgentProfile>,
    pub is_active: bool,
    pub is_completed: bool,
}

/// Footer text and color for an agent's execution state
fn state_footer(is_active: bool, is_completed: bool) -> (&'static str, Color) {
    if is_completed {
        ("✓ Completed", Color::Green)
    } else if is_active {
        ("⟳ Running", Color::Blue)
    } else {
        ("· Waiting", Color::DarkGrey)
    }
}

/// Card for a single agent on the mission team
#[component]
pub fn AgentCard(_hooks: Hooks, props: &AgentCardProps) -> impl Into<AnyElement<'static>> {
    let (footer, footer_color) = state_footer(props.is_active, props.is_completed);
    let border_color = if props.is_completed {
        Color::Green
    } else if props.is_active {
        Color::Blue
    } else {
        Color::DarkGrey
    };

    let (title, role, goal) = match &props.agent {
        Some(agent) => (
            format!("{} {}", agent.agent_class.glyph(), agent.agent_class.class_name()),
            agent.role.clone(),
            agent.goal.clone(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    element! {
        View(
            border_style: BorderStyle::Round,
            border_color: border_color,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: title, color: Color::White, weight: Weight::Bold)
            #(if role.is_empty() {
                None
            } else {
                Some(element! { Text(content: role.clone(), color: Color::Grey) })
            })
            #(if goal.is_empty() {
                None
            } else {
                Some(element! { Text(content: goal.clone(), color: Color::DarkGrey) })
            })
            Text(content: footer, color: footer_color)
        }
    }
}

#[derive(Clone, Default, Props)]
pub struct AgentTeamPanelProps {
    pub team: Vec<AgentProfile>,
    /// The mission reached `completed`; every card shows the completed state
    pub mission_complete: bool,
}

/// Roster of the mission's agent team
#[component]
pub fn AgentTeamPanel(
    _hooks: Hooks,
    props: &AgentTeamPanelProps,
) -> impl Into<AnyElement<'static>> {
    let team = props.team.clone();
    let mission_complete = props.mission_complete;

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: "Agent Team", weight: Weight::Bold)
            #(team.into_iter().enumerate().map(|(index, agent)| {
                element! {
                    AgentCard(
                        key: format!("agent-{}", index),
                        agent: Some(agent),
                        is_active: false,
                        is_completed: mission_complete,
                    )
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_reflects_execution_state() {
        assert_eq!(state_footer(false, true).0, "✓ Completed");
        assert_eq!(state_footer(true, false).0, "⟳ Running");
        assert_eq!(state_footer(false, false).0, "· Waiting");
        // Completed wins over active
        assert_eq!(state_footer(true, true).0, "✓ Completed");
    }

    #[test]
    fn team_panel_props_default_is_empty() {
        let props = AgentTeamPanelProps::default();
        assert!(props.team.is_empty());
        assert!(!props.mission_complete);
    }
}
