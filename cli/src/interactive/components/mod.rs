//! Dashboard UI components

pub mod agent_card;
pub mod logo;
pub mod results_panel;
pub mod status_card;
pub mod topic_input;

pub use agent_card::AgentTeamPanel;
pub use logo::DatastageLogo;
pub use results_panel::{ResultsPanel, ResultsTab};
pub use status_card::StatusCard;
pub use topic_input::TopicInput;
