//! Mission domain: wire types, lifecycle events, and the polling controller

pub mod controller;
pub mod events;
pub mod types;

pub use controller::{MissionController, SessionHandle};
pub use events::MissionEvent;
pub use types::{
    AgentKind, AgentProfile, DataSummary, ExtractedContent, MissionPlan, MissionResults,
    MissionStatus, OverviewCounts, Screenshot, SearchResult, SessionStatus, StartedMission,
    UserRequest,
};
