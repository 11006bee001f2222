use crate::core::{ActivityRecord, AllocationSet, PerformancePoint};
use crate::errors::Result;
use crate::scoring::{contributions, ChannelContribution};
use crate::session::Session;
use serde::Serialize;

/// Serializable view of a session at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub allocation: AllocationSet,
    pub composite_improvement: f64,
    pub contributions: Vec<ChannelContribution>,
    pub performance: Vec<PerformancePoint>,
    pub activity: Vec<ActivityRecord>,
}

impl SessionSnapshot {
    pub fn from_session(session: &Session) -> Self {
        let allocation = session.allocation();
        Self {
            allocation,
            composite_improvement: session.composite_improvement(),
            contributions: contributions(&allocation, session.rates()),
            performance: session.performance().iter().cloned().collect(),
            activity: session.activity().iter().cloned().collect(),
        }
    }
}

pub fn render_json(session: &Session) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(&SessionSnapshot::from_session(session))?;
    rendered.push('\n');
    Ok(rendered)
}
