use crate::core::Channel;
use serde::{Deserialize, Serialize};

/// A discrete user action on the dashboard.
///
/// Serialized with an `action` tag so scripts read naturally:
///
/// ```toml
/// [[actions]]
/// action = "set_allocation"
/// channel = "CTV"
/// value = 30
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Move one budget slider.
    SetAllocation { channel: Channel, value: f64 },

    /// Apply an improvement of a known size.
    ApplyImprovement {
        label: String,
        improvement_pct: f64,
        #[serde(default)]
        suggested: Vec<String>,
        #[serde(default)]
        implemented: Vec<String>,
        #[serde(default)]
        requested: Vec<String>,
    },

    /// Apply an improvement sized by the current composite score.
    ApplyComposite {
        label: String,
        #[serde(default)]
        suggested: Vec<String>,
        #[serde(default)]
        implemented: Vec<String>,
        #[serde(default)]
        requested: Vec<String>,
    },

    /// Record externally observed actuals.
    RecordActuals {
        label: String,
        cpa: f64,
        conversions: u64,
    },
}

impl Action {
    pub fn set_allocation(channel: Channel, value: f64) -> Self {
        Self::SetAllocation { channel, value }
    }

    pub fn apply_improvement(label: impl Into<String>, improvement_pct: f64) -> Self {
        Self::ApplyImprovement {
            label: label.into(),
            improvement_pct,
            suggested: Vec::new(),
            implemented: Vec::new(),
            requested: Vec::new(),
        }
    }

    pub fn apply_composite(label: impl Into<String>) -> Self {
        Self::ApplyComposite {
            label: label.into(),
            suggested: Vec::new(),
            implemented: Vec::new(),
            requested: Vec::new(),
        }
    }

    pub fn record_actuals(label: impl Into<String>, cpa: f64, conversions: u64) -> Self {
        Self::RecordActuals {
            label: label.into(),
            cpa,
            conversions,
        }
    }

    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetAllocation { .. } => "set_allocation",
            Action::ApplyImprovement { .. } => "apply_improvement",
            Action::ApplyComposite { .. } => "apply_composite",
            Action::RecordActuals { .. } => "record_actuals",
        }
    }
}
