//! Log of applied improvement actions.

use im::Vector;
use serde::{Deserialize, Serialize};

/// One applied improvement action and the copy attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub label: String,
    #[serde(default)]
    pub suggested_texts: Vec<String>,
    #[serde(default)]
    pub implemented_texts: Vec<String>,
    #[serde(default)]
    pub requested_texts: Vec<String>,
}

impl ActivityRecord {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// Append-only activity history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityLog {
    records: Vector<ActivityRecord>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appended(&self, record: ActivityRecord) -> Self {
        let mut records = self.records.clone();
        records.push_back(record);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&ActivityRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter()
    }
}
