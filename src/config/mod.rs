//! Configuration read from `.mediamix.toml`.
//!
//! Every section is optional:
//!
//! ```toml
//! [rates]
//! OOH = 3.5
//! Digital = 14.0
//!
//! [allocation]
//! OOH = 20
//! TV = 35
//! Digital = 30
//! CTV = 15
//!
//! [baseline]
//! label = "Week 1"
//! cpa = 42.5
//! conversions = 1200
//! ```

pub mod loader;

pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};

use crate::core::{AllocationSet, Channel, PerformancePoint};
use crate::errors::{Error, Result};
use crate::scoring::ChannelRateTable;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Starting point of the performance log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default = "default_baseline_label")]
    pub label: String,

    #[serde(default = "default_baseline_cpa")]
    pub cpa: f64,

    #[serde(default = "default_baseline_conversions")]
    pub conversions: u64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            label: default_baseline_label(),
            cpa: default_baseline_cpa(),
            conversions: default_baseline_conversions(),
        }
    }
}

fn default_baseline_label() -> String {
    "Week 1".to_string()
}

fn default_baseline_cpa() -> f64 {
    42.5
}

fn default_baseline_conversions() -> u64 {
    1200
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediamixConfig {
    /// Rate overrides keyed by channel label
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,

    #[serde(default)]
    pub allocation: Option<AllocationSet>,

    #[serde(default)]
    pub baseline: BaselineConfig,
}

impl MediamixConfig {
    pub fn validate(&self) -> Result<()> {
        for (label, rate) in &self.rates {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(Error::validation(format!(
                    "rate for '{}' must be a finite, non-negative number",
                    label
                )));
            }
        }

        if let Some(allocation) = &self.allocation {
            if allocation.total() != 100 {
                return Err(Error::validation(format!(
                    "allocation must sum to 100, but sums to {}",
                    allocation.total()
                )));
            }
        }

        if !self.baseline.cpa.is_finite() || self.baseline.cpa < 0.0 {
            return Err(Error::validation(
                "baseline cpa must be a finite, non-negative number",
            ));
        }

        Ok(())
    }

    /// Rate keys that name no channel. They are kept but never looked up.
    pub fn unknown_rate_labels(&self) -> Vec<&str> {
        self.rates
            .keys()
            .filter(|label| !Channel::ALL.iter().any(|c| c.label() == label.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn rate_table(&self) -> ChannelRateTable {
        ChannelRateTable::with_overrides(&self.rates)
    }

    pub fn allocation(&self) -> AllocationSet {
        self.allocation.unwrap_or_default()
    }

    pub fn baseline_point(&self) -> PerformancePoint {
        PerformancePoint::baseline(
            self.baseline.label.as_str(),
            self.baseline.cpa,
            self.baseline.conversions,
        )
    }

    /// Fresh session seeded from this configuration.
    pub fn session(&self) -> Session {
        Session::new(self.allocation(), self.rate_table(), self.baseline_point())
    }
}
