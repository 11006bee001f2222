use crate::core::Channel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Improvement rate (percentage points) each channel contributes at full spend.
///
/// This is the single lookup table the calculators and the dashboard read.
pub const DEFAULT_CHANNEL_RATES: [(Channel, f64); 4] = [
    (Channel::Ooh, 3.5),
    (Channel::Tv, 5.0),
    (Channel::Digital, 12.0),
    (Channel::Ctv, 8.5),
];

/// Fixed mapping from channel label to improvement rate.
///
/// Built once when a session starts and never mutated afterwards. Lookups of
/// labels that are not in the table yield 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelRateTable {
    rates: BTreeMap<String, f64>,
}

impl Default for ChannelRateTable {
    fn default() -> Self {
        Self::from_pairs(
            DEFAULT_CHANNEL_RATES
                .iter()
                .map(|&(channel, rate)| (channel.label().to_string(), rate)),
        )
    }
}

impl ChannelRateTable {
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            rates: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Rate for `label`, or 0 when the label is unknown or the rate is not finite.
    pub fn rate(&self, label: &str) -> f64 {
        self.rates
            .get(label)
            .copied()
            .filter(|rate| rate.is_finite())
            .unwrap_or(0.0)
    }

    pub fn rate_for(&self, channel: Channel) -> f64 {
        self.rate(channel.label())
    }

    /// Default table with the given entries overriding the built-in rates.
    pub fn with_overrides(overrides: &BTreeMap<String, f64>) -> Self {
        let mut rates = Self::default().rates;
        rates.extend(overrides.iter().map(|(k, &v)| (k.clone(), v)));
        Self { rates }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
