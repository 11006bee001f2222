use super::rates::ChannelRateTable;
use crate::core::{AllocationSet, Channel};
use serde::Serialize;

/// Round to one decimal place, half up.
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// One channel's share of the composite improvement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelContribution {
    pub channel: Channel,
    pub share: u8,
    pub rate: f64,
    /// Unrounded `share / total * rate`.
    pub weighted: f64,
}

/// Per-channel weighted contributions, in canonical order.
///
/// An allocation with a zero total contributes nothing on every channel.
pub fn contributions(alloc: &AllocationSet, rates: &ChannelRateTable) -> Vec<ChannelContribution> {
    let total = alloc.total();
    alloc
        .iter()
        .map(|(channel, share)| {
            let rate = rates.rate_for(channel);
            let weighted = if total == 0 {
                0.0
            } else {
                f64::from(share) / f64::from(total) * rate
            };
            ChannelContribution {
                channel,
                share,
                rate,
                weighted,
            }
        })
        .collect()
}

/// Spend-weighted average of the channel rates, rounded to one decimal.
///
/// Returns 0 for an allocation whose shares total 0.
pub fn composite_improvement(alloc: &AllocationSet, rates: &ChannelRateTable) -> f64 {
    if alloc.total() == 0 {
        return 0.0;
    }
    let weighted: f64 = contributions(alloc, rates).iter().map(|c| c.weighted).sum();
    round1(weighted)
}
