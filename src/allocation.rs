//! Budget slider redistribution.
//!
//! Moving one channel's slider rescales the other three so that the four
//! shares keep summing to exactly 100. The other channels keep their
//! relative weights; integer rounding drift is absorbed by the first
//! non-selected channel in canonical order.
//!
//! ```rust
//! use mediamix::allocation::set_allocation;
//! use mediamix::{AllocationSet, Channel};
//!
//! let next = set_allocation(AllocationSet::new(25, 25, 25, 25), Channel::Ooh, 100.0);
//! assert_eq!(next, AllocationSet::new(100, 0, 0, 0));
//! ```

use crate::core::{AllocationSet, Channel};

/// Total every allocation must reach.
pub const ALLOCATION_TOTAL: i32 = 100;

/// Clamp a raw slider value into [0, 100] and round to the nearest integer.
///
/// NaN maps to 0; infinities clamp to the nearest bound.
pub fn clamp_percent(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

/// Set `channel` to `raw_value` and rescale the remaining channels.
///
/// The result always sums to exactly 100 and holds no negative share.
pub fn set_allocation(current: AllocationSet, channel: Channel, raw_value: f64) -> AllocationSet {
    let value = clamp_percent(raw_value);
    let remaining = ALLOCATION_TOTAL - i32::from(value);
    let others = channel.others();
    let prev_sum: u32 = others.iter().map(|&c| u32::from(current.get(c))).sum();

    let mut values = [0i32; 4];
    values[channel.index()] = i32::from(value);

    if prev_sum > 0 {
        for other in others {
            let share = f64::from(current.get(other)) / f64::from(prev_sum) * f64::from(remaining);
            values[other.index()] = share.round() as i32;
        }
    } else {
        let base = remaining / 3;
        for other in others {
            values[other.index()] = base;
        }
        values[others[0].index()] += remaining % 3;
    }

    absorb_rounding_drift(&mut values, channel);

    tracing::trace!(
        channel = %channel,
        value,
        result = ?values,
        "Redistributed allocation"
    );

    Channel::ALL.into_iter().fold(current, |alloc, c| {
        alloc.with(c, values[c.index()].clamp(0, ALLOCATION_TOTAL) as u8)
    })
}

/// Push the difference from 100 onto non-selected channels in canonical order.
///
/// The first non-selected channel takes the whole correction unless that
/// would make it negative; any residual moves on to the next channel.
fn absorb_rounding_drift(values: &mut [i32; 4], selected: Channel) {
    let mut delta = ALLOCATION_TOTAL - values.iter().sum::<i32>();
    for other in selected.others() {
        if delta == 0 {
            break;
        }
        let slot = &mut values[other.index()];
        let adjusted = (*slot + delta).max(0);
        delta -= adjusted - *slot;
        *slot = adjusted;
    }
}
