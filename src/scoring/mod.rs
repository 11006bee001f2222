//! Composite improvement scoring over a budget allocation.

pub mod composite;
pub mod rates;

pub use composite::{composite_improvement, contributions, round1, ChannelContribution};
pub use rates::{ChannelRateTable, DEFAULT_CHANNEL_RATES};
