//! Campaign dashboard calculations.
//!
//! Three independent calculators sit at the core:
//!
//! - [`forecast`]: chain the next (CPA, conversions) forecast from the last one
//! - [`allocation`]: move one budget slider and rescale the others to keep 100
//! - [`scoring`]: spend-weighted composite improvement of an allocation
//!
//! [`session`] wraps them in an immutable model-update state with an
//! append-only performance log and activity log. The remaining modules
//! handle configuration, scripts, rendering and the command line.

// Export modules for library usage
pub mod allocation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod forecast;
pub mod formatting;
pub mod observability;
pub mod output;
pub mod scoring;
pub mod script;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActivityLog, ActivityRecord, AllocationSet, Channel, ForecastPair, PerformanceLog,
    PerformancePoint,
};

pub use crate::allocation::{clamp_percent, set_allocation};
pub use crate::config::MediamixConfig;
pub use crate::errors::{Error, Result};
pub use crate::forecast::{compute_forecast, round2};
pub use crate::scoring::{composite_improvement, ChannelRateTable, DEFAULT_CHANNEL_RATES};
pub use crate::session::{replay, Action, Session};
