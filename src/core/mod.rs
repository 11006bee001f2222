//! Domain types shared by the calculators and the session model.

pub mod activity;
pub mod allocation;
pub mod channel;
pub mod performance;

pub use activity::{ActivityLog, ActivityRecord};
pub use allocation::AllocationSet;
pub use channel::{Channel, UnknownChannel};
pub use performance::{ForecastPair, PerformanceLog, PerformancePoint};
