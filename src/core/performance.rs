//! Performance points and the append-only log that holds them.

use crate::forecast::compute_forecast;
use im::Vector;
use serde::{Deserialize, Serialize};

/// A (CPA, conversions) pair, either observed or forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPair {
    pub cpa: f64,
    pub conversions: u64,
}

impl ForecastPair {
    pub fn new(cpa: f64, conversions: u64) -> Self {
        Self { cpa, conversions }
    }
}

/// One labelled entry of the performance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub label: String,
    pub actual_cpa: f64,
    pub actual_conversions: u64,
    pub forecast_cpa: f64,
    pub forecast_conversions: u64,
}

impl PerformancePoint {
    /// A starting point whose forecast equals its actuals.
    pub fn baseline(label: impl Into<String>, cpa: f64, conversions: u64) -> Self {
        Self {
            label: label.into(),
            actual_cpa: cpa,
            actual_conversions: conversions,
            forecast_cpa: cpa,
            forecast_conversions: conversions,
        }
    }

    pub fn actual(&self) -> ForecastPair {
        ForecastPair::new(self.actual_cpa, self.actual_conversions)
    }

    pub fn forecast(&self) -> ForecastPair {
        ForecastPair::new(self.forecast_cpa, self.forecast_conversions)
    }
}

/// Ordered performance history. Never empty, never reordered, only appended.
///
/// Every transition returns a new log and leaves `self` untouched; the
/// persistent vector makes that a cheap structural share rather than a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceLog {
    baseline: PerformancePoint,
    history: Vector<PerformancePoint>,
}

impl PerformanceLog {
    pub fn new(baseline: PerformancePoint) -> Self {
        Self {
            baseline,
            history: Vector::new(),
        }
    }

    /// The most recently appended point, or the baseline.
    pub fn latest(&self) -> &PerformancePoint {
        self.history.last().unwrap_or(&self.baseline)
    }

    pub fn len(&self) -> usize {
        self.history.len() + 1
    }

    /// Always false: the log holds at least its baseline.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &PerformancePoint> {
        std::iter::once(&self.baseline).chain(self.history.iter())
    }

    pub fn appended(&self, point: PerformancePoint) -> Self {
        let mut history = self.history.clone();
        history.push_back(point);
        Self {
            baseline: self.baseline.clone(),
            history,
        }
    }

    /// Append a point whose forecast is chained from the latest forecast.
    ///
    /// Actual fields are carried forward from the latest point.
    pub fn chain_forecast(&self, label: impl Into<String>, improvement_pct: f64) -> Self {
        let last = self.latest();
        let next = compute_forecast(last.forecast(), improvement_pct);
        self.appended(PerformancePoint {
            label: label.into(),
            actual_cpa: last.actual_cpa,
            actual_conversions: last.actual_conversions,
            forecast_cpa: next.cpa,
            forecast_conversions: next.conversions,
        })
    }

    /// Append a point carrying newly observed actuals and the latest forecast.
    pub fn record_actuals(&self, label: impl Into<String>, actual: ForecastPair) -> Self {
        let last = self.latest();
        self.appended(PerformancePoint {
            label: label.into(),
            actual_cpa: actual.cpa,
            actual_conversions: actual.conversions,
            forecast_cpa: last.forecast_cpa,
            forecast_conversions: last.forecast_conversions,
        })
    }
}
