//! Forecast chaining.
//!
//! Each applied improvement lowers the forecast CPA and raises forecast
//! conversions by the same percentage, starting from the previous forecast:
//!
//! ```rust
//! use mediamix::forecast::compute_forecast;
//! use mediamix::ForecastPair;
//!
//! let next = compute_forecast(ForecastPair::new(80.0, 50), 100.0);
//! assert_eq!(next, ForecastPair::new(0.0, 100));
//! ```

use crate::core::ForecastPair;

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp an improvement percentage into [0, 100]. NaN is 0.
pub fn clamp_improvement(improvement_pct: f64) -> f64 {
    if improvement_pct.is_nan() {
        0.0
    } else {
        improvement_pct.clamp(0.0, 100.0)
    }
}

/// A usable CPA: non-finite or negative values become 0.
pub fn sanitize_cpa(cpa: f64) -> f64 {
    if cpa.is_finite() && cpa > 0.0 {
        cpa
    } else {
        0.0
    }
}

/// Next forecast pair after applying `improvement_pct` to `last`.
///
/// CPA shrinks by the percentage and is rounded to cents; conversions grow by
/// the percentage and are rounded to the nearest whole conversion. A CPA that
/// is not a finite, non-negative number is treated as 0.
pub fn compute_forecast(last: ForecastPair, improvement_pct: f64) -> ForecastPair {
    let pct = clamp_improvement(improvement_pct) / 100.0;
    let cpa = round2(sanitize_cpa(last.cpa) * (1.0 - pct));
    // `as` saturates, so non-finite products land on 0 or u64::MAX
    let conversions = (last.conversions as f64 * (1.0 + pct)).round() as u64;
    ForecastPair { cpa, conversions }
}
