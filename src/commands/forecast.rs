use crate::core::ForecastPair;
use crate::formatting::OutputFormatter;
use crate::forecast::compute_forecast;
use crate::output::render_forecast;

pub fn handle_forecast(
    cpa: f64,
    conversions: u64,
    improvement_pct: f64,
    fmt: &dyn OutputFormatter,
) -> String {
    let last = ForecastPair::new(cpa, conversions);
    let next = compute_forecast(last, improvement_pct);
    render_forecast(last, improvement_pct, next, fmt)
}
