//! Human-readable dashboard rendering.

use crate::core::{AllocationSet, Channel, ForecastPair};
use crate::formatting::OutputFormatter;
use crate::scoring::{contributions, ChannelRateTable};
use crate::session::Session;
use std::fmt::Write;

/// Width of the segmented allocation bar, in cells.
pub const BAR_WIDTH: usize = 50;

/// Cells per channel for a bar of `width`, summing to exactly `width`.
///
/// Boundaries are placed at the rounded cumulative share so per-channel
/// rounding never accumulates. A zero-total allocation gets no cells.
pub fn bar_cells(alloc: &AllocationSet, width: usize) -> [usize; 4] {
    let total = alloc.total();
    let mut cells = [0usize; 4];
    if total == 0 {
        return cells;
    }
    let total = total as usize;
    let mut cumulative = 0usize;
    let mut previous_edge = 0usize;
    for (channel, share) in alloc.iter() {
        cumulative += usize::from(share);
        // Integer round-half-up of cumulative / total * width
        let edge = (cumulative * width * 2 + total) / (2 * total);
        cells[channel.index()] = edge - previous_edge;
        previous_edge = edge;
    }
    cells
}

pub fn render_allocation_bar(alloc: &AllocationSet, width: usize, fmt: &dyn OutputFormatter) -> String {
    let cells = bar_cells(alloc, width);
    let filled: usize = cells.iter().sum();
    let mut bar = String::from("[");
    for channel in Channel::ALL {
        bar.push_str(&fmt.bar_segment(channel, cells[channel.index()]));
    }
    bar.push_str(&".".repeat(width - filled));
    bar.push(']');
    bar
}

pub fn render_allocation(alloc: &AllocationSet, rates: &ChannelRateTable, composite: f64, fmt: &dyn OutputFormatter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", fmt.header("Budget Allocation"));
    let _ = writeln!(out, "  {}", render_allocation_bar(alloc, BAR_WIDTH, fmt));
    for c in contributions(alloc, rates) {
        let _ = writeln!(
            out,
            "  {:<8} {:>3}%   rate {:>5.1}   {}",
            c.channel.label(),
            c.share,
            c.rate,
            fmt.dim(&format!("+{:.2}", c.weighted))
        );
    }
    let _ = writeln!(
        out,
        "  Composite improvement: {}",
        fmt.success(&format!("{:.1}%", composite))
    );
    out
}

pub fn render_forecast(last: ForecastPair, improvement_pct: f64, next: ForecastPair, fmt: &dyn OutputFormatter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", fmt.header("Forecast"));
    let _ = writeln!(out, "  Improvement: {:.1}%", improvement_pct);
    let _ = writeln!(out, "  CPA:         {:.2} -> {}", last.cpa, fmt.bold(&format!("{:.2}", next.cpa)));
    let _ = writeln!(
        out,
        "  Conversions: {} -> {}",
        last.conversions,
        fmt.bold(&next.conversions.to_string())
    );
    out
}

pub fn render_session(session: &Session, fmt: &dyn OutputFormatter) -> String {
    let mut out = render_allocation(
        &session.allocation(),
        session.rates(),
        session.composite_improvement(),
        fmt,
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", fmt.header("Performance"));
    let _ = writeln!(
        out,
        "  {}",
        fmt.bold(&format!(
            "{:<20} {:>12} {:>12} {:>12} {:>12}",
            "Label", "Actual CPA", "Actual Conv", "Fcst CPA", "Fcst Conv"
        ))
    );
    for point in session.performance().iter() {
        let _ = writeln!(
            out,
            "  {:<20} {:>12.2} {:>12} {:>12.2} {:>12}",
            truncate(&point.label, 20),
            point.actual_cpa,
            point.actual_conversions,
            point.forecast_cpa,
            point.forecast_conversions
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        fmt.header(&format!("AI Activity ({})", session.activity().len()))
    );
    if session.activity().is_empty() {
        let _ = writeln!(out, "  {}", fmt.dim("No improvements applied yet"));
    }
    for (i, record) in session.activity().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, fmt.bold(&record.label));
        for (kind, texts) in [
            ("suggested", &record.suggested_texts),
            ("implemented", &record.implemented_texts),
            ("requested", &record.requested_texts),
        ] {
            for text in texts {
                let _ = writeln!(out, "     {} {}", fmt.dim(&format!("{kind}:")), text);
            }
        }
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}
