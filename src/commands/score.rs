use crate::config::MediamixConfig;
use crate::core::AllocationSet;
use crate::formatting::OutputFormatter;
use crate::scoring::composite_improvement;

/// Allocation named on the command line, or the configured one when no
/// share was given. Unnamed channels count as 0.
pub fn requested_allocation(
    config: &MediamixConfig,
    shares: [Option<u8>; 4],
) -> AllocationSet {
    if shares.iter().all(Option::is_none) {
        config.allocation()
    } else {
        AllocationSet::from_values(shares.map(|s| s.unwrap_or(0)))
    }
}

pub fn handle_score(
    config: &MediamixConfig,
    shares: [Option<u8>; 4],
    fmt: &dyn OutputFormatter,
) -> String {
    let alloc = requested_allocation(config, shares);
    let score = composite_improvement(&alloc, &config.rate_table());
    if alloc.total() != 100 {
        tracing::warn!(
            "Allocation sums to {}, scoring against its own total",
            alloc.total()
        );
    }
    format!("{}\n", fmt.success(&format!("{:.1}", score)))
}
