use crate::allocation::set_allocation;
use crate::config::MediamixConfig;
use crate::core::{AllocationSet, Channel};
use crate::formatting::OutputFormatter;
use crate::output::render_allocation;
use crate::scoring::composite_improvement;

/// Apply slider moves in order, starting from `start`.
pub fn apply_moves(start: AllocationSet, moves: &[(Channel, f64)]) -> AllocationSet {
    moves
        .iter()
        .fold(start, |alloc, &(channel, value)| set_allocation(alloc, channel, value))
}

pub fn handle_allocate(
    config: &MediamixConfig,
    moves: &[(Channel, f64)],
    fmt: &dyn OutputFormatter,
) -> String {
    let alloc = apply_moves(config.allocation(), moves);
    let rates = config.rate_table();
    render_allocation(&alloc, &rates, composite_improvement(&alloc, &rates), fmt)
}
