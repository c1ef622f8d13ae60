//! Per-pass counters for the placement optimizer.
//!
//! [`OptimizeMetrics`] captures what a single optimization pass did to
//! the grid, enabling callers to report progress or decide whether a
//! further pass is worth running.

/// Counters collected during a single optimization pass.
///
/// Every visited position is accounted to exactly one outcome, so
/// `positions_visited` always equals `swaps_performed +
/// already_in_place + no_candidate_positions`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimizeMetrics {
    /// Grid positions examined by the pass (always `width * height`).
    pub positions_visited: usize,
    /// Positions whose winning candidate was swapped in from another cell.
    pub swaps_performed: usize,
    /// Positions whose winning candidate was already sitting there.
    pub already_in_place: usize,
    /// Positions left as-is because no unused candidate was placeable.
    pub no_candidate_positions: usize,
}
