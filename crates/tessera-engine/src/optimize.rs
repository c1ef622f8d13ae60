//! Single-pass greedy placement optimization.
//!
//! [`optimize`] walks every grid position in row-major order, asks the
//! scorer for the best not-yet-used tile, and swaps it into place. The
//! pass mutates a private copy seeded from the input, so earlier
//! placements influence later scoring while the caller's grid stays
//! untouched. Swaps are the only mutation: the multiset of placements
//! on the grid is identical before and after a pass.

use crate::metrics::OptimizeMetrics;
use crate::score::ScoreContext;
use tessera_core::{Catalog, TileIndex};
use tessera_grid::TileGrid;

/// Where each catalog slot currently sits on a grid.
///
/// Indexed by catalog slot; `None` means the tile is not on the grid.
/// When a tile occupies several cells the map keeps the highest index,
/// matching a row-major scan where the last write wins. The optimizer
/// maintains the map across swaps so the scorer never rescans the grid.
#[derive(Clone, Debug)]
pub struct PlacementMap {
    positions: Vec<Option<usize>>,
}

impl PlacementMap {
    /// Build the map for `grid` by scanning its cells once.
    pub fn compile(catalog: &Catalog, grid: &TileGrid) -> Self {
        let mut positions = vec![None; catalog.len()];
        for (index, placed) in grid.occupied() {
            if let Some(entry) = positions.get_mut(placed.tile.as_usize()) {
                *entry = Some(index);
            }
        }
        Self { positions }
    }

    /// Current grid position of a catalog slot, if it is placed.
    pub fn position_of(&self, tile: TileIndex) -> Option<usize> {
        self.positions.get(tile.as_usize()).copied().flatten()
    }

    /// Record that a catalog slot now sits at `position`.
    ///
    /// Slots outside the catalog are ignored.
    pub fn set(&mut self, tile: TileIndex, position: Option<usize>) {
        if let Some(entry) = self.positions.get_mut(tile.as_usize()) {
            *entry = position;
        }
    }
}

/// Result of one optimization pass.
#[derive(Clone, Debug)]
pub struct OptimizeOutcome {
    /// The reassigned grid snapshot.
    pub grid: TileGrid,
    /// What the pass did, position by position.
    pub metrics: OptimizeMetrics,
}

/// Reassign placed tiles so neighbors score as well as a single greedy
/// pass can make them.
///
/// Positions are visited in row-major order. Each visit locks one tile:
/// the best-scoring unused catalog tile currently on the grid is
/// swapped into the position (the displaced placement, or the vacancy,
/// moves to the candidate's old cell) and its catalog slot is marked
/// used. Positions with no placeable candidate are passed through
/// unchanged. The pass is greedy, not a fixed point: running it again
/// on its own output may change the grid further.
///
/// An empty catalog returns the grid unchanged with every position
/// counted as having no candidate.
pub fn optimize(grid: &TileGrid, catalog: &Catalog) -> OptimizeOutcome {
    let mut result = grid.clone();
    let mut used = vec![false; catalog.len()];
    let mut placements = PlacementMap::compile(catalog, &result);
    let mut metrics = OptimizeMetrics::default();
    let scorer = ScoreContext::new(catalog);

    for index in 0..result.len() {
        metrics.positions_visited += 1;
        let Some(best) = scorer.find_best(&result, index, &used, &placements) else {
            metrics.no_candidate_positions += 1;
            continue;
        };
        if best.position == index {
            metrics.already_in_place += 1;
        } else {
            let swapped = result.swap_cells(index, best.position);
            debug_assert!(swapped, "candidate positions are always in range");
            if let Some(displaced) = result.placed(best.position) {
                placements.set(displaced.tile, Some(best.position));
            }
            metrics.swaps_performed += 1;
        }
        placements.set(best.tile, Some(index));
        if let Some(flag) = used.get_mut(best.tile.as_usize()) {
            *flag = true;
        }
    }

    OptimizeOutcome {
        grid: result,
        metrics,
    }
}
