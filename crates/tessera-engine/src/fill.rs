//! Bulk fill and clear operations.
//!
//! [`fill_all`] deals a shuffled catalog onto a grid one tile per cell;
//! [`clear`] empties every cell. Both return new snapshots and leave
//! the input grid alone.

use rand::seq::SliceRandom;
use rand::Rng;
use tessera_core::{Catalog, TileIndex};
use tessera_grid::{PlacedTile, TileGrid};

/// Advisory raised when a catalog's declared size does not match its
/// actual size at fill time.
///
/// This is a data-quality note for the caller to surface, never a
/// failure: the fill proceeds with the tiles that exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeAdvisory {
    /// The size the catalog declared for itself.
    pub expected: usize,
    /// The number of tiles actually present.
    pub actual: usize,
}

/// Result of a bulk fill.
#[derive(Clone, Debug)]
pub struct FillOutcome {
    /// The filled grid snapshot.
    pub grid: TileGrid,
    /// How many cells received a tile.
    pub placed: usize,
    /// Present when the catalog's declared and actual sizes disagree.
    pub size_advisory: Option<SizeAdvisory>,
}

/// Deal the catalog onto the grid in uniformly shuffled order.
///
/// Cells `0..min(catalog_len, grid_len)` each receive one distinct
/// catalog tile, unrotated; cells beyond that range keep whatever they
/// held before. An empty catalog places nothing and returns the grid
/// unchanged. The shuffle draws only from `rng`, so a seeded generator
/// makes the layout reproducible.
pub fn fill_all<R: Rng + ?Sized>(grid: &TileGrid, catalog: &Catalog, rng: &mut R) -> FillOutcome {
    let mut order: Vec<TileIndex> = catalog.iter().map(|(slot, _)| slot).collect();
    order.shuffle(rng);
    order.truncate(grid.len());

    let mut result = grid.clone();
    for (index, slot) in order.iter().enumerate() {
        result.set_cell(index, Some(PlacedTile::unrotated(*slot)));
    }

    let size_advisory = match catalog.expected_len() {
        Some(expected) if expected != catalog.len() => Some(SizeAdvisory {
            expected,
            actual: catalog.len(),
        }),
        _ => None,
    };

    FillOutcome {
        grid: result,
        placed: order.len(),
        size_advisory,
    }
}

/// Remove every placement, keeping the grid's dimensions.
pub fn clear(grid: &TileGrid) -> TileGrid {
    let mut result = grid.clone();
    for index in 0..result.len() {
        result.set_cell(index, None);
    }
    result
}
