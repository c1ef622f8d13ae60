//! Benchmark profiles for the Tessera placement engine.
//!
//! Provides pre-built catalog/board pairs shared by the criterion
//! benches:
//!
//! - [`reference_board`]: the canonical 96-tile catalog dealt onto a
//!   12x8 board
//! - [`stress_board`]: 256 rotation families (1024 tiles) dealt onto a
//!   32x32 board

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessera_core::Catalog;
use tessera_engine::fill_all;
use tessera_grid::TileGrid;
use tessera_test_utils::{reference_catalog, vacant_grid, wang_catalog};

/// The canonical deployment: 96 tiles filled onto a 12x8 board.
pub fn reference_board(seed: u64) -> (Catalog, TileGrid) {
    let catalog = reference_catalog();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = fill_all(&vacant_grid(12, 8), &catalog, &mut rng).grid;
    (catalog, grid)
}

/// A stress deployment: 1024 tiles filled onto a 32x32 board.
///
/// Ten times the reference cell count, with the full catalog on the
/// board so every optimizer visit scans a long candidate list.
pub fn stress_board(seed: u64) -> (Catalog, TileGrid) {
    let catalog = wang_catalog(256);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = fill_all(&vacant_grid(32, 32), &catalog, &mut rng).grid;
    (catalog, grid)
}
