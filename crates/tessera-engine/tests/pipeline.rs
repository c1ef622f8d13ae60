//! End-to-end fill and optimize flows over realistic catalogs.
//!
//! These tests exercise the whole pipeline the way a caller would: deal
//! a catalog onto a grid, run the greedy pass, and check the grid-level
//! guarantees rather than individual scores.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessera_core::{Catalog, TileIndex};
use tessera_engine::{clear, fill_all, optimize};
use tessera_grid::{PlacedTile, TileGrid};
use tessera_test_utils::{reference_catalog, vacant_grid, wang_catalog};

fn placement_multiset(grid: &TileGrid) -> Vec<(u32, u16)> {
    let mut tiles: Vec<(u32, u16)> = grid
        .occupied()
        .map(|(_, p)| (p.tile.0, p.rotation.degrees()))
        .collect();
    tiles.sort_unstable();
    tiles
}

fn placed_slots(grid: &TileGrid) -> Vec<u32> {
    let mut slots: Vec<u32> = grid.occupied().map(|(_, p)| p.tile.0).collect();
    slots.sort_unstable();
    slots
}

#[test]
fn reference_deployment_fill_then_optimize() {
    let catalog = reference_catalog();
    let grid = vacant_grid(12, 8);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let filled = fill_all(&grid, &catalog, &mut rng);
    assert_eq!(filled.placed, 96);
    assert!(filled.grid.is_full());
    assert!(filled.size_advisory.is_none());
    // Equal sizes make the fill a bijection onto the catalog.
    assert_eq!(placed_slots(&filled.grid), (0..96).collect::<Vec<u32>>());

    let outcome = optimize(&filled.grid, &catalog);
    assert_eq!(
        placement_multiset(&outcome.grid),
        placement_multiset(&filled.grid)
    );
    assert_eq!(outcome.metrics.positions_visited, 96);
    assert_eq!(outcome.metrics.no_candidate_positions, 0);
    assert_eq!(
        outcome.metrics.swaps_performed + outcome.metrics.already_in_place,
        96
    );
}

#[test]
fn second_pass_keeps_the_multiset_but_may_move_tiles() {
    let catalog = reference_catalog();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let filled = fill_all(&vacant_grid(12, 8), &catalog, &mut rng);

    let first = optimize(&filled.grid, &catalog);
    let second = optimize(&first.grid, &catalog);

    // The pass is greedy, not a fixed point, so the second run may
    // rearrange further; only the multiset is guaranteed stable.
    assert_eq!(
        placement_multiset(&second.grid),
        placement_multiset(&first.grid)
    );
    assert_eq!(second.metrics.positions_visited, 96);
}

#[test]
fn clear_then_fill_leaves_no_residue() {
    let catalog = wang_catalog(1);
    let mut grid = vacant_grid(3, 3);
    // Occupy a cell the undersized refill will not reach.
    assert!(grid.set_cell(7, Some(PlacedTile::unrotated(TileIndex(2)))));

    let cleared = clear(&grid);
    assert!(cleared.is_vacant());

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let refilled = fill_all(&cleared, &catalog, &mut rng);
    assert_eq!(refilled.placed, 4);
    assert_eq!(refilled.grid.placed(7), None);
    assert_eq!(refilled.grid.occupied_count(), 4);
}

#[test]
fn undersized_catalog_fills_what_it_can_and_raises_the_advisory() {
    let small = wang_catalog(2);
    let catalog = Catalog::builder()
        .tiles(small.iter().map(|(_, def)| def.clone()))
        .expected_len(96)
        .build()
        .unwrap();
    let grid = vacant_grid(12, 8);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let filled = fill_all(&grid, &catalog, &mut rng);
    assert_eq!(filled.placed, 8);
    assert_eq!(filled.grid.occupied_count(), 8);
    let advisory = filled.size_advisory.unwrap();
    assert_eq!(advisory.expected, 96);
    assert_eq!(advisory.actual, 8);

    // Later positions run out of candidates instead of failing.
    let outcome = optimize(&filled.grid, &catalog);
    assert_eq!(
        placement_multiset(&outcome.grid),
        placement_multiset(&filled.grid)
    );
    assert_eq!(
        outcome.metrics.swaps_performed + outcome.metrics.already_in_place,
        8
    );
    assert_eq!(outcome.metrics.no_candidate_positions, 96 - 8);
}

#[test]
fn oversized_catalog_places_a_distinct_subset() {
    let catalog = reference_catalog();
    let grid = vacant_grid(5, 5);
    let mut rng = ChaCha8Rng::seed_from_u64(19);

    let filled = fill_all(&grid, &catalog, &mut rng);
    assert_eq!(filled.placed, 25);
    assert!(filled.grid.is_full());
    let slots = placed_slots(&filled.grid);
    for pair in slots.windows(2) {
        assert!(pair[0] < pair[1], "fill repeated a tile: {pair:?}");
    }

    // Off-grid catalog tiles are never swapped in.
    let outcome = optimize(&filled.grid, &catalog);
    assert_eq!(placed_slots(&outcome.grid), slots);
    assert_eq!(outcome.metrics.no_candidate_positions, 0);
}

#[test]
fn seeded_pipeline_is_reproducible() {
    let catalog = reference_catalog();
    let run = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let filled = fill_all(&vacant_grid(12, 8), &catalog, &mut rng);
        optimize(&filled.grid, &catalog).grid
    };

    let a = run(1234);
    let b = run(1234);
    assert_eq!(a.cells(), b.cells());

    let mut c_rng = ChaCha8Rng::seed_from_u64(1);
    let mut d_rng = ChaCha8Rng::seed_from_u64(2);
    let c = fill_all(&vacant_grid(12, 8), &catalog, &mut c_rng);
    let d = fill_all(&vacant_grid(12, 8), &catalog, &mut d_rng);
    assert_ne!(c.grid.cells(), d.grid.cells());
}
