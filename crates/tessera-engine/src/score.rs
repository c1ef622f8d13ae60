//! Compatibility scoring for candidate placements.
//!
//! The scorer evaluates one candidate tile against the tiles currently
//! occupying the orthogonal neighbors of a target cell. Mirror and
//! rotation-family bonuses examine the left and top neighbors only;
//! edge agreement counts across all four. The asymmetry is load-bearing
//! for a single left-to-right, top-to-bottom pass and must not be
//! "fixed" to look at all four sides.

use crate::optimize::PlacementMap;
use tessera_core::{Catalog, Rotation, TileDef, TileIndex};
use tessera_grid::{PlacedTile, TileGrid};

/// Bonus for a mirror-partner relation with the left or top neighbor.
pub const MIRROR_BONUS: i32 = 100;
/// Bonus for sharing a rotation family with the left or top neighbor.
pub const FAMILY_BONUS: i32 = 50;
/// Score per agreeing edge pair, over all four orthogonal neighbors.
pub const EDGE_MATCH: i32 = 10;

/// Orthogonal neighbor cells of a flat index.
///
/// `None` where the grid ends; a ragged final row simply has no cell
/// below or to the right of its last entry.
#[derive(Clone, Copy, Debug, Default)]
struct Neighbors {
    left: Option<usize>,
    top: Option<usize>,
    right: Option<usize>,
    bottom: Option<usize>,
}

impl Neighbors {
    fn of(grid: &TileGrid, index: usize) -> Self {
        let width = grid.width() as usize;
        let len = grid.len();
        if index >= len {
            return Self::default();
        }
        let col = index % width;
        Self {
            left: if col > 0 { Some(index - 1) } else { None },
            top: if index >= width {
                Some(index - width)
            } else {
                None
            },
            right: if col + 1 < width && index + 1 < len {
                Some(index + 1)
            } else {
                None
            },
            bottom: if index + width < len {
                Some(index + width)
            } else {
                None
            },
        }
    }
}

/// A winning candidate from a best-tile scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestCandidate {
    /// Catalog slot of the winning tile.
    pub tile: TileIndex,
    /// Cell currently holding the winning tile.
    pub position: usize,
    /// The winning score.
    pub score: i32,
}

/// Scores candidate placements against a catalog.
///
/// Borrow a catalog once, then call [`score`](Self::score) or
/// [`find_best`](Self::find_best) against any grid snapshot. Missing
/// neighbor data never fails: an empty cell, an absent mirror partner,
/// or a dangling reference contributes nothing to the score.
#[derive(Clone, Copy, Debug)]
pub struct ScoreContext<'a> {
    catalog: &'a Catalog,
}

impl<'a> ScoreContext<'a> {
    /// Create a scorer over a catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this scorer reads.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Compatibility score for placing `candidate` at flat cell `index`.
    ///
    /// Additive policy, strongest term first:
    /// - [`MIRROR_BONUS`] once, if the left neighbor's horizontal
    ///   mirror or the top neighbor's vertical mirror names the
    ///   candidate.
    /// - [`FAMILY_BONUS`] once, if the candidate shares a rotation
    ///   family with the left or top neighbor.
    /// - [`EDGE_MATCH`] per agreeing edge pair with each of the four
    ///   orthogonal neighbors, all at their effective rotations.
    pub fn score(&self, grid: &TileGrid, index: usize, candidate: PlacedTile) -> i32 {
        let Some(tile) = self.catalog.tile(candidate.tile) else {
            return 0;
        };
        let edges = tile.effective_edges(candidate.rotation);
        let neighbors = Neighbors::of(grid, index);
        let left = self.resolve(grid, neighbors.left);
        let top = self.resolve(grid, neighbors.top);

        let mut score = 0;

        let mirrored = matches!(left, Some((def, _)) if def.mirror_h.as_ref() == Some(&tile.id))
            || matches!(top, Some((def, _)) if def.mirror_v.as_ref() == Some(&tile.id));
        if mirrored {
            score += MIRROR_BONUS;
        }

        let related = matches!(left, Some((def, _)) if def.family_overlaps(tile))
            || matches!(top, Some((def, _)) if def.family_overlaps(tile));
        if related {
            score += FAMILY_BONUS;
        }

        if let Some((def, rotation)) = left {
            if def.effective_edges(rotation).east == edges.west {
                score += EDGE_MATCH;
            }
        }
        if let Some((def, rotation)) = top {
            if def.effective_edges(rotation).south == edges.north {
                score += EDGE_MATCH;
            }
        }
        if let Some((def, rotation)) = self.resolve(grid, neighbors.right) {
            if def.effective_edges(rotation).west == edges.east {
                score += EDGE_MATCH;
            }
        }
        if let Some((def, rotation)) = self.resolve(grid, neighbors.bottom) {
            if def.effective_edges(rotation).north == edges.south {
                score += EDGE_MATCH;
            }
        }

        score
    }

    /// Best not-yet-used tile for flat cell `index`.
    ///
    /// Scans catalog slots in insertion order, skipping slots marked in
    /// `used` and slots with no current grid position (a tile that is
    /// not on the grid cannot be swapped in). The running best is
    /// replaced only on a strictly greater score, so ties keep the
    /// earliest slot. Returns `None` when no slot is placeable.
    pub fn find_best(
        &self,
        grid: &TileGrid,
        index: usize,
        used: &[bool],
        placements: &PlacementMap,
    ) -> Option<BestCandidate> {
        let mut best: Option<BestCandidate> = None;
        for (slot, _) in self.catalog.iter() {
            if used.get(slot.as_usize()).copied().unwrap_or(false) {
                continue;
            }
            let Some(position) = placements.position_of(slot) else {
                continue;
            };
            let Some(candidate) = grid.placed(position) else {
                continue;
            };
            let score = self.score(grid, index, candidate);
            if best.map_or(true, |b| score > b.score) {
                best = Some(BestCandidate {
                    tile: slot,
                    position,
                    score,
                });
            }
        }
        best
    }

    fn resolve(&self, grid: &TileGrid, cell: Option<usize>) -> Option<(&'a TileDef, Rotation)> {
        let placed = grid.placed(cell?)?;
        let def = self.catalog.tile(placed.tile)?;
        Some((def, placed.rotation))
    }
}
