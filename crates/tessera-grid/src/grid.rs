//! The tile grid value type.

use crate::error::GridError;
use tessera_core::{Rotation, TileIndex};

/// A tile reference occupying one grid cell.
///
/// Cells reference catalog slots; they never own tile data. The applied
/// rotation travels with the reference, so swapping two cells moves the
/// rotations along with the tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacedTile {
    /// Catalog slot of the placed tile.
    pub tile: TileIndex,
    /// Rotation applied to the placed tile.
    pub rotation: Rotation,
}

impl PlacedTile {
    /// Place a catalog slot unrotated.
    pub fn unrotated(tile: TileIndex) -> Self {
        Self {
            tile,
            rotation: Rotation::R0,
        }
    }
}

/// A rectangular arrangement of optional tile placements.
///
/// Cells are stored flat in row-major order (`row * width + col`).
/// Width is fixed at construction; height is derived from the cell
/// count, and the final row may be ragged when a caller supplies a
/// cell vector whose length is not a multiple of the width.
///
/// Grids are value objects: engine operations clone their input and
/// return the mutated clone, so a caller's snapshot is never touched.
///
/// # Examples
///
/// ```
/// use tessera_grid::{PlacedTile, TileGrid};
/// use tessera_core::TileIndex;
///
/// let mut grid = TileGrid::new(4, 3).unwrap();
/// assert_eq!(grid.len(), 12);
/// assert!(grid.is_vacant());
///
/// grid.set_cell(5, Some(PlacedTile::unrotated(TileIndex(0))));
/// assert_eq!(grid.occupied_count(), 1);
/// assert_eq!(grid.coords_of(5), Some((1, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    cells: Vec<Option<PlacedTile>>,
}

impl TileGrid {
    /// Maximum cells along either axis: traversal arithmetic uses
    /// signed ring bounds, so each axis must fit `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a vacant `width * height` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Create a grid from an existing flat cell vector.
    ///
    /// The height is derived as `ceil(cells.len() / width)`; a final
    /// row shorter than `width` is legal.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_grid::TileGrid;
    ///
    /// let grid = TileGrid::from_cells(3, vec![None; 7]).unwrap();
    /// assert_eq!(grid.height(), 3); // last row holds a single cell
    /// assert_eq!(grid.index_of(2, 1), None); // off the ragged row
    /// ```
    pub fn from_cells(width: u32, cells: Vec<Option<PlacedTile>>) -> Result<Self, GridError> {
        if width == 0 || cells.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, cells })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows, counting a ragged final row.
    pub fn height(&self) -> u32 {
        self.cells.len().div_ceil(self.width as usize) as u32
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<PlacedTile>] {
        &self.cells
    }

    /// The placement at a flat cell index.
    ///
    /// `None` covers both an empty cell and an out-of-range index; for
    /// neighbor inspection the two mean the same thing (no contribution).
    pub fn placed(&self, index: usize) -> Option<PlacedTile> {
        self.cells.get(index).copied().flatten()
    }

    /// Flat index of `(row, col)`, if that cell exists.
    pub fn index_of(&self, row: u32, col: u32) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        let index = row as usize * self.width as usize + col as usize;
        (index < self.cells.len()).then_some(index)
    }

    /// `(row, col)` of a flat index, if it is in range.
    pub fn coords_of(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.cells.len() {
            return None;
        }
        let w = self.width as usize;
        Some(((index / w) as u32, (index % w) as u32))
    }

    /// Write a cell. Returns `false` if `index` is out of range.
    pub fn set_cell(&mut self, index: usize, placement: Option<PlacedTile>) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = placement;
                true
            }
            None => false,
        }
    }

    /// Exchange the contents of two cells. Returns `false` if either
    /// index is out of range.
    pub fn swap_cells(&mut self, a: usize, b: usize) -> bool {
        if a >= self.cells.len() || b >= self.cells.len() {
            return false;
        }
        self.cells.swap(a, b);
        true
    }

    /// Iterate `(index, placement)` over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, PlacedTile)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|placed| (i, placed)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell holds a placement.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether no cell holds a placement.
    pub fn is_vacant(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn placed(slot: u32) -> Option<PlacedTile> {
        Some(PlacedTile::unrotated(TileIndex(slot)))
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_width_returns_error() {
        assert!(matches!(TileGrid::new(0, 5), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn new_zero_height_returns_error() {
        assert!(matches!(TileGrid::new(5, 0), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            TileGrid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            TileGrid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn new_grid_is_vacant() {
        let grid = TileGrid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert!(grid.is_vacant());
        assert!(!grid.is_full());
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn from_cells_rejects_empty_vector() {
        assert!(matches!(
            TileGrid::from_cells(3, vec![]),
            Err(GridError::EmptyGrid)
        ));
    }

    #[test]
    fn from_cells_derives_ragged_height() {
        let grid = TileGrid::from_cells(3, vec![None; 7]).unwrap();
        assert_eq!(grid.height(), 3);
        let exact = TileGrid::from_cells(3, vec![None; 6]).unwrap();
        assert_eq!(exact.height(), 2);
    }

    // ── Indexing tests ──────────────────────────────────────────

    #[test]
    fn index_and_coords_round_trip() {
        let grid = TileGrid::new(4, 3).unwrap();
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(1, 2), Some(6));
        assert_eq!(grid.index_of(2, 3), Some(11));
        assert_eq!(grid.coords_of(6), Some((1, 2)));
        assert_eq!(grid.coords_of(11), Some((2, 3)));
    }

    #[test]
    fn index_of_rejects_out_of_range() {
        let grid = TileGrid::new(4, 3).unwrap();
        assert_eq!(grid.index_of(0, 4), None); // column off the right edge
        assert_eq!(grid.index_of(3, 0), None); // row past the bottom
        assert_eq!(grid.coords_of(12), None);
    }

    #[test]
    fn ragged_final_row_has_no_phantom_cells() {
        // Width 3, 7 cells: row 2 holds only column 0.
        let grid = TileGrid::from_cells(3, vec![None; 7]).unwrap();
        assert_eq!(grid.index_of(2, 0), Some(6));
        assert_eq!(grid.index_of(2, 1), None);
        assert_eq!(grid.index_of(2, 2), None);
    }

    // ── Mutation tests ──────────────────────────────────────────

    #[test]
    fn set_cell_in_range() {
        let mut grid = TileGrid::new(2, 2).unwrap();
        assert!(grid.set_cell(3, placed(7)));
        assert_eq!(grid.placed(3), Some(PlacedTile::unrotated(TileIndex(7))));
        assert!(grid.set_cell(3, None));
        assert_eq!(grid.placed(3), None);
    }

    #[test]
    fn set_cell_out_of_range_returns_false() {
        let mut grid = TileGrid::new(2, 2).unwrap();
        assert!(!grid.set_cell(4, placed(0)));
        assert!(grid.is_vacant());
    }

    #[test]
    fn swap_cells_exchanges_contents() {
        let mut grid = TileGrid::new(2, 2).unwrap();
        grid.set_cell(0, placed(1));
        grid.set_cell(3, placed(2));
        assert!(grid.swap_cells(0, 3));
        assert_eq!(grid.placed(0), Some(PlacedTile::unrotated(TileIndex(2))));
        assert_eq!(grid.placed(3), Some(PlacedTile::unrotated(TileIndex(1))));
    }

    #[test]
    fn swap_cells_moves_rotation_with_the_tile() {
        use tessera_core::Rotation;
        let mut grid = TileGrid::new(2, 1).unwrap();
        grid.set_cell(
            0,
            Some(PlacedTile {
                tile: TileIndex(0),
                rotation: Rotation::R180,
            }),
        );
        assert!(grid.swap_cells(0, 1));
        assert_eq!(grid.placed(0), None);
        assert_eq!(
            grid.placed(1),
            Some(PlacedTile {
                tile: TileIndex(0),
                rotation: Rotation::R180,
            })
        );
    }

    #[test]
    fn swap_cells_out_of_range_returns_false() {
        let mut grid = TileGrid::new(2, 2).unwrap();
        grid.set_cell(0, placed(1));
        assert!(!grid.swap_cells(0, 4));
        assert_eq!(grid.placed(0), Some(PlacedTile::unrotated(TileIndex(1))));
    }

    // ── Occupancy tests ─────────────────────────────────────────

    #[test]
    fn occupied_iterates_in_row_major_order() {
        let mut grid = TileGrid::new(3, 2).unwrap();
        grid.set_cell(4, placed(9));
        grid.set_cell(1, placed(3));
        let seen: Vec<(usize, u32)> = grid.occupied().map(|(i, p)| (i, p.tile.0)).collect();
        assert_eq!(seen, vec![(1, 3), (4, 9)]);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn full_grid_reports_full() {
        let cells: Vec<Option<PlacedTile>> =
            (0..4).map(|i| placed(i)).collect();
        let grid = TileGrid::from_cells(2, cells).unwrap();
        assert!(grid.is_full());
        assert!(!grid.is_vacant());
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn grids_are_value_objects() {
        let mut original = TileGrid::new(2, 2).unwrap();
        original.set_cell(0, placed(5));
        let mut copy = original.clone();
        copy.set_cell(0, None);
        assert_eq!(original.placed(0), Some(PlacedTile::unrotated(TileIndex(5))));
        assert_eq!(copy.placed(0), None);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn coords_round_trip_for_all_cells(
            width in 1u32..16,
            height in 1u32..16,
        ) {
            let grid = TileGrid::new(width, height).unwrap();
            for index in 0..grid.len() {
                let (row, col) = grid.coords_of(index).unwrap();
                prop_assert_eq!(grid.index_of(row, col), Some(index));
            }
        }

        #[test]
        fn derived_height_covers_every_cell(
            width in 1u32..16,
            extra in 0usize..64,
        ) {
            let cells = vec![None; 1 + extra];
            let grid = TileGrid::from_cells(width, cells).unwrap();
            let capacity = grid.width() as usize * grid.height() as usize;
            prop_assert!(grid.len() <= capacity);
            prop_assert!(capacity < grid.len() + grid.width() as usize);
        }
    }
}
