//! The immutable tile catalog and its builder.

use crate::error::CatalogError;
use crate::id::{ShapeId, TileId, TileIndex};
use crate::tile::TileDef;
use indexmap::IndexMap;

/// An immutable, insertion-ordered collection of tile definitions.
///
/// A catalog is loaded once by an external source and then only read.
/// Slot assignment, iteration, and shape membership all follow insertion
/// order; the placement engine's candidate scans and first-match-wins
/// tie-breaks depend on that order staying exactly as given, so the
/// catalog never re-sorts.
///
/// # Examples
///
/// ```
/// use tessera_core::{Catalog, EdgeLabel, RotationRefs, ShapeId, StoredEdges, TileDef, TileId};
///
/// let tile = TileDef {
///     id: TileId::from("t0"),
///     edges: StoredEdges {
///         south: EdgeLabel::from("a"),
///         west: EdgeLabel::from("b"),
///         north: EdgeLabel::from("a"),
///         east: EdgeLabel::from("b"),
///     },
///     shape: ShapeId(0),
///     mirror_h: None,
///     mirror_v: None,
///     rotations: RotationRefs::uniform(TileId::from("t0")),
/// };
///
/// let catalog = Catalog::builder().tile(tile).build().unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.index_of(&TileId::from("t0")).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    tiles: Vec<TileDef>,
    by_id: IndexMap<TileId, TileIndex>,
    by_shape: IndexMap<ShapeId, Vec<TileIndex>>,
    expected_len: Option<usize>,
}

impl Catalog {
    /// Maximum number of tiles a catalog can hold.
    pub const MAX_TILES: usize = u32::MAX as usize;

    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tile in a given slot.
    pub fn tile(&self, index: TileIndex) -> Option<&TileDef> {
        self.tiles.get(index.as_usize())
    }

    /// All tiles in insertion order.
    pub fn tiles(&self) -> &[TileDef] {
        &self.tiles
    }

    /// Look up a tile's slot by id.
    pub fn index_of(&self, id: &TileId) -> Option<TileIndex> {
        self.by_id.get(id).copied()
    }

    /// Look up a tile by id.
    pub fn tile_by_id(&self, id: &TileId) -> Option<&TileDef> {
        self.index_of(id).and_then(|index| self.tile(index))
    }

    /// Slots of all tiles sharing a shape, in insertion order.
    ///
    /// Unknown shapes yield an empty slice.
    pub fn shape_members(&self, shape: ShapeId) -> &[TileIndex] {
        self.by_shape
            .get(&shape)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(slot, tile)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, &TileDef)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (TileIndex(i as u32), tile))
    }

    /// The deployment's expected tile count, if one was declared.
    ///
    /// Consumers report a mismatch between this and [`len`](Self::len)
    /// as a non-fatal advisory; the catalog itself does not enforce it.
    pub fn expected_len(&self) -> Option<usize> {
        self.expected_len
    }
}

/// Builder for [`Catalog`].
///
/// Tiles are assigned slots in the order they are added. Duplicate ids
/// fail at [`build`](Self::build); dangling mirror or rotation
/// references do not.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    tiles: Vec<TileDef>,
    expected_len: Option<usize>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            expected_len: None,
        }
    }

    /// Add a tile definition.
    pub fn tile(mut self, tile: TileDef) -> Self {
        self.tiles.push(tile);
        self
    }

    /// Add many tile definitions at once, preserving their order.
    pub fn tiles<I>(mut self, tiles: I) -> Self
    where
        I: IntoIterator<Item = TileDef>,
    {
        self.tiles.extend(tiles);
        self
    }

    /// Declare the deployment's expected tile count.
    ///
    /// The reference tileset ships 96 tiles; bulk fill reports a
    /// mismatch between this and the built length as an advisory.
    pub fn expected_len(mut self, expected: usize) -> Self {
        self.expected_len = Some(expected);
        self
    }

    /// Validate and build the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two tiles share an id,
    /// or [`CatalogError::TooManyTiles`] if the tile count exceeds
    /// [`Catalog::MAX_TILES`].
    pub fn build(self) -> Result<Catalog, CatalogError> {
        if self.tiles.len() > Catalog::MAX_TILES {
            return Err(CatalogError::TooManyTiles {
                count: self.tiles.len(),
            });
        }

        let mut by_id = IndexMap::with_capacity(self.tiles.len());
        let mut by_shape: IndexMap<ShapeId, Vec<TileIndex>> = IndexMap::new();
        for (i, tile) in self.tiles.iter().enumerate() {
            let index = TileIndex(i as u32);
            if by_id.insert(tile.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: tile.id.clone(),
                });
            }
            by_shape.entry(tile.shape).or_default().push(index);
        }

        Ok(Catalog {
            tiles: self.tiles,
            by_id,
            by_shape,
            expected_len: self.expected_len,
        })
    }
}
