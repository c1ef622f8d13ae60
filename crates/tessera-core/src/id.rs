//! Strongly-typed identifiers for tiles, catalog slots, and shapes.

use std::fmt;

/// Identifies a tile within a catalog.
///
/// Ids are opaque strings assigned by whatever loads the catalog; the
/// engine compares them for equality and never parses them. Mirror and
/// rotation relations between tiles are expressed as `TileId` references.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub String);

impl TileId {
    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TileId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&str> for TileId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

/// Identifies a slot within a [`Catalog`](crate::Catalog).
///
/// Slots are assigned sequentially in insertion order: `TileIndex(n)`
/// is the n-th tile added to the catalog. The optimizer's used set and
/// grid placements are keyed by slot, not by id string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex(pub u32);

impl TileIndex {
    /// The slot as a `usize`, for indexing flat per-tile buffers.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Groups all rotation variants of one base tile pattern.
///
/// Assigned by the catalog source; the engine treats it as an opaque
/// grouping key for shape lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ShapeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
