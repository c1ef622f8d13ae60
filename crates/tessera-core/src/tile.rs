//! Tile definitions and effective edge resolution.

use crate::id::{ShapeId, TileId};
use crate::rotation::Rotation;
use smallvec::SmallVec;
use std::fmt;

/// Symbolic label on one side of a tile.
///
/// Two touching sides match when their labels are equal; the engine
/// assigns no other meaning to the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeLabel(pub String);

impl EdgeLabel {
    /// Borrow the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeLabel {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&str> for EdgeLabel {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

/// Edge labels of an unrotated tile, in the catalog's storage order.
///
/// The storage order is south, west, north, east. Which label faces
/// which compass direction once the tile is placed comes from
/// [`TileDef::effective_edges`] only; nothing else in the workspace
/// reinterprets these fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoredEdges {
    /// South (bottom) label of the unrotated artwork.
    pub south: EdgeLabel,
    /// West (left) label.
    pub west: EdgeLabel,
    /// North (top) label.
    pub north: EdgeLabel,
    /// East (right) label.
    pub east: EdgeLabel,
}

/// Effective edge labels of a tile under an applied rotation.
///
/// A borrowed view into the tile's stored labels, produced by
/// [`TileDef::effective_edges`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompassEdges<'a> {
    /// Label facing north (up).
    pub north: &'a EdgeLabel,
    /// Label facing east (right).
    pub east: &'a EdgeLabel,
    /// Label facing south (down).
    pub south: &'a EdgeLabel,
    /// Label facing west (left).
    pub west: &'a EdgeLabel,
}

/// Ids of the tiles reached by rotating a tile clockwise.
///
/// Together with the owning tile's own id these form its rotation
/// family. References may name tiles absent from the catalog; a
/// dangling reference still participates in family overlap tests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RotationRefs {
    /// Variant at 0 degrees (conventionally the family's base tile).
    pub r0: TileId,
    /// Variant at 90 degrees clockwise.
    pub r90: TileId,
    /// Variant at 180 degrees.
    pub r180: TileId,
    /// Variant at 270 degrees clockwise.
    pub r270: TileId,
}

impl RotationRefs {
    /// All four refs pointing at one id, for rotationally symmetric tiles.
    pub fn uniform(id: TileId) -> Self {
        Self {
            r0: id.clone(),
            r90: id.clone(),
            r180: id.clone(),
            r270: id,
        }
    }

    /// The variant id for a given rotation.
    pub fn get(&self, rotation: Rotation) -> &TileId {
        match rotation {
            Rotation::R0 => &self.r0,
            Rotation::R90 => &self.r90,
            Rotation::R180 => &self.r180,
            Rotation::R270 => &self.r270,
        }
    }
}

/// A catalog tile: identity, stored edge labels, and its relations to
/// rotated and mirrored variants.
///
/// Definitions are immutable once loaded. Mirror and rotation fields
/// are relation references only; the named tiles live in the catalog
/// (or nowhere), never inside this struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDef {
    /// Unique tile id.
    pub id: TileId,
    /// Edge labels in stored order.
    pub edges: StoredEdges,
    /// Groups all rotation variants of one base pattern.
    pub shape: ShapeId,
    /// Id of the tile this one becomes under a horizontal mirror, if
    /// the catalog has one.
    pub mirror_h: Option<TileId>,
    /// Id of the tile this one becomes under a vertical mirror, if the
    /// catalog has one.
    pub mirror_v: Option<TileId>,
    /// Ids of the tiles reached by rotating this one.
    pub rotations: RotationRefs,
}

impl TileDef {
    /// Effective compass edges when the tile is placed with `rotation`.
    ///
    /// A clockwise quarter turn carries the west label to the north
    /// side, north to east, east to south, and south to west.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_core::{EdgeLabel, Rotation, RotationRefs, ShapeId, StoredEdges, TileDef, TileId};
    ///
    /// let tile = TileDef {
    ///     id: TileId::from("t"),
    ///     edges: StoredEdges {
    ///         south: EdgeLabel::from("s"),
    ///         west: EdgeLabel::from("w"),
    ///         north: EdgeLabel::from("n"),
    ///         east: EdgeLabel::from("e"),
    ///     },
    ///     shape: ShapeId(0),
    ///     mirror_h: None,
    ///     mirror_v: None,
    ///     rotations: RotationRefs::uniform(TileId::from("t")),
    /// };
    ///
    /// assert_eq!(tile.effective_edges(Rotation::R0).north.as_str(), "n");
    /// assert_eq!(tile.effective_edges(Rotation::R90).north.as_str(), "w");
    /// ```
    pub fn effective_edges(&self, rotation: Rotation) -> CompassEdges<'_> {
        let e = &self.edges;
        match rotation {
            Rotation::R0 => CompassEdges {
                north: &e.north,
                east: &e.east,
                south: &e.south,
                west: &e.west,
            },
            Rotation::R90 => CompassEdges {
                north: &e.west,
                east: &e.north,
                south: &e.east,
                west: &e.south,
            },
            Rotation::R180 => CompassEdges {
                north: &e.south,
                east: &e.west,
                south: &e.north,
                west: &e.east,
            },
            Rotation::R270 => CompassEdges {
                north: &e.east,
                east: &e.south,
                south: &e.west,
                west: &e.north,
            },
        }
    }

    /// The tile's rotation family: its own id plus the four variant ids.
    ///
    /// Duplicates are kept (symmetric tiles list themselves repeatedly);
    /// callers treat the result as a set.
    pub fn family_members(&self) -> SmallVec<[&TileId; 5]> {
        let mut members: SmallVec<[&TileId; 5]> = SmallVec::new();
        members.push(&self.id);
        members.push(&self.rotations.r0);
        members.push(&self.rotations.r90);
        members.push(&self.rotations.r180);
        members.push(&self.rotations.r270);
        members
    }

    /// Whether two tiles share any rotation-family member.
    ///
    /// Compares by id, so variants that resolve to no catalog entry
    /// still count: two tiles listing a common missing id overlap.
    pub fn family_overlaps(&self, other: &TileDef) -> bool {
        let theirs = other.family_members();
        self.family_members().iter().any(|id| theirs.contains(id))
    }
}
