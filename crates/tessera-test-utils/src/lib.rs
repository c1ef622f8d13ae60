//! Test fixtures and catalog generators for Tessera development.
//!
//! Provides synthetic but structurally honest tile catalogs:
//! [`wang_catalog`] builds rotation families with mirror pairs and a
//! shared edge alphabet, [`reference_catalog`] matches the canonical
//! 96-tile deployment, and [`plain_tile`] / [`plain_catalog`] produce
//! relation-free tiles for tests that want deterministic tie-breaks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_core::{
    Catalog, EdgeLabel, Rotation, RotationRefs, ShapeId, StoredEdges, TileDef, TileId,
};
use tessera_grid::TileGrid;

/// Edge alphabet shared by all generated shapes, so cross-shape edge
/// matches actually occur.
const EDGE_ALPHABET: [&str; 4] = ["aa", "bb", "cc", "dd"];

fn variant_id(shape: u32, degrees: u16) -> TileId {
    TileId::from(format!("s{shape}-r{degrees}"))
}

fn base_edges(shape: u32) -> StoredEdges {
    let at = |offset: usize| EdgeLabel::from(EDGE_ALPHABET[(shape as usize + offset) % 4]);
    StoredEdges {
        south: at(2),
        west: at(3),
        north: at(0),
        east: at(1),
    }
}

// A pre-rotated variant stores what the base presents at that rotation.
fn rotate_stored(base: &StoredEdges, rotation: Rotation) -> StoredEdges {
    match rotation {
        Rotation::R0 => base.clone(),
        Rotation::R90 => StoredEdges {
            south: base.east.clone(),
            west: base.south.clone(),
            north: base.west.clone(),
            east: base.north.clone(),
        },
        Rotation::R180 => StoredEdges {
            south: base.north.clone(),
            west: base.east.clone(),
            north: base.south.clone(),
            east: base.west.clone(),
        },
        Rotation::R270 => StoredEdges {
            south: base.west.clone(),
            west: base.north.clone(),
            north: base.east.clone(),
            east: base.south.clone(),
        },
    }
}

/// Build one rotation-family variant of a shape.
///
/// Mirror partners live in `partner`'s family when one exists: the
/// horizontal partner shares the rotation angle, the vertical partner
/// sits a half-turn away.
fn variant(shape: u32, rotation: Rotation, partner: Option<u32>) -> TileDef {
    let degrees = rotation.degrees();
    TileDef {
        id: variant_id(shape, degrees),
        edges: rotate_stored(&base_edges(shape), rotation),
        shape: ShapeId(shape),
        mirror_h: partner.map(|p| variant_id(p, degrees)),
        mirror_v: partner.map(|p| variant_id(p, (degrees + 180) % 360)),
        rotations: RotationRefs {
            r0: variant_id(shape, degrees),
            r90: variant_id(shape, (degrees + 90) % 360),
            r180: variant_id(shape, (degrees + 180) % 360),
            r270: variant_id(shape, (degrees + 270) % 360),
        },
    }
}

/// A catalog of `shapes` four-variant rotation families.
///
/// Variant ids follow `s{shape}-r{degrees}`. Shapes are mirror-paired
/// in order (0 with 1, 2 with 3, ...); a trailing unpaired shape has no
/// mirror partners. Catalog order is shape-major, rotation ascending.
pub fn wang_catalog(shapes: u32) -> Catalog {
    let mut builder = Catalog::builder();
    for shape in 0..shapes {
        let partner = if shape % 2 == 0 {
            (shape + 1 < shapes).then_some(shape + 1)
        } else {
            Some(shape - 1)
        };
        for rotation in Rotation::ALL {
            builder = builder.tile(variant(shape, rotation, partner));
        }
    }
    builder
        .build()
        .expect("generated variant ids are distinct")
}

/// The canonical 96-tile catalog: 24 shapes, declared size 96.
pub fn reference_catalog() -> Catalog {
    let mut builder = Catalog::builder().expected_len(96);
    for shape in 0..24 {
        let partner = if shape % 2 == 0 { shape + 1 } else { shape - 1 };
        for rotation in Rotation::ALL {
            builder = builder.tile(variant(shape, rotation, Some(partner)));
        }
    }
    builder
        .build()
        .expect("generated variant ids are distinct")
}

/// A tile with no mirror partners, a self-only rotation family, and
/// edge labels unique to its id.
pub fn plain_tile(id: &str, shape: u32) -> TileDef {
    TileDef {
        id: TileId::from(id),
        edges: StoredEdges {
            south: EdgeLabel::from(format!("{id}.s")),
            west: EdgeLabel::from(format!("{id}.w")),
            north: EdgeLabel::from(format!("{id}.n")),
            east: EdgeLabel::from(format!("{id}.e")),
        },
        shape: ShapeId(shape),
        mirror_h: None,
        mirror_v: None,
        rotations: RotationRefs::uniform(TileId::from(id)),
    }
}

/// A catalog of `n` relation-free tiles named `t0..t{n-1}`.
///
/// Every candidate scores zero everywhere, so selection reduces to
/// catalog-order tie-breaking.
pub fn plain_catalog(n: usize) -> Catalog {
    let mut builder = Catalog::builder();
    for i in 0..n {
        builder = builder.tile(plain_tile(&format!("t{i}"), i as u32));
    }
    builder
        .build()
        .expect("generated tile ids are distinct")
}

/// An empty grid of the given dimensions.
pub fn vacant_grid(width: u32, height: u32) -> TileGrid {
    TileGrid::new(width, height).expect("fixture dimensions are valid")
}
