//! Tile catalog model for the Tessera placement engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the tile vocabulary used throughout the Tessera workspace: typed
//! identifiers, quarter-turn rotations, edge labels, tile definitions
//! with their rotation/mirror relations, and the immutable [`Catalog`]
//! the placement engine scans.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod id;
pub mod rotation;
pub mod tile;

pub use catalog::{Catalog, CatalogBuilder};
pub use error::CatalogError;
pub use id::{ShapeId, TileId, TileIndex};
pub use rotation::Rotation;
pub use tile::{CompassEdges, EdgeLabel, RotationRefs, StoredEdges, TileDef};
