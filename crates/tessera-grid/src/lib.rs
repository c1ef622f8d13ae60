//! Grid value type and traversal sequencing for Tessera.
//!
//! [`TileGrid`] is the rectangular arrangement the placement engine
//! works on: a flat row-major buffer of optional tile placements with
//! a fixed width and a derived height. Grids are value objects: engine
//! operations clone their input and return the mutated clone.
//!
//! [`generate_sequence`] produces visit orders over such a grid for the
//! eight named [`TraversalPattern`]s, from plain row-major scans to
//! spirals and seeded random permutations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod traversal;

pub use error::GridError;
pub use grid::{PlacedTile, TileGrid};
pub use traversal::{generate_sequence, TraversalPattern};
