//! Error types for catalog construction.

use crate::id::TileId;
use std::fmt;

/// Errors arising from catalog construction.
///
/// Construction is deliberately permissive: dangling mirror or rotation
/// references are legal (a missing partner means "no bonus", never an
/// error), so only structural problems are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two tiles were added with the same id.
    DuplicateId {
        /// The offending id.
        id: TileId,
    },
    /// The catalog would not fit the `u32` slot range.
    TooManyTiles {
        /// Number of tiles supplied.
        count: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate tile id '{id}'"),
            Self::TooManyTiles { count } => {
                write!(f, "catalog of {count} tiles exceeds the u32 slot range")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
