//! Tessera: tile placement and edge-matching optimization for Wang-tile boards.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tessera::prelude::*;
//!
//! // Two tiles whose facing sides share the "road" edge label.
//! let catalog = Catalog::builder()
//!     .tile(TileDef {
//!         id: TileId::from("meadow"),
//!         edges: StoredEdges {
//!             south: "grass".into(),
//!             west: "grass".into(),
//!             north: "sky".into(),
//!             east: "road".into(),
//!         },
//!         shape: ShapeId(0),
//!         mirror_h: None,
//!         mirror_v: None,
//!         rotations: RotationRefs::uniform(TileId::from("meadow")),
//!     })
//!     .tile(TileDef {
//!         id: TileId::from("street"),
//!         edges: StoredEdges {
//!             south: "grass".into(),
//!             west: "road".into(),
//!             north: "sky".into(),
//!             east: "road".into(),
//!         },
//!         shape: ShapeId(1),
//!         mirror_h: None,
//!         mirror_v: None,
//!         rotations: RotationRefs::uniform(TileId::from("street")),
//!     })
//!     .build()
//!     .unwrap();
//!
//! // Deal the catalog onto a 2x1 board, then let the greedy pass
//! // arrange it so the shared edge lines up.
//! let board = TileGrid::new(2, 1).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let filled = fill_all(&board, &catalog, &mut rng);
//! let outcome = optimize(&filled.grid, &catalog);
//!
//! assert!(outcome.grid.is_full());
//! assert_eq!(outcome.metrics.positions_visited, 2);
//! let meadow = catalog.index_of(&TileId::from("meadow")).unwrap();
//! assert_eq!(outcome.grid.placed(0).unwrap().tile, meadow);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`catalog`] | `tessera-core` | Tile definitions, ids, rotations, the catalog |
//! | [`grid`] | `tessera-grid` | Grid value type and traversal sequencing |
//! | [`engine`] | `tessera-engine` | Compatibility scoring, the greedy pass, bulk fill/clear |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tile definitions, ids, rotations, and the catalog (`tessera-core`).
///
/// Contains [`catalog::TileDef`] and its edge/rotation/mirror fields,
/// the [`catalog::Catalog`] lookup structure, and its builder.
pub use tessera_core as catalog;

/// Grid value type and traversal sequencing (`tessera-grid`).
///
/// Provides [`grid::TileGrid`], the flat row-major board of optional
/// placements, and [`grid::generate_sequence`] with the eight named
/// [`grid::TraversalPattern`]s.
pub use tessera_grid as grid;

/// Scoring and placement operations (`tessera-engine`).
///
/// [`engine::ScoreContext`] rates candidates against placed neighbors;
/// [`engine::optimize()`] runs the single greedy swap pass;
/// [`engine::fill_all`] and [`engine::clear`] handle bulk population.
pub use tessera_engine as engine;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
///
/// This imports the most frequently used items: catalog and tile types,
/// the grid value type, traversal sequencing, and the engine operations.
pub mod prelude {
    // Catalog and tile definitions
    pub use tessera_core::{
        Catalog, CatalogBuilder, CatalogError, CompassEdges, EdgeLabel, Rotation, RotationRefs,
        ShapeId, StoredEdges, TileDef, TileId, TileIndex,
    };

    // Grid values and traversal
    pub use tessera_grid::{generate_sequence, GridError, PlacedTile, TileGrid, TraversalPattern};

    // Engine operations
    pub use tessera_engine::{
        clear, fill_all, optimize, BestCandidate, FillOutcome, OptimizeMetrics, OptimizeOutcome,
        PlacementMap, ScoreContext, SizeAdvisory,
    };
}
