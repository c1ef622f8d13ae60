//! Placement optimization engine for Tessera grids.
//!
//! The engine is a set of synchronous, pure-function transformations
//! over catalog and grid values: scoring a candidate tile against its
//! placed neighbors ([`ScoreContext`]), a single greedy reassignment
//! pass ([`optimize()`]), and scoring-free bulk operations ([`fill_all`],
//! [`clear`]). Every operation consumes immutable inputs and returns a
//! fresh grid snapshot; nothing here locks, suspends, or does I/O.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fill;
pub mod metrics;
pub mod optimize;
pub mod score;

pub use fill::{clear, fill_all, FillOutcome, SizeAdvisory};
pub use metrics::OptimizeMetrics;
pub use optimize::{optimize, OptimizeOutcome, PlacementMap};
pub use score::{BestCandidate, ScoreContext, EDGE_MATCH, FAMILY_BONUS, MIRROR_BONUS};
