//! Aggregation engine — derived, read-only views over a vote sequence.
//!
//! Everything here is a pure function over `&[Vote]`, recomputed on every
//! read. Nothing in this crate mutates ledger state, and the hash-based map
//! placement is a presentation heuristic that must never feed back into
//! tally or credit logic.

pub mod breakdown;
pub mod placement;
pub mod series;
pub mod tally;

pub use breakdown::{location_breakdown, LocationTally};
pub use placement::{map_position, marker_lean, marker_radius, MarkerLean};
pub use series::{cumulative_series, TrendData, TrendPoint};
pub use tally::{is_local, local_tally, overall_tally, Tally};
