//! APS shell performance modeling and assembly optimization.
//!
//! This crate models the ballistic and damage statistics of an APS shell
//! assembled from discrete parts, and exhaustively searches the assembly
//! space for the best sustained kinetic DPS per target armor class and
//! loader length. Higher-level consumers (the CLI) should only depend on
//! the types exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod leaderboard;
pub mod parts;
pub mod search;
pub mod shell;

pub use error::{Error, Result};
pub use leaderboard::{AcTable, BucketBest, Leaderboard, LENGTH_BUCKETS};
pub use parts::{Catalog, PartDef, PartKind, Payload};
pub use search::{run as run_search, SearchConfig, SearchOutcome, MAX_RAIL_DRAW_LIMIT};
pub use shell::{
    evaluate, Assembly, DrawPrefix, KineticDps, ShellReport, ShellStats, MAX_GAUGE, MIN_GAUGE,
    SLOT_BUDGET,
};
