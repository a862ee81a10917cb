//! Part definitions and the read-only part catalog.
//!
//! A [`Catalog`] maps case-normalized identifiers to [`PartDef`] records,
//! split into body modules and heads. The built-in table covers the stock
//! APS parts; [`Catalog::from_reader`] loads a custom table from CSV.

mod builtin;
mod catalog;
mod def;

pub use catalog::{Catalog, PartKind};
pub use def::{PartDef, Payload};
