//! Subcommand handlers.

pub mod optimize;
pub mod parts;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use apsopt_lib::Catalog;

/// Resolve the part catalog: a user-supplied CSV file or the built-in tables.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load part catalog from {}", path.display())),
        None => Ok(Catalog::builtin().clone()),
    }
}
