//! Shell assemblies and the staged performance pipeline.

mod assembly;
mod model;
mod report;

pub(crate) use assembly::quantize_gp;

pub use assembly::{Assembly, MAX_GAUGE, MIN_GAUGE, SLOT_BUDGET};
pub use model::{evaluate, DrawPrefix, KineticDps, ShellStats};
pub use report::ShellReport;
