//! Optimize command handler: run the exhaustive assembly search.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use apsopt_lib::{run_search, Catalog, SearchConfig, MAX_GAUGE, MIN_GAUGE};

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Mandatory body module identifier; repeat for each.
    #[arg(long = "module")]
    pub modules: Vec<String>,

    /// Filler body module identifier whose count is swept (at most two).
    #[arg(long = "filler")]
    pub fillers: Vec<String>,

    /// Head identifier to trial; repeat for each.
    #[arg(long = "head", required = true)]
    pub heads: Vec<String>,

    /// Maximum rail draw to test (limit 200000).
    #[arg(long, default_value_t = 0)]
    pub max_draw: u32,

    /// Maximum gunpowder casing count to test, swept in 0.01 steps.
    #[arg(long, default_value_t = 0.0)]
    pub max_gp: f64,

    /// Maximum railgun casing count to test.
    #[arg(long, default_value_t = 0)]
    pub max_rg: u32,

    /// Target armor class; repeat for each.
    #[arg(long = "target-ac", required = true)]
    pub target_acs: Vec<f64>,

    /// Smallest gauge to test, mm.
    #[arg(long, default_value_t = MIN_GAUGE)]
    pub min_gauge: u32,

    /// Largest gauge to test, mm.
    #[arg(long, default_value_t = MAX_GAUGE)]
    pub max_gauge: u32,
}

/// Handle the optimize subcommand.
pub fn handle(catalog: &Catalog, args: &OptimizeArgs, format: Format) -> Result<()> {
    let config = SearchConfig {
        required_modules: args.modules.clone(),
        filler_modules: args.fillers.clone(),
        heads: args.heads.clone(),
        max_rail_draw: args.max_draw,
        max_gp_casings: args.max_gp,
        max_rg_casings: args.max_rg,
        target_acs: args.target_acs.clone(),
        min_gauge: args.min_gauge,
        max_gauge: args.max_gauge,
    };

    let outcome = run_search(catalog, &config).context("search failed")?;
    info!(shells_tested = outcome.shells_tested, "search finished");

    match format {
        Format::Text => output::print_leaderboard(&outcome),
        Format::Json => output::print_json(&outcome)?,
    }
    Ok(())
}
