//! Stats command handler: evaluate one explicit assembly.

use anyhow::{bail, Result};
use clap::Args;

use apsopt_lib::{Assembly, Catalog, DrawPrefix, ShellReport};

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Shell gauge in mm (18-500).
    #[arg(long)]
    pub gauge: u32,

    /// Gunpowder casing count, settable in 0.01 steps.
    #[arg(long, default_value_t = 0.0)]
    pub gp: f64,

    /// Railgun casing count.
    #[arg(long, default_value_t = 0)]
    pub rg: u32,

    /// Body module identifier; repeat for each module, rearmost first.
    #[arg(long = "module", required = true)]
    pub modules: Vec<String>,

    /// Head identifier.
    #[arg(long)]
    pub head: String,

    /// Rail draw used to fire the shell.
    #[arg(long, default_value_t = 0)]
    pub draw: u32,

    /// Target armor class for kinetic DPS.
    #[arg(long = "target-ac", default_value_t = 10.0)]
    pub target_ac: f64,
}

/// Handle the stats subcommand.
pub fn handle(catalog: &Catalog, args: &StatsArgs, format: Format) -> Result<()> {
    if !args.target_ac.is_finite() || args.target_ac < 0.1 {
        bail!("target armor class {} must be at least 0.1", args.target_ac);
    }

    let body = args
        .modules
        .iter()
        .map(|name| catalog.module(name))
        .collect::<apsopt_lib::Result<Vec<_>>>()?;
    let head = catalog.head(&args.head)?;

    let assembly = Assembly::new(args.gauge, args.gp, args.rg, body, head)?;
    let prefix = DrawPrefix::evaluate(&assembly)?;
    if args.draw > prefix.max_draw {
        bail!(
            "draw {} exceeds the assembly maximum of {}",
            args.draw,
            prefix.max_draw
        );
    }

    let stats = prefix.at_draw(args.draw)?;
    let kinetic = stats.kinetic_dps(args.target_ac);
    let report = ShellReport::new(
        assembly.gp_casings(),
        assembly.rg_casings(),
        assembly.module_names(),
        &stats,
        kinetic,
    );

    match format {
        Format::Text => {
            println!("Shell stats (target AC {}):", args.target_ac);
            output::print_report(&report, "  ");
        }
        Format::Json => output::print_json(&report)?,
    }
    Ok(())
}
