//! Text and JSON rendering of shell reports and leaderboards.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use apsopt_lib::{SearchOutcome, ShellReport};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Format {
    Text,
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_report(report: &ShellReport, indent: &str) {
    println!(
        "{indent}Gauge {} mm, total length {} mm",
        report.gauge, report.total_length
    );
    println!(
        "{indent}Casings: {:.2} gunpowder, {} railgun",
        report.gp_casings, report.rg_casings
    );
    println!("{indent}Modules: {}", report.modules.join(", "));
    println!(
        "{indent}Draw {}, total recoil {:.1}",
        report.draw, report.total_recoil
    );
    println!(
        "{indent}Velocity {:.1} m/s, armor pierce {:.2}",
        report.velocity, report.armor_pierce
    );
    println!(
        "{indent}Kinetic damage {}, kinetic DPS {:.3}",
        report.kinetic_damage, report.kinetic_dps
    );
    println!(
        "{indent}Chemical damage {:.2}, chemical DPS {:.3}",
        report.chemical_damage, report.chemical_dps
    );
    println!(
        "{indent}Reload {:.1} s ({:.1} rpm)",
        report.reload_time, report.rounds_per_minute
    );
    if let (Some(reload), Some(rpm)) = (report.reload_time_belt, report.rounds_per_minute_belt) {
        println!("{indent}Beltfed reload {:.1} s ({:.1} rpm)", reload, rpm);
    }
    if let Some(dps) = report.kinetic_dps_belt {
        println!("{indent}Beltfed kinetic DPS {:.3}", dps);
    }
    if let Some(dps) = report.chemical_dps_belt {
        println!("{indent}Beltfed chemical DPS {:.3}", dps);
    }
}

pub fn print_leaderboard(outcome: &SearchOutcome) {
    println!("Shells tested: {}", outcome.shells_tested);
    for table in outcome.leaderboard.tables() {
        println!();
        println!("Target AC {}:", table.target_ac);
        for bucket in &table.buckets {
            match &bucket.best {
                Some(report) => {
                    println!(
                        "  Loader {} mm: kinetic DPS {:.3}",
                        bucket.ceiling, bucket.kinetic_dps
                    );
                    print_report(report, "    ");
                }
                None => println!("  Loader {} mm: no qualifying shell", bucket.ceiling),
            }
        }
    }
}
