use serde::Serialize;

use super::model::{KineticDps, ShellStats};

/// Reporting snapshot of one evaluated shell against one target armor class.
///
/// This is the record handed to the leaderboard and rendered by consumers;
/// beltfed fields are present only for gauges of 100 mm or below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellReport {
    pub gauge: u32,
    pub total_length: u32,
    pub gp_casings: f64,
    pub rg_casings: u32,
    /// Part display names in order, head last.
    pub modules: Vec<String>,
    pub armor_pierce: f64,
    pub kinetic_damage: u32,
    pub kinetic_dps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinetic_dps_belt: Option<f64>,
    pub chemical_damage: f64,
    pub chemical_dps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_dps_belt: Option<f64>,
    pub draw: u32,
    /// Rail draw plus gunpowder recoil.
    pub total_recoil: f64,
    pub reload_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload_time_belt: Option<f64>,
    pub rounds_per_minute: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds_per_minute_belt: Option<f64>,
    pub velocity: f64,
}

impl ShellReport {
    pub fn new(
        gp_casings: f64,
        rg_casings: u32,
        modules: Vec<String>,
        stats: &ShellStats,
        kinetic: KineticDps,
    ) -> Self {
        Self {
            gauge: stats.gauge,
            total_length: stats.total_length,
            gp_casings,
            rg_casings,
            modules,
            armor_pierce: stats.armor_pierce,
            kinetic_damage: stats.kinetic_damage,
            kinetic_dps: kinetic.dps,
            kinetic_dps_belt: kinetic.belt,
            chemical_damage: stats.chem_damage,
            chemical_dps: stats.chem_dps,
            chemical_dps_belt: stats.chem_dps_belt,
            draw: stats.draw,
            total_recoil: f64::from(stats.draw) + stats.gp_recoil,
            reload_time: stats.reload_time,
            reload_time_belt: stats.beltfed_reload,
            rounds_per_minute: 60.0 / stats.reload_time,
            rounds_per_minute_belt: stats.beltfed_reload.map(|belt| 60.0 / belt),
            velocity: stats.velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::Catalog;
    use crate::shell::{evaluate, Assembly};

    #[test]
    fn report_carries_derived_figures() {
        let catalog = Catalog::builtin();
        let assembly = Assembly::new(
            500,
            2.0,
            0,
            vec![catalog.module("SOLID BODY").unwrap()],
            catalog.head("ARMOR PIERCING HEAD").unwrap(),
        )
        .unwrap();
        let stats = evaluate(&assembly, 1000).unwrap();
        let report = ShellReport::new(
            assembly.gp_casings(),
            assembly.rg_casings(),
            assembly.module_names(),
            &stats,
            stats.kinetic_dps(50.0),
        );

        assert_eq!(report.modules, vec!["Solid Body", "AP Head"]);
        assert!((report.total_recoil - (1000.0 + stats.gp_recoil)).abs() < 1e-9);
        assert!((report.rounds_per_minute - 60.0 / stats.reload_time).abs() < 1e-9);
        assert!(report.reload_time_belt.is_none());
    }

    #[test]
    fn belt_fields_serialize_only_when_present() {
        let catalog = Catalog::builtin();
        let assembly = Assembly::new(
            100,
            0.0,
            0,
            vec![catalog.module("SOLID BODY").unwrap()],
            catalog.head("ARMOR PIERCING HEAD").unwrap(),
        )
        .unwrap();
        let stats = evaluate(&assembly, 100).unwrap();
        let report = ShellReport::new(
            0.0,
            0,
            assembly.module_names(),
            &stats,
            stats.kinetic_dps(10.0),
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("kinetic_dps_belt"));
        assert!(json.contains("rounds_per_minute_belt"));
    }
}
