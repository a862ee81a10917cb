//! Staged shell performance pipeline.
//!
//! Statistics are derived in a fixed dependency order: lengths, gunpowder
//! recoil, maximum rail draw, reload, cooldown, then the draw-dependent
//! velocity, kinetic damage and armor pierce, and finally the chemical
//! figures. The draw-independent stages are computed once per assembly as a
//! [`DrawPrefix`]; [`DrawPrefix::at_draw`] completes the pipeline for one
//! rail draw value. Splitting the pipeline this way changes nothing
//! observable; it only avoids recomputing lengths and modifier means for
//! every draw the search sweeps.

use crate::error::{Error, Result};
use crate::parts::{PartDef, Payload};

use super::assembly::Assembly;

/// Gauge scale factor shared by most formulas: (gauge^3 / 500^3)^exponent.
fn gauge_scale(gauge: u32, exponent: f64) -> f64 {
    (f64::from(gauge).powi(3) / 500f64.powi(3)).powf(exponent)
}

/// Arithmetic mean of one modifier over the body modules, head excluded.
///
/// Velocity, kinetic damage and armor pierce all combine modifiers the same
/// way: mean of the body modifiers times the head's own modifier.
fn body_mean(body: &[&PartDef], field: impl Fn(&PartDef) -> f64) -> Result<f64> {
    if body.is_empty() {
        return Err(Error::EmptyBody);
    }
    Ok(body.iter().map(|m| field(m)).sum::<f64>() / body.len() as f64)
}

/// Draw-independent statistics of one assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPrefix {
    pub gauge: u32,
    /// Length of gunpowder and railgun casings, mm.
    pub casing_length: u32,
    /// Length of body modules plus the head, mm.
    pub projectile_length: u32,
    pub total_length: u32,
    /// Recoil energy from gunpowder casings, additive with rail draw.
    pub gp_recoil: f64,
    /// Largest rail draw the assembly can handle.
    pub max_draw: u32,
    pub reload_time: f64,
    /// Beltfed autoloader reload; only available at 100 mm gauge or below.
    pub beltfed_reload: Option<f64>,
    pub cooldown_time: f64,
    pub chem_damage: f64,
    pub chem_dps: f64,
    pub chem_dps_belt: Option<f64>,
    body_velocity: f64,
    body_kinetic: f64,
    body_pierce: f64,
    head_velocity: f64,
    head_kinetic: f64,
    head_pierce: f64,
}

impl DrawPrefix {
    /// Run the draw-independent stages for an assembly.
    ///
    /// Fails with [`Error::EmptyBody`] when the assembly carries no body
    /// modules; the body modifier means are undefined in that case.
    pub fn evaluate(assembly: &Assembly<'_>) -> Result<Self> {
        let gauge = assembly.gauge();
        let gauge_mm = f64::from(gauge);
        let body = assembly.body();
        let head = assembly.head();

        let body_velocity = body_mean(body, |m| m.velocity_mod)?;
        let body_kinetic = body_mean(body, |m| m.kinetic_damage_mod)?;
        let body_pierce = body_mean(body, |m| m.armor_pierce_mod)?;

        // Lengths. Heads have no length cap; they always add one gauge.
        let casing_length = ((assembly.gp_casings() + f64::from(assembly.rg_casings()))
            * gauge_mm)
            .round() as u32;
        let projectile_length: u32 =
            body.iter().map(|m| m.module_length(gauge)).sum::<u32>() + gauge;
        let total_length = projectile_length + casing_length;
        let proj_per_gauge = f64::from(projectile_length) / gauge_mm;
        let casing_per_gauge = f64::from(casing_length) / gauge_mm;

        // Gunpowder recoil.
        let gp_recoil = gauge_scale(gauge, 0.6) * assembly.gp_casings() * 2500.0;

        // Maximum rail draw, truncated.
        let max_draw = (gauge_scale(gauge, 0.6)
            * (proj_per_gauge + 0.5 * f64::from(assembly.rg_casings()))
            * 12500.0) as u32;

        // Reload, with the beltfed variant for small gauges.
        let intake_factor = 2.0 + proj_per_gauge + 0.25 * casing_per_gauge;
        let reload_time = gauge_scale(gauge, 0.45) * intake_factor * 17.5;
        let beltfed_reload =
            (gauge <= 100).then(|| reload_time * (gauge_mm / 1000.0).powf(0.45) * 0.75);

        // Barrel cooldown. 0^0.35 is 0, so zero gunpowder casings cost nothing.
        let cooldown_time =
            3.75 * reload_time * assembly.gp_casings().powf(0.35) / (intake_factor * 2.0);

        // Chemical payload. The stacking head multiplies the body minimum by
        // a flat factor instead of joining the minimum-selection.
        let chem_count =
            body.iter().filter(|m| m.is_chem).count() + usize::from(head.is_chem);
        let body_payload_min = body
            .iter()
            .map(|m| m.payload.value())
            .fold(f64::INFINITY, f64::min);
        let payload_mod = match head.payload {
            Payload::Stacking(factor) => body_payload_min * factor,
            Payload::Bottleneck(value) => body_payload_min.min(value),
        };
        let chem_damage = gauge_scale(gauge, 0.6) * chem_count as f64 * payload_mod;
        let (chem_dps, chem_dps_belt) = if chem_damage > 0.0 {
            (
                chem_damage / reload_time,
                beltfed_reload.map(|belt| chem_damage / belt),
            )
        } else {
            (0.0, beltfed_reload.map(|_| 0.0))
        };

        Ok(Self {
            gauge,
            casing_length,
            projectile_length,
            total_length,
            gp_recoil,
            max_draw,
            reload_time,
            beltfed_reload,
            cooldown_time,
            chem_damage,
            chem_dps,
            chem_dps_belt,
            body_velocity,
            body_kinetic,
            body_pierce,
            head_velocity: head.velocity_mod,
            head_kinetic: head.kinetic_damage_mod,
            head_pierce: head.armor_pierce_mod,
        })
    }

    /// Complete the pipeline for one rail draw value.
    ///
    /// Callers keep `draw` within [`Self::max_draw`]; this method does not
    /// clamp. With positive modifiers and a non-negative draw the radicand
    /// cannot go negative, but if it ever does the iteration fails rather
    /// than producing a silent zero.
    pub fn at_draw(&self, draw: u32) -> Result<ShellStats> {
        let scale = gauge_scale(self.gauge, 0.6);
        let projectile = f64::from(self.projectile_length);

        let radicand = (f64::from(draw) + self.gp_recoil)
            * 85.0
            * self.body_velocity
            * self.head_velocity
            * f64::from(self.gauge)
            / (scale * projectile);
        if radicand < 0.0 {
            return Err(Error::NegativeRadicand { value: radicand });
        }
        let velocity = radicand.sqrt();

        let kinetic_damage = (scale
            * (projectile / f64::from(self.gauge))
            * velocity
            * self.body_kinetic
            * self.head_kinetic)
            .round() as u32;

        let armor_pierce = velocity * self.head_pierce * self.body_pierce * 0.0175;

        Ok(ShellStats {
            gauge: self.gauge,
            casing_length: self.casing_length,
            projectile_length: self.projectile_length,
            total_length: self.total_length,
            gp_recoil: self.gp_recoil,
            max_draw: self.max_draw,
            reload_time: self.reload_time,
            beltfed_reload: self.beltfed_reload,
            cooldown_time: self.cooldown_time,
            chem_damage: self.chem_damage,
            chem_dps: self.chem_dps,
            chem_dps_belt: self.chem_dps_belt,
            draw,
            velocity,
            kinetic_damage,
            armor_pierce,
        })
    }
}

/// Full derived statistics for one (assembly, draw) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellStats {
    pub gauge: u32,
    pub casing_length: u32,
    pub projectile_length: u32,
    pub total_length: u32,
    pub gp_recoil: f64,
    pub max_draw: u32,
    pub reload_time: f64,
    pub beltfed_reload: Option<f64>,
    pub cooldown_time: f64,
    pub chem_damage: f64,
    pub chem_dps: f64,
    pub chem_dps_belt: Option<f64>,
    pub draw: u32,
    pub velocity: f64,
    pub kinetic_damage: u32,
    pub armor_pierce: f64,
}

/// Kinetic damage per second against one target armor class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticDps {
    pub dps: f64,
    pub belt: Option<f64>,
}

impl ShellStats {
    /// Kinetic DPS against a target armor class.
    ///
    /// The pierce-to-armor ratio is capped at 1.0: excess penetration yields
    /// no bonus damage. `armor_class` must be positive; the search config
    /// enforces a 0.1 floor.
    pub fn kinetic_dps(&self, armor_class: f64) -> KineticDps {
        let effective =
            f64::from(self.kinetic_damage) * (self.armor_pierce / armor_class).min(1.0);
        KineticDps {
            dps: effective / self.reload_time,
            belt: self.beltfed_reload.map(|belt| effective / belt),
        }
    }
}

/// Run the full pipeline for one (assembly, draw) pair.
pub fn evaluate(assembly: &Assembly<'_>, draw: u32) -> Result<ShellStats> {
    DrawPrefix::evaluate(assembly)?.at_draw(draw)
}
