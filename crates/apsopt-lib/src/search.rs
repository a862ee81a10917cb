//! Exhaustive assembly search.
//!
//! Enumerates every legal combination of gauge, head, gunpowder and railgun
//! casings, and up to two filler body modules, evaluates the stat pipeline
//! across the full rail draw range, and keeps the best kinetic DPS per
//! (target armor class, loader length) on a [`Leaderboard`]. The hot loop is
//! pure computation; progress reporting goes through throttled tracing
//! events.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::leaderboard::Leaderboard;
use crate::parts::{Catalog, PartDef};
use crate::shell::{
    quantize_gp, Assembly, DrawPrefix, ShellReport, MAX_GAUGE, MIN_GAUGE, SLOT_BUDGET,
};

/// Hard ceiling for the configured rail draw sweep.
pub const MAX_RAIL_DRAW_LIMIT: u32 = 200_000;

const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Engineer-supplied bounds for one search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Body modules present in every tested shell, rearmost first.
    pub required_modules: Vec<String>,
    /// Up to two module types whose counts the search sweeps. Each chosen
    /// filler appears at least once in every tested shell.
    pub filler_modules: Vec<String>,
    /// Heads to trial.
    pub heads: Vec<String>,
    /// Largest rail draw to test.
    pub max_rail_draw: u32,
    /// Largest gunpowder casing count to test, swept in 0.01 steps.
    pub max_gp_casings: f64,
    /// Largest railgun casing count to test.
    pub max_rg_casings: u32,
    /// Target armor classes, each at least 0.1.
    pub target_acs: Vec<f64>,
    /// Smallest gauge to test, mm.
    pub min_gauge: u32,
    /// Largest gauge to test, mm.
    pub max_gauge: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            required_modules: Vec::new(),
            filler_modules: Vec::new(),
            heads: Vec::new(),
            max_rail_draw: 0,
            max_gp_casings: 0.0,
            max_rg_casings: 0,
            target_acs: Vec::new(),
            min_gauge: MIN_GAUGE,
            max_gauge: MAX_GAUGE,
        }
    }
}

struct ResolvedConfig<'a> {
    required: Vec<&'a PartDef>,
    fillers: Vec<&'a PartDef>,
    heads: Vec<&'a PartDef>,
    /// Slots left for casings and extra filler units after the required
    /// modules, the head, and one reserved unit per filler type.
    slot_budget: u32,
}

impl SearchConfig {
    fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<ResolvedConfig<'a>> {
        if self.heads.is_empty() {
            return Err(Error::SearchConfig {
                message: "at least one head must be selected".to_string(),
            });
        }
        if self.target_acs.is_empty() {
            return Err(Error::SearchConfig {
                message: "at least one target armor class must be given".to_string(),
            });
        }
        for &ac in &self.target_acs {
            if !ac.is_finite() || ac < 0.1 {
                return Err(Error::SearchConfig {
                    message: format!("target armor class {ac} must be at least 0.1"),
                });
            }
        }
        if self.max_rail_draw > MAX_RAIL_DRAW_LIMIT {
            return Err(Error::SearchConfig {
                message: format!(
                    "max rail draw {} exceeds the {MAX_RAIL_DRAW_LIMIT} limit",
                    self.max_rail_draw
                ),
            });
        }
        if self.filler_modules.len() > 2 {
            return Err(Error::SearchConfig {
                message: "at most two filler module types may be selected".to_string(),
            });
        }
        if self.required_modules.is_empty() && self.filler_modules.is_empty() {
            return Err(Error::SearchConfig {
                message: "select at least one required or filler module; \
                          shells need a body"
                    .to_string(),
            });
        }
        if self.min_gauge < MIN_GAUGE
            || self.max_gauge > MAX_GAUGE
            || self.min_gauge > self.max_gauge
        {
            return Err(Error::SearchConfig {
                message: format!(
                    "gauge range {}-{} must lie within {MIN_GAUGE}-{MAX_GAUGE}",
                    self.min_gauge, self.max_gauge
                ),
            });
        }

        let required = self
            .required_modules
            .iter()
            .map(|name| catalog.module(name))
            .collect::<Result<Vec<_>>>()?;
        let fillers = self
            .filler_modules
            .iter()
            .map(|name| catalog.module(name))
            .collect::<Result<Vec<_>>>()?;
        let heads = self
            .heads
            .iter()
            .map(|name| catalog.head(name))
            .collect::<Result<Vec<_>>>()?;

        let reserved = (required.len() + 1 + fillers.len()) as u32;
        if reserved > SLOT_BUDGET {
            return Err(Error::SearchConfig {
                message: format!(
                    "selected modules occupy {reserved} slots; only {SLOT_BUDGET} exist"
                ),
            });
        }
        let slot_budget = SLOT_BUDGET - reserved;

        if !self.max_gp_casings.is_finite() || self.max_gp_casings < 0.0 {
            return Err(Error::SearchConfig {
                message: format!(
                    "max gunpowder casing count {} must be non-negative",
                    self.max_gp_casings
                ),
            });
        }
        if quantize_gp(self.max_gp_casings) > f64::from(slot_budget) {
            return Err(Error::SearchConfig {
                message: format!(
                    "max gunpowder casing count {} exceeds the {slot_budget} free slots",
                    self.max_gp_casings
                ),
            });
        }
        if self.max_rg_casings > slot_budget {
            return Err(Error::SearchConfig {
                message: format!(
                    "max railgun casing count {} exceeds the {slot_budget} free slots",
                    self.max_rg_casings
                ),
            });
        }

        Ok(ResolvedConfig {
            required,
            fillers,
            heads,
            slot_budget,
        })
    }
}

/// Result of one search run.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub leaderboard: Leaderboard,
    /// Number of evaluated (assembly, draw) pairs.
    pub shells_tested: u64,
}

/// Run the exhaustive search described by `config` against `catalog`.
///
/// A single bad iteration is logged and skipped; the search itself only
/// fails on an invalid configuration.
pub fn run(catalog: &Catalog, config: &SearchConfig) -> Result<SearchOutcome> {
    let resolved = config.resolve(catalog)?;
    let mut leaderboard = Leaderboard::new(&config.target_acs);
    let mut shells_tested: u64 = 0;
    let mut next_progress = PROGRESS_INTERVAL;
    let gp_steps = (quantize_gp(config.max_gp_casings) * 100.0).round() as u32;

    info!(
        min_gauge = config.min_gauge,
        max_gauge = config.max_gauge,
        heads = resolved.heads.len(),
        max_rail_draw = config.max_rail_draw,
        "starting search"
    );

    for gauge in config.min_gauge..=config.max_gauge {
        for &head in &resolved.heads {
            for gp_hundredths in 0..=gp_steps {
                let gp = f64::from(gp_hundredths) / 100.0;
                let after_gp = (f64::from(resolved.slot_budget) - gp).floor().max(0.0) as u32;
                let rg_cap = config.max_rg_casings.min(after_gp);
                for rg in 0..=rg_cap {
                    let remaining = after_gp - rg;
                    for (count_1, count_2) in filler_counts(resolved.fillers.len(), remaining) {
                        let mut body: Vec<&PartDef> = Vec::with_capacity(
                            resolved.required.len() + (count_1 + count_2) as usize,
                        );
                        body.extend_from_slice(&resolved.required);
                        if let Some(&filler) = resolved.fillers.first() {
                            body.extend(std::iter::repeat(filler).take(count_1 as usize));
                        }
                        if let Some(&filler) = resolved.fillers.get(1) {
                            body.extend(std::iter::repeat(filler).take(count_2 as usize));
                        }

                        // Slot arithmetic above guarantees these succeed; a
                        // failure aborts only this combination.
                        let assembly = match Assembly::new(gauge, gp, rg, body, head) {
                            Ok(assembly) => assembly,
                            Err(err) => {
                                debug!(%err, gauge, gp, rg, "skipping invalid combination");
                                continue;
                            }
                        };
                        let prefix = match DrawPrefix::evaluate(&assembly) {
                            Ok(prefix) => prefix,
                            Err(err) => {
                                debug!(%err, gauge, gp, rg, "skipping combination");
                                continue;
                            }
                        };
                        let module_names = assembly.module_names();
                        let draw_cap = prefix.max_draw.min(config.max_rail_draw);

                        for draw in 0..=draw_cap {
                            shells_tested += 1;
                            if shells_tested >= next_progress {
                                info!(shells_tested, gauge, "search progress");
                                next_progress += PROGRESS_INTERVAL;
                            }
                            let stats = match prefix.at_draw(draw) {
                                Ok(stats) => stats,
                                Err(err) => {
                                    debug!(%err, gauge, draw, "skipping draw");
                                    continue;
                                }
                            };
                            for (ac_index, &ac) in config.target_acs.iter().enumerate() {
                                let kinetic = stats.kinetic_dps(ac);
                                if leaderboard.improves(ac_index, stats.total_length, kinetic.dps)
                                {
                                    let report = ShellReport::new(
                                        gp,
                                        rg,
                                        module_names.clone(),
                                        &stats,
                                        kinetic,
                                    );
                                    leaderboard.offer(ac_index, &report);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    info!(shells_tested, "search complete");
    Ok(SearchOutcome {
        leaderboard,
        shells_tested,
    })
}

/// Filler unit counts to test given the free slots left after casings.
///
/// Every chosen filler type keeps its reserved unit, so a shell always
/// carries at least one of each; the extras sweep the remaining slots.
fn filler_counts(filler_types: usize, remaining: u32) -> Vec<(u32, u32)> {
    match filler_types {
        0 => vec![(0, 0)],
        1 => (0..=remaining).map(|extra| (1 + extra, 0)).collect(),
        _ => {
            let mut counts = Vec::new();
            for extra_1 in 0..=remaining {
                for extra_2 in 0..=(remaining - extra_1) {
                    counts.push((1 + extra_1, 1 + extra_2));
                }
            }
            counts
        }
    }
}
