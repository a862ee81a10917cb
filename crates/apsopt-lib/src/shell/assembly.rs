use crate::error::{Error, Result};
use crate::parts::PartDef;

/// Smallest legal gauge in mm.
pub const MIN_GAUGE: u32 = 18;
/// Largest legal gauge in mm.
pub const MAX_GAUGE: u32 = 500;
/// Loader slots available to one shell, casings and head included.
pub const SLOT_BUDGET: u32 = 20;

/// A concrete shell configuration: gauge, casings, ordered body modules and
/// exactly one head.
///
/// Rail draw is not part of the assembly; the model takes it as a parameter
/// so the search can sweep draws against one fixed configuration.
#[derive(Debug, Clone)]
pub struct Assembly<'a> {
    gauge: u32,
    gp_casings: f64,
    rg_casings: u32,
    body: Vec<&'a PartDef>,
    head: &'a PartDef,
}

impl<'a> Assembly<'a> {
    /// Build and validate an assembly.
    ///
    /// Gunpowder casings are quantized to 0.01. The body list is ordered
    /// rearmost-first; it may be empty here, but the stat pipeline requires
    /// at least one body module.
    pub fn new(
        gauge: u32,
        gp_casings: f64,
        rg_casings: u32,
        body: Vec<&'a PartDef>,
        head: &'a PartDef,
    ) -> Result<Self> {
        if !(MIN_GAUGE..=MAX_GAUGE).contains(&gauge) {
            return Err(Error::GaugeOutOfRange { gauge });
        }
        if !gp_casings.is_finite() || gp_casings < 0.0 {
            return Err(Error::InvalidCasingCount {
                message: format!("gunpowder casing count {gp_casings} must be non-negative"),
            });
        }
        let gp_casings = quantize_gp(gp_casings);

        let used = body.len() as f64 + 1.0 + gp_casings + f64::from(rg_casings);
        if used > f64::from(SLOT_BUDGET) + 1e-9 {
            return Err(Error::SlotBudgetExceeded {
                used,
                budget: SLOT_BUDGET,
            });
        }

        Ok(Self {
            gauge,
            gp_casings,
            rg_casings,
            body,
            head,
        })
    }

    pub fn gauge(&self) -> u32 {
        self.gauge
    }

    pub fn gp_casings(&self) -> f64 {
        self.gp_casings
    }

    pub fn rg_casings(&self) -> u32 {
        self.rg_casings
    }

    pub fn body(&self) -> &[&'a PartDef] {
        &self.body
    }

    pub fn head(&self) -> &'a PartDef {
        self.head
    }

    /// Display names of all parts in order, head last.
    pub fn module_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.body.iter().map(|m| m.name.clone()).collect();
        names.push(self.head.name.clone());
        names
    }
}

/// Gunpowder casings are settable to two decimal places in game.
pub(crate) fn quantize_gp(gp: f64) -> f64 {
    (gp * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::Catalog;

    #[test]
    fn gauge_bounds_enforced() {
        let catalog = Catalog::builtin();
        let body = vec![catalog.module("SOLID BODY").unwrap()];
        let head = catalog.head("ARMOR PIERCING HEAD").unwrap();
        assert!(matches!(
            Assembly::new(17, 0.0, 0, body.clone(), head),
            Err(Error::GaugeOutOfRange { gauge: 17 })
        ));
        assert!(matches!(
            Assembly::new(501, 0.0, 0, body.clone(), head),
            Err(Error::GaugeOutOfRange { gauge: 501 })
        ));
        assert!(Assembly::new(500, 0.0, 0, body, head).is_ok());
    }

    #[test]
    fn negative_gp_rejected() {
        let catalog = Catalog::builtin();
        let body = vec![catalog.module("SOLID BODY").unwrap()];
        let head = catalog.head("ARMOR PIERCING HEAD").unwrap();
        assert!(matches!(
            Assembly::new(100, -0.5, 0, body, head),
            Err(Error::InvalidCasingCount { .. })
        ));
    }

    #[test]
    fn gp_is_quantized() {
        let catalog = Catalog::builtin();
        let body = vec![catalog.module("SOLID BODY").unwrap()];
        let head = catalog.head("ARMOR PIERCING HEAD").unwrap();
        let assembly = Assembly::new(100, 1.005, 0, body, head).unwrap();
        assert_eq!(assembly.gp_casings(), 1.01);
    }

    #[test]
    fn slot_budget_enforced() {
        let catalog = Catalog::builtin();
        let solid = catalog.module("SOLID BODY").unwrap();
        let head = catalog.head("ARMOR PIERCING HEAD").unwrap();
        let body: Vec<_> = std::iter::repeat(solid).take(19).collect();
        // 19 body + 1 head fits exactly; one casing pushes past 20.
        assert!(Assembly::new(100, 0.0, 0, body.clone(), head).is_ok());
        assert!(matches!(
            Assembly::new(100, 0.0, 1, body, head),
            Err(Error::SlotBudgetExceeded { .. })
        ));
    }

    #[test]
    fn module_names_put_head_last() {
        let catalog = Catalog::builtin();
        let body = vec![
            catalog.module("FUSE").unwrap(),
            catalog.module("SOLID BODY").unwrap(),
        ];
        let head = catalog.head("ARMOR PIERCING HEAD").unwrap();
        let assembly = Assembly::new(200, 0.0, 0, body, head).unwrap();
        assert_eq!(assembly.module_names(), vec!["Fuse", "Solid Body", "AP Head"]);
    }
}
