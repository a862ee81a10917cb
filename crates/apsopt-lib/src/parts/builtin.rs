//! Built-in table of stock APS parts.

use once_cell::sync::Lazy;

use super::catalog::Catalog;
use super::def::{PartDef, Payload};

pub(super) static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::default();

    let modules = [
        ("BASE BLEEDER", module("Base Bleeder", 1.15, 1.0, 1.0, 1.0, 100, false, true)),
        ("SUPERCAVITATION BASE", module("Supercavitation Base", 1.0, 1.0, 1.0, 0.75, 100, false, false)),
        ("VISIBLE TRACER", module("Tracer", 1.0, 1.0, 1.0, 1.0, 100, false, false)),
        ("SOLID BODY", module("Solid Body", 1.1, 1.0, 1.0, 1.0, 500, false, false)),
        ("SABOT BODY", module("Sabot Body", 1.1, 1.4, 0.8, 0.25, 500, false, false)),
        ("CHEM BODY", module("Chemical Body", 1.0, 0.1, 1.0, 1.0, 500, true, false)),
        ("FUSE", module("Fuse", 1.0, 1.0, 1.0, 1.0, 100, false, false)),
        ("STABILIZER FIN BODY", module("Fin", 0.95, 1.0, 1.0, 1.0, 300, false, false)),
    ];

    let heads = [
        ("CHEM HEAD", head("Chemical Head", 1.3, 0.1, 1.0, Payload::Bottleneck(1.0), true)),
        ("SQUASH HEAD", head("Squash Head", 1.45, 0.1, 0.1, Payload::Bottleneck(1.0), true)),
        ("SHAPED CHARGE HEAD", head("Shaped Charge Head", 1.45, 0.1, 0.1, Payload::Bottleneck(1.0), true)),
        ("ARMOR PIERCING HEAD", head("AP Head", 1.6, 1.65, 1.0, Payload::Bottleneck(1.0), false)),
        ("SABOT HEAD", head("Sabot Head", 1.6, 2.5, 0.85, Payload::Bottleneck(0.25), false)),
        ("HEAVY HEAD", head("Heavy Head", 1.45, 1.0, 1.65, Payload::Bottleneck(1.0), false)),
        ("HOLLOW POINT HEAD", head("Hollow Point", 1.45, 1.0, 1.2, Payload::Bottleneck(1.0), false)),
        ("SKIMMER TIP", head("Skimmer Tip", 1.6, 1.4, 1.0, Payload::Bottleneck(1.0), false)),
        ("DISRUPTOR CONDUIT", head("Disruptor", 1.6, 0.1, 1.0, Payload::Stacking(0.5), true)),
    ];

    for (id, def) in modules {
        catalog
            .insert_module(id, def)
            .expect("built-in module table is valid");
    }
    for (id, def) in heads {
        catalog
            .insert_head(id, def)
            .expect("built-in head table is valid");
    }

    catalog
});

#[allow(clippy::too_many_arguments)]
fn module(
    name: &str,
    velocity_mod: f64,
    armor_pierce_mod: f64,
    kinetic_damage_mod: f64,
    payload_mod: f64,
    max_length: u32,
    is_chem: bool,
    can_be_required: bool,
) -> PartDef {
    PartDef {
        name: name.to_string(),
        velocity_mod,
        armor_pierce_mod,
        kinetic_damage_mod,
        payload: Payload::Bottleneck(payload_mod),
        is_chem,
        max_length: Some(max_length),
        can_be_required,
    }
}

fn head(
    name: &str,
    velocity_mod: f64,
    armor_pierce_mod: f64,
    kinetic_damage_mod: f64,
    payload: Payload,
    is_chem: bool,
) -> PartDef {
    PartDef {
        name: name.to_string(),
        velocity_mod,
        armor_pierce_mod,
        kinetic_damage_mod,
        payload,
        is_chem,
        max_length: None,
        can_be_required: false,
    }
}

#[cfg(test)]
mod tests {
    use super::super::catalog::Catalog;

    #[test]
    fn builtin_tables_are_complete() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.modules_sorted().len(), 8);
        assert_eq!(catalog.heads_sorted().len(), 9);
    }

    #[test]
    fn disruptor_payload_stacks() {
        let catalog = Catalog::builtin();
        let disruptor = catalog.head("DISRUPTOR CONDUIT").expect("known head");
        assert!(disruptor.payload.stacks());
        assert_eq!(disruptor.payload.value(), 0.5);
    }
}
