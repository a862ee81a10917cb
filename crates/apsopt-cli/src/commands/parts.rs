//! Parts command handler for listing the catalog tables.

use anyhow::Result;
use serde::Serialize;

use apsopt_lib::{Catalog, PartDef};

use crate::output::{self, Format};

#[derive(Serialize)]
struct PartRow<'a> {
    id: &'a str,
    name: &'a str,
    velocity_mod: f64,
    armor_pierce_mod: f64,
    kinetic_damage_mod: f64,
    payload_mod: f64,
    payload_stacks: bool,
    is_chem: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
    can_be_required: bool,
}

#[derive(Serialize)]
struct PartListing<'a> {
    modules: Vec<PartRow<'a>>,
    heads: Vec<PartRow<'a>>,
}

impl<'a> PartRow<'a> {
    fn new(id: &'a str, def: &'a PartDef) -> Self {
        Self {
            id,
            name: &def.name,
            velocity_mod: def.velocity_mod,
            armor_pierce_mod: def.armor_pierce_mod,
            kinetic_damage_mod: def.kinetic_damage_mod,
            payload_mod: def.payload.value(),
            payload_stacks: def.payload.stacks(),
            is_chem: def.is_chem,
            max_length: def.max_length,
            can_be_required: def.can_be_required,
        }
    }
}

/// Handle the parts subcommand.
pub fn handle(catalog: &Catalog, format: Format) -> Result<()> {
    let modules = catalog.modules_sorted();
    let heads = catalog.heads_sorted();

    match format {
        Format::Text => print_tables(&modules, &heads),
        Format::Json => {
            let listing = PartListing {
                modules: modules
                    .iter()
                    .map(|&(id, def)| PartRow::new(id, def))
                    .collect(),
                heads: heads.iter().map(|&(id, def)| PartRow::new(id, def)).collect(),
            };
            output::print_json(&listing)?;
        }
    }
    Ok(())
}

fn print_tables(modules: &[(&str, &PartDef)], heads: &[(&str, &PartDef)]) {
    println!("Body modules ({}):", modules.len());
    println!(
        "{:<22} {:<20} {:>5} {:>5} {:>5} {:>8} {:>8} {:>5}",
        "Identifier", "Name", "Vel", "AP", "KD", "Payload", "MaxLen", "Chem"
    );
    for (id, def) in modules {
        println!(
            "{:<22} {:<20} {:>5.2} {:>5.2} {:>5.2} {:>8} {:>8} {:>5}",
            id,
            def.name,
            def.velocity_mod,
            def.armor_pierce_mod,
            def.kinetic_damage_mod,
            payload_column(def),
            def.max_length.map_or_else(String::new, |len| len.to_string()),
            if def.is_chem { "yes" } else { "no" },
        );
    }

    println!();
    println!("Heads ({}):", heads.len());
    println!(
        "{:<22} {:<20} {:>5} {:>5} {:>5} {:>8} {:>5}",
        "Identifier", "Name", "Vel", "AP", "KD", "Payload", "Chem"
    );
    for (id, def) in heads {
        println!(
            "{:<22} {:<20} {:>5.2} {:>5.2} {:>5.2} {:>8} {:>5}",
            id,
            def.name,
            def.velocity_mod,
            def.armor_pierce_mod,
            def.kinetic_damage_mod,
            payload_column(def),
            if def.is_chem { "yes" } else { "no" },
        );
    }
}

fn payload_column(def: &PartDef) -> String {
    if def.payload.stacks() {
        format!("{:.2}x", def.payload.value())
    } else {
        format!("{:.2}", def.payload.value())
    }
}
