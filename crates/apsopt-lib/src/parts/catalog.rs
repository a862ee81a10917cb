use std::{collections::HashMap, fs, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{Error, Result};

use super::def::{PartDef, Payload};

/// Which catalog table a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Module,
    Head,
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    kind: PartKind,
    id: String,
    name: String,
    velocity_mod: f64,
    armor_pierce_mod: f64,
    kinetic_damage_mod: f64,
    payload_mod: f64,
    #[serde(default)]
    payload_stacks: bool,
    #[serde(default)]
    is_chem: bool,
    #[serde(default)]
    max_length: Option<u32>,
    #[serde(default)]
    can_be_required: bool,
}

/// Read-only lookup from case-normalized identifier to part definition.
///
/// Body modules and heads live in separate tables, mirroring the in-game
/// distinction: a head can only ever be the frontmost part of a shell.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    modules: HashMap<String, PartDef>,
    heads: HashMap<String, PartDef>,
}

impl Catalog {
    /// The built-in table of stock APS parts.
    pub fn builtin() -> &'static Catalog {
        &super::builtin::BUILTIN
    }

    /// Load a catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a catalog from CSV data.
    ///
    /// Expected columns: kind (module|head), id, name, velocity_mod,
    /// armor_pierce_mod, kinetic_damage_mod, payload_mod, payload_stacks,
    /// is_chem, max_length (empty for heads), can_be_required.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
        let mut catalog = Self::default();

        for record in csv_reader.deserialize::<CsvRecord>() {
            let record = record?;
            let payload = if record.payload_stacks {
                Payload::Stacking(record.payload_mod)
            } else {
                Payload::Bottleneck(record.payload_mod)
            };
            let def = PartDef {
                name: record.name.trim().to_string(),
                velocity_mod: record.velocity_mod,
                armor_pierce_mod: record.armor_pierce_mod,
                kinetic_damage_mod: record.kinetic_damage_mod,
                payload,
                is_chem: record.is_chem,
                max_length: record.max_length,
                can_be_required: record.can_be_required,
            };
            match record.kind {
                PartKind::Module => catalog.insert_module(&record.id, def)?,
                PartKind::Head => catalog.insert_head(&record.id, def)?,
            }
        }

        Ok(catalog)
    }

    pub fn insert_module(&mut self, id: &str, def: PartDef) -> Result<()> {
        def.validate()?;
        if def.max_length.is_none() {
            return Err(Error::PartValidation {
                message: format!("body module '{id}' requires a max_length"),
            });
        }
        let key = normalize_id(id);
        if self.modules.contains_key(&key) {
            return Err(Error::DuplicatePartName { name: key });
        }
        self.modules.insert(key, def);
        Ok(())
    }

    pub fn insert_head(&mut self, id: &str, def: PartDef) -> Result<()> {
        def.validate()?;
        if def.max_length.is_some() {
            return Err(Error::PartValidation {
                message: format!("head '{id}' must not carry a max_length"),
            });
        }
        let key = normalize_id(id);
        if self.heads.contains_key(&key) {
            return Err(Error::DuplicatePartName { name: key });
        }
        self.heads.insert(key, def);
        Ok(())
    }

    /// Look up a body module by identifier (case-insensitive).
    pub fn module(&self, id: &str) -> Result<&PartDef> {
        self.modules
            .get(&normalize_id(id))
            .ok_or_else(|| Error::UnknownModule {
                name: id.to_string(),
                suggestions: fuzzy_matches(self.modules.keys(), id, 3),
            })
    }

    /// Look up a head by identifier (case-insensitive).
    pub fn head(&self, id: &str) -> Result<&PartDef> {
        self.heads
            .get(&normalize_id(id))
            .ok_or_else(|| Error::UnknownHead {
                name: id.to_string(),
                suggestions: fuzzy_matches(self.heads.keys(), id, 3),
            })
    }

    /// Body module entries sorted by identifier.
    pub fn modules_sorted(&self) -> Vec<(&str, &PartDef)> {
        let mut entries: Vec<(&str, &PartDef)> = self
            .modules
            .iter()
            .map(|(key, def)| (key.as_str(), def))
            .collect();
        entries.sort_by_key(|(key, _)| *key);
        entries
    }

    /// Head entries sorted by identifier.
    pub fn heads_sorted(&self) -> Vec<(&str, &PartDef)> {
        let mut entries: Vec<(&str, &PartDef)> = self
            .heads
            .iter()
            .map(|(key, def)| (key.as_str(), def))
            .collect();
        entries.sort_by_key(|(key, _)| *key);
        entries
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_uppercase()
}

/// Close identifier matches for "did you mean" suggestions.
fn fuzzy_matches<'a>(
    keys: impl Iterator<Item = &'a String>,
    query: &str,
    limit: usize,
) -> Vec<String> {
    let query = normalize_id(query);
    let mut scored: Vec<(f64, &str)> = keys
        .filter_map(|key| {
            let score = strsim::jaro_winkler(&query, key);
            (score >= 0.7).then_some((score, key.as_str()))
        })
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, key)| key.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let upper = catalog.module("SOLID BODY").expect("known module");
        let lower = catalog.module("solid body").expect("known module");
        assert_eq!(upper, lower);
        assert_eq!(upper.name, "Solid Body");
    }

    #[test]
    fn builtin_separates_modules_and_heads() {
        let catalog = Catalog::builtin();
        assert!(catalog.head("ARMOR PIERCING HEAD").is_ok());
        assert!(catalog.module("ARMOR PIERCING HEAD").is_err());
        assert!(catalog.head("SOLID BODY").is_err());
    }

    #[test]
    fn unknown_module_suggests_close_matches() {
        let catalog = Catalog::builtin();
        let err = catalog.module("solid bdy").expect_err("unknown module");
        let message = err.to_string();
        assert!(message.contains("unknown body module"));
        assert!(message.contains("SOLID BODY"));
    }

    #[test]
    fn very_different_name_gets_no_suggestion() {
        let catalog = Catalog::builtin();
        let err = catalog.module("qqqqzzzz").expect_err("unknown module");
        assert!(!err.to_string().contains("Did you mean"));
    }

    #[test]
    fn csv_round_trip() {
        let data = "\
kind,id,name,velocity_mod,armor_pierce_mod,kinetic_damage_mod,payload_mod,payload_stacks,is_chem,max_length,can_be_required
module,TEST BODY,Test Body,1.1,1.0,1.0,1.0,false,false,500,true
head,TEST HEAD,Test Head,1.5,1.2,1.0,0.5,true,true,,false
";
        let catalog = Catalog::from_reader(data.as_bytes()).expect("csv parses");
        let module = catalog.module("test body").expect("module present");
        assert_eq!(module.max_length, Some(500));
        assert!(module.can_be_required);
        let head = catalog.head("TEST HEAD").expect("head present");
        assert!(head.payload.stacks());
        assert!(head.is_chem);
        assert_eq!(head.max_length, None);
    }

    #[test]
    fn csv_duplicate_id_rejected() {
        let data = "\
kind,id,name,velocity_mod,armor_pierce_mod,kinetic_damage_mod,payload_mod,payload_stacks,is_chem,max_length,can_be_required
module,TEST BODY,Test Body,1.1,1.0,1.0,1.0,false,false,500,false
module,test body,Other Body,1.0,1.0,1.0,1.0,false,false,100,false
";
        assert!(matches!(
            Catalog::from_reader(data.as_bytes()),
            Err(Error::DuplicatePartName { .. })
        ));
    }

    #[test]
    fn csv_module_without_max_length_rejected() {
        let data = "\
kind,id,name,velocity_mod,armor_pierce_mod,kinetic_damage_mod,payload_mod,payload_stacks,is_chem,max_length,can_be_required
module,TEST BODY,Test Body,1.1,1.0,1.0,1.0,false,false,,false
";
        assert!(matches!(
            Catalog::from_reader(data.as_bytes()),
            Err(Error::PartValidation { .. })
        ));
    }
}
