use crate::error::{Error, Result};

/// How a part's payload modifier combines with the rest of the shell.
///
/// Almost every part participates in a worst-case minimum across the whole
/// shell: any single restrictive module caps the payload. The disruptor
/// conduit is the exception; its modifier stacks multiplicatively on top of
/// the body minimum instead of joining it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    /// Joins the minimum-selection across the shell.
    Bottleneck(f64),
    /// Multiplies the body minimum by a flat factor.
    Stacking(f64),
}

impl Payload {
    /// The raw modifier value, regardless of combination rule.
    pub fn value(self) -> f64 {
        match self {
            Payload::Bottleneck(value) | Payload::Stacking(value) => value,
        }
    }

    pub fn stacks(self) -> bool {
        matches!(self, Payload::Stacking(_))
    }
}

/// Definition of one shell part, either a body module or a head.
///
/// Heads carry no length cap (`max_length` is `None`); they always occupy one
/// gauge of projectile length. Body modules are capped at `max_length` mm.
#[derive(Debug, Clone, PartialEq)]
pub struct PartDef {
    /// Display name as shown in game.
    pub name: String,
    /// Velocity modifier (multiplicative, positive).
    pub velocity_mod: f64,
    /// Armor pierce modifier.
    pub armor_pierce_mod: f64,
    /// Kinetic damage modifier.
    pub kinetic_damage_mod: f64,
    /// Payload modifier and its combination rule.
    pub payload: Payload,
    /// Whether the part carries a chemical payload (HE, frag, EMP and so on).
    pub is_chem: bool,
    /// Maximum physical length in mm for body modules; `None` for heads.
    pub max_length: Option<u32>,
    /// Whether the module may satisfy a mandatory slot in a search.
    pub can_be_required: bool,
}

impl PartDef {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::PartValidation {
                message: "part name must not be empty".to_string(),
            });
        }

        let fields = [
            (self.velocity_mod, "velocity_mod"),
            (self.armor_pierce_mod, "armor_pierce_mod"),
            (self.kinetic_damage_mod, "kinetic_damage_mod"),
            (self.payload.value(), "payload_mod"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::PartValidation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        if self.max_length == Some(0) {
            return Err(Error::PartValidation {
                message: "max_length must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Projectile length contributed at the given gauge, honoring the cap.
    pub fn module_length(&self, gauge: u32) -> u32 {
        match self.max_length {
            Some(cap) => gauge.min(cap),
            None => gauge,
        }
    }
}
