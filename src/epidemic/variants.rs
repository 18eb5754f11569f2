use crate::epidemic::Compartment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compartmental structure simulated by a run. The variant decides which
/// guarded transitions are active, which isolation zones are prepared and
/// whether initially contaminated agents start Exposed or Infected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Sir,
    Seir,
    Seiqr,
    Seirv,
    Seihr,
}

impl ModelKind {
    /// Variants with an incubation stage transmit through Exposed rather
    /// than straight to Infected.
    pub fn has_incubation(self) -> bool {
        self != ModelKind::Sir
    }

    /// Query if the variant reserves a quarantine zone.
    pub fn uses_quarantine(self) -> bool {
        self == ModelKind::Seiqr
    }

    /// Query if the variant reserves a hospital zone.
    pub fn uses_hospital(self) -> bool {
        self == ModelKind::Seihr
    }

    /// Query if the variant vaccinates susceptible agents.
    pub fn uses_vaccination(self) -> bool {
        self == ModelKind::Seirv
    }

    /// Compartment assigned to the first `initialI` agents at construction.
    pub fn seed_compartment(self) -> Compartment {
        if self.has_incubation() {
            Compartment::Exposed
        } else {
            Compartment::Infected
        }
    }

    /// Uppercase name for overlays and logs.
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::Sir => "SIR",
            ModelKind::Seir => "SEIR",
            ModelKind::Seiqr => "SEIQR",
            ModelKind::Seirv => "SEIRV",
            ModelKind::Seihr => "SEIHR",
        }
    }
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Sir
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        model: ModelKind,
    }

    #[test]
    fn wire_names_match_the_form_layer() {
        for (name, kind) in &[
            ("sir", ModelKind::Sir),
            ("seir", ModelKind::Seir),
            ("seiqr", ModelKind::Seiqr),
            ("seirv", ModelKind::Seirv),
            ("seihr", ModelKind::Seihr),
        ] {
            let probe: Probe = toml::from_str(&format!("model = \"{}\"", name)).unwrap();
            assert_eq!(probe.model, *kind);
        }
    }

    #[test]
    fn seed_compartments() {
        assert_eq!(ModelKind::Sir.seed_compartment(), Compartment::Infected);
        for kind in &[
            ModelKind::Seir,
            ModelKind::Seiqr,
            ModelKind::Seirv,
            ModelKind::Seihr,
        ] {
            assert_eq!(kind.seed_compartment(), Compartment::Exposed);
        }
    }

    #[test]
    fn zones_per_variant() {
        assert!(ModelKind::Seiqr.uses_quarantine());
        assert!(!ModelKind::Seiqr.uses_hospital());
        assert!(ModelKind::Seihr.uses_hospital());
        assert!(!ModelKind::Seihr.uses_quarantine());
        assert!(!ModelKind::Sir.uses_quarantine());
        assert!(ModelKind::Seirv.uses_vaccination());
    }
}
