//! Technique selectors and the technique catalog
//!
//! Unlike tags, techniques are single-choice: picking one option clears the
//! others in the same selector.

use serde::{Deserialize, Serialize};

use crate::analysis::humanize_technique;

/// A named comedic technique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technique {
    pub slug: &'static str,
    pub description: &'static str,
}

impl Technique {
    pub fn name(&self) -> String {
        humanize_technique(self.slug)
    }
}

/// Form fields backed by a technique selector, in panel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechniqueField {
    Estructura,
    Ruptura,
    Remate,
}

impl TechniqueField {
    pub const ALL: [TechniqueField; 3] = [
        TechniqueField::Estructura,
        TechniqueField::Ruptura,
        TechniqueField::Remate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TechniqueField::Estructura => "Estructura de premisa",
            TechniqueField::Ruptura => "Técnica de ruptura",
            TechniqueField::Remate => "Técnica de justificación",
        }
    }

    /// Panel that holds the selector
    pub fn panel_id(&self) -> &'static str {
        match self {
            TechniqueField::Estructura => "card-premisa",
            TechniqueField::Ruptura => "card-ruptura",
            TechniqueField::Remate => "card-remate",
        }
    }

    pub fn catalog(&self) -> &'static [Technique] {
        match self {
            TechniqueField::Estructura => ESTRUCTURAS,
            TechniqueField::Ruptura => RUPTURAS,
            TechniqueField::Remate => REMATES,
        }
    }
}

const ESTRUCTURAS: &[Technique] = &[
    Technique {
        slug: "concepto-simple",
        description: "Un único concepto del que se extrae el elemento mecánico",
    },
    Technique {
        slug: "concepto-compuesto",
        description: "Dos conceptos que se cruzan (casa + árbol → madera)",
    },
    Technique {
        slug: "por-tipos",
        description: "Se disecciona el concepto por tipos hasta dar con un detalle",
    },
];

const RUPTURAS: &[Technique] = &[
    Technique {
        slug: "personificacion",
        description: "Dar rasgos humanos a lo que no los tiene",
    },
    Technique {
        slug: "exageracion",
        description: "Llevar una característica hasta el extremo",
    },
    Technique {
        slug: "inversion",
        description: "Dar la vuelta a la relación esperada",
    },
    Technique {
        slug: "literalizacion",
        description: "Tomar al pie de la letra una expresión figurada",
    },
];

const REMATES: &[Technique] = &[
    Technique {
        slug: "es-como",
        description: "Se compara la realidad absurda con algo conocido",
    },
    Technique {
        slug: "esto-es-peor-que",
        description: "Se gradúa la realidad absurda frente a otra situación",
    },
    Technique {
        slug: "directo",
        description: "Se muestra la realidad absurda sin mediación",
    },
];

/// Single-choice selector over a fixed list of techniques
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueSelector {
    options: &'static [Technique],
    selected: Option<String>,
}

impl TechniqueSelector {
    pub fn new(options: &'static [Technique]) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn for_field(field: TechniqueField) -> Self {
        Self::new(field.catalog())
    }

    pub fn offers(&self, slug: &str) -> bool {
        self.options.iter().any(|t| t.slug == slug)
    }

    /// Pick an option. Returns false if this selector does not offer it.
    pub fn select(&mut self, slug: &str) -> bool {
        if !self.offers(slug) {
            return false;
        }
        self.selected = Some(slug.to_string());
        true
    }

    /// Store a value as-is, offered or not
    pub fn set_value(&mut self, slug: impl Into<String>) {
        let slug = slug.into();
        self.selected = if slug.is_empty() { None } else { Some(slug) };
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected.as_deref() == Some(slug)
    }

    /// Selected slug, or the empty string
    pub fn value(&self) -> &str {
        self.selected.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_exclusive() {
        let mut selector = TechniqueSelector::for_field(TechniqueField::Ruptura);
        assert!(selector.select("exageracion"));
        assert!(selector.select("inversion"));
        assert!(selector.is_selected("inversion"));
        assert!(!selector.is_selected("exageracion"));
        assert_eq!(selector.value(), "inversion");
    }

    #[test]
    fn test_select_rejects_foreign_slug() {
        let mut selector = TechniqueSelector::for_field(TechniqueField::Remate);
        assert!(!selector.select("exageracion"));
        assert_eq!(selector.value(), "");
    }

    #[test]
    fn test_set_value_accepts_any_slug() {
        let mut selector = TechniqueSelector::for_field(TechniqueField::Remate);
        selector.set_value("mi-tecnica");
        assert_eq!(selector.value(), "mi-tecnica");
        selector.set_value("");
        assert_eq!(selector.value(), "");
    }

    #[test]
    fn test_catalog_slugs_are_unique_across_fields() {
        let mut slugs: Vec<_> = TechniqueField::ALL
            .iter()
            .flat_map(|f| f.catalog().iter().map(|t| t.slug))
            .collect();
        let total = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), total);
    }

    #[test]
    fn test_technique_name() {
        assert_eq!(REMATES[1].name(), "Esto Es Peor Que");
    }
}
