//! Tag Toggle
//!
//! Each analysis panel owns a row of tag chips. Chips toggle independently;
//! there is no exclusion between them and nothing survives the form.

use serde::{Deserialize, Serialize};

/// Panels that carry their own tag chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Premisa,
    Ruptura,
    Remate,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Premisa, Section::Ruptura, Section::Remate];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Premisa => "Premisa",
            Section::Ruptura => "Ruptura",
            Section::Remate => "Remate",
        }
    }

    /// Chips offered on a fresh form
    pub fn default_tags(&self) -> &'static [&'static str] {
        match self {
            Section::Premisa => &[
                "Observacional",
                "Autobiográfico",
                "Cotidiano",
                "Social",
                "Familia",
                "Relaciones",
            ],
            Section::Ruptura => &["Absurdo", "Realidad alterada", "Doble sentido", "Lógica interna"],
            Section::Remate => &["Comparación", "Escalada", "Lista", "Callback"],
        }
    }
}

/// One tag chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    pub selected: bool,
}

/// The chips of one panel, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPanel {
    chips: Vec<TagChip>,
}

impl TagPanel {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut panel = Self::default();
        for label in labels {
            panel.add_tag(label);
        }
        panel
    }

    /// Panel preloaded with the section's default chips
    pub fn for_section(section: Section) -> Self {
        Self::new(section.default_tags().iter().copied())
    }

    /// Flip one chip. Returns the new state, or `None` for an unknown label.
    pub fn toggle(&mut self, label: &str) -> Option<bool> {
        let chip = self.chips.iter_mut().find(|c| c.label == label.trim())?;
        chip.selected = !chip.selected;
        Some(chip.selected)
    }

    pub fn set_selected(&mut self, label: &str, selected: bool) -> bool {
        match self.chips.iter_mut().find(|c| c.label == label.trim()) {
            Some(chip) => {
                chip.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Append a new, unselected chip. Blank and repeated labels are ignored.
    pub fn add_tag(&mut self, label: impl Into<String>) -> bool {
        let label = label.into().trim().to_string();
        if label.is_empty() || self.contains(&label) {
            return false;
        }
        self.chips.push(TagChip {
            label,
            selected: false,
        });
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.chip(label).is_some()
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.chip(label).is_some_and(|c| c.selected)
    }

    fn chip(&self, label: &str) -> Option<&TagChip> {
        let label = label.trim();
        self.chips.iter().find(|c| c.label == label)
    }

    pub fn chips(&self) -> &[TagChip] {
        &self.chips
    }

    /// Selected labels in chip order
    pub fn selected(&self) -> Vec<String> {
        self.chips
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.label.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_independent() {
        let mut panel = TagPanel::new(["a", "b", "c"]);
        assert_eq!(panel.toggle("a"), Some(true));
        assert_eq!(panel.toggle("c"), Some(true));
        assert_eq!(panel.selected(), vec!["a", "c"]);

        assert_eq!(panel.toggle("a"), Some(false));
        assert_eq!(panel.selected(), vec!["c"]);
    }

    #[test]
    fn test_selected_follows_chip_order() {
        let mut panel = TagPanel::new(["a", "b", "c"]);
        panel.toggle("c");
        panel.toggle("a");
        assert_eq!(panel.selected(), vec!["a", "c"]);
    }

    #[test]
    fn test_toggle_unknown_label() {
        let mut panel = TagPanel::new(["a"]);
        assert_eq!(panel.toggle("zzz"), None);
    }

    #[test]
    fn test_add_tag_trims_and_rejects_duplicates() {
        let mut panel = TagPanel::new(["a"]);
        assert!(panel.add_tag("  nuevo "));
        assert!(!panel.add_tag("nuevo"));
        assert!(!panel.add_tag("   "));
        assert!(panel.contains("nuevo"));
        assert!(!panel.is_selected("nuevo"));
        assert_eq!(panel.chips().len(), 2);
    }

    #[test]
    fn test_lookups_trim_like_toggle() {
        let mut panel = TagPanel::for_section(Section::Premisa);
        let label = format!(" {} ", panel.chips()[0].label);

        assert!(panel.contains(&label));
        assert!(!panel.is_selected(&label));
        assert_eq!(panel.toggle(&label), Some(true));
        assert!(panel.is_selected(&label));
        assert!(panel.is_selected(label.trim()));
        assert!(!panel.add_tag(label.clone()));
    }

    #[test]
    fn test_section_defaults() {
        for section in Section::ALL {
            let panel = TagPanel::for_section(section);
            assert_eq!(panel.chips().len(), section.default_tags().len());
            assert!(panel.selected().is_empty());
        }
    }
}
