//! Form State
//!
//! Everything the analysis form holds between keystrokes, as one explicit
//! value. Rendering layers read from it and call its operations; nothing
//! here touches a DOM or a terminal.
//!
//! ## Components
//!
//! - [`view`]: which top-level panel is visible
//! - [`wizard`]: the four-step progress indicator
//! - [`rows`]: dissection and situation rows
//! - [`tags`]: per-panel tag chips
//! - [`technique`]: single-choice technique selectors and their catalog

pub mod rows;
pub mod tags;
pub mod technique;
pub mod view;
pub mod wizard;

pub use rows::{situation_placeholder, DissectionRow, RowId, RowList};
pub use tags::{Section, TagChip, TagPanel};
pub use technique::{Technique, TechniqueField, TechniqueSelector};
pub use view::{select_view, View, ViewState};
pub use wizard::{StepIndicator, StepStatus, StepWizard, STEP_COUNT};

use crate::analysis::{Analysis, DissectionItem, Joke, Premisa, Remate, Ruptura};

/// The whole analysis form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub view: ViewState,
    pub wizard: StepWizard,

    pub joke: Joke,

    pub concepto: String,
    pub diseccion: RowList<DissectionRow>,
    pub elemento_mecanico: String,
    pub estructura: TechniqueSelector,
    pub premisa_tags: TagPanel,

    pub tecnica_ruptura: TechniqueSelector,
    pub caracteristica: String,
    pub ruptura_tags: TagPanel,

    pub tecnica_remate: TechniqueSelector,
    pub situaciones: RowList<String>,
    pub remate_tags: TagPanel,
}

impl Default for FormState {
    fn default() -> Self {
        let mut diseccion = RowList::new();
        diseccion.add_row();
        let mut situaciones = RowList::new();
        situaciones.add_row();

        Self {
            view: ViewState::default(),
            wizard: StepWizard::new(),
            joke: Joke::default(),
            concepto: String::new(),
            diseccion,
            elemento_mecanico: String::new(),
            estructura: TechniqueSelector::for_field(TechniqueField::Estructura),
            premisa_tags: TagPanel::for_section(Section::Premisa),
            tecnica_ruptura: TechniqueSelector::for_field(TechniqueField::Ruptura),
            caracteristica: String::new(),
            ruptura_tags: TagPanel::for_section(Section::Ruptura),
            tecnica_remate: TechniqueSelector::for_field(TechniqueField::Remate),
            situaciones,
            remate_tags: TagPanel::for_section(Section::Remate),
        }
    }
}

impl FormState {
    /// A fresh form: one empty row per list, default chips, step 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a fresh form from a saved draft.
    ///
    /// Every dissection row and situation becomes a row, empty or not, and
    /// tags missing from a panel are added as chips before being selected.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let mut form = Self::new();
        form.joke = analysis.joke.clone();

        form.concepto = analysis.premisa.concepto.clone();
        form.elemento_mecanico = analysis.premisa.elemento_mecanico.clone();
        form.estructura.set_value(analysis.premisa.estructura.clone());
        if !analysis.premisa.diseccion.is_empty() {
            form.diseccion.clear();
            for item in &analysis.premisa.diseccion {
                form.diseccion.push(DissectionRow {
                    key: item.key.clone(),
                    value: item.value.clone(),
                });
            }
        }

        form.tecnica_ruptura.set_value(analysis.ruptura.tecnica.clone());
        form.caracteristica = analysis.ruptura.caracteristica.clone();

        form.tecnica_remate.set_value(analysis.remate.tecnica.clone());
        if !analysis.remate.situaciones.is_empty() {
            form.situaciones.clear();
            for situacion in &analysis.remate.situaciones {
                form.situaciones.push(situacion.clone());
            }
        }

        let sections = [
            (Section::Premisa, &analysis.premisa.tags),
            (Section::Ruptura, &analysis.ruptura.tags),
            (Section::Remate, &analysis.remate.tags),
        ];
        for (section, tags) in sections {
            let panel = form.tags_mut(section);
            for tag in tags {
                panel.add_tag(tag.as_str());
                panel.set_selected(tag, true);
            }
        }

        form
    }

    /// Switch the visible panel
    pub fn select_view(&mut self, view_id: &str) {
        self.view = select_view(view_id);
    }

    pub fn tags(&self, section: Section) -> &TagPanel {
        match section {
            Section::Premisa => &self.premisa_tags,
            Section::Ruptura => &self.ruptura_tags,
            Section::Remate => &self.remate_tags,
        }
    }

    pub fn tags_mut(&mut self, section: Section) -> &mut TagPanel {
        match section {
            Section::Premisa => &mut self.premisa_tags,
            Section::Ruptura => &mut self.ruptura_tags,
            Section::Remate => &mut self.remate_tags,
        }
    }

    /// Toggle a chip on one panel
    pub fn toggle_tag(&mut self, section: Section, label: &str) -> Option<bool> {
        self.tags_mut(section).toggle(label)
    }

    pub fn selector(&self, field: TechniqueField) -> &TechniqueSelector {
        match field {
            TechniqueField::Estructura => &self.estructura,
            TechniqueField::Ruptura => &self.tecnica_ruptura,
            TechniqueField::Remate => &self.tecnica_remate,
        }
    }

    pub fn selector_mut(&mut self, field: TechniqueField) -> &mut TechniqueSelector {
        match field {
            TechniqueField::Estructura => &mut self.estructura,
            TechniqueField::Ruptura => &mut self.tecnica_ruptura,
            TechniqueField::Remate => &mut self.tecnica_remate,
        }
    }

    /// Select a technique picked from the catalog panel.
    ///
    /// The first selector (in panel order) offering the slug takes it.
    /// Returns that field so the caller can bring it into view.
    pub fn select_from_catalog(&mut self, slug: &str) -> Option<TechniqueField> {
        let field = TechniqueField::ALL
            .into_iter()
            .find(|field| self.selector(*field).offers(slug))?;
        self.selector_mut(field).select(slug);
        Some(field)
    }

    /// Append an empty dissection row
    pub fn add_dissection_row(&mut self) -> RowId {
        self.diseccion.add_row()
    }

    pub fn remove_dissection_row(&mut self, id: RowId) -> Option<DissectionRow> {
        self.diseccion.remove(id)
    }

    /// Append an empty situation row; its label is the new row count
    pub fn add_situation(&mut self) -> RowId {
        self.situaciones.add_row()
    }

    pub fn remove_situation(&mut self, id: RowId) -> Option<String> {
        self.situaciones.remove(id)
    }

    /// Read the form into an [`Analysis`].
    ///
    /// Dissection rows need both key and value; situations need text.
    pub fn collect(&self) -> Analysis {
        let diseccion = self
            .diseccion
            .values()
            .map(|row| DissectionItem::new(row.key.clone(), row.value.clone()))
            .filter(DissectionItem::is_complete)
            .collect();

        let situaciones = self
            .situaciones
            .values()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();

        Analysis {
            joke: self.joke.clone(),
            premisa: Premisa {
                concepto: self.concepto.clone(),
                diseccion,
                elemento_mecanico: self.elemento_mecanico.clone(),
                estructura: self.estructura.value().to_string(),
                tags: self.premisa_tags.selected(),
            },
            ruptura: Ruptura {
                tecnica: self.tecnica_ruptura.value().to_string(),
                caracteristica: self.caracteristica.clone(),
                tags: self.ruptura_tags.selected(),
            },
            remate: Remate {
                tecnica: self.tecnica_remate.value().to_string(),
                situaciones,
                tags: self.remate_tags.selected(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form() {
        let form = FormState::new();
        assert_eq!(form.diseccion.len(), 1);
        assert_eq!(form.situaciones.len(), 1);
        assert_eq!(form.wizard.current(), 1);
        assert!(form.view.is_active(View::Analyze));
        assert_eq!(form.collect(), Analysis::default());
    }

    #[test]
    fn test_collect_filters_incomplete_dissection_rows() {
        let cases = [
            ("", "", false),
            ("k", "", false),
            ("", "v", false),
            ("k", "v", true),
        ];

        for (key, value, kept) in cases {
            let mut form = FormState::new();
            let id = form.diseccion.ids()[0];
            if let Some(row) = form.diseccion.get_mut(id) {
                row.key = key.to_string();
                row.value = value.to_string();
            }
            let analysis = form.collect();
            assert_eq!(analysis.premisa.diseccion.len(), usize::from(kept), "{key:?}/{value:?}");
        }
    }

    #[test]
    fn test_collect_skips_empty_situations() {
        let mut form = FormState::new();
        let first = form.situaciones.ids()[0];
        if let Some(s) = form.situaciones.get_mut(first) {
            *s = "uno".to_string();
        }
        form.add_situation();
        let third = form.add_situation();
        if let Some(s) = form.situaciones.get_mut(third) {
            *s = "tres".to_string();
        }

        assert_eq!(form.collect().remate.situaciones, vec!["uno", "tres"]);
    }

    #[test]
    fn test_collect_reads_tags_and_techniques() {
        let mut form = FormState::new();
        form.toggle_tag(Section::Premisa, "Familia");
        form.toggle_tag(Section::Ruptura, "Absurdo");
        form.tecnica_ruptura.select("exageracion");
        form.tecnica_remate.select("directo");
        form.estructura.select("concepto-compuesto");

        let analysis = form.collect();
        assert_eq!(analysis.premisa.tags, vec!["Familia"]);
        assert_eq!(analysis.ruptura.tags, vec!["Absurdo"]);
        assert!(analysis.remate.tags.is_empty());
        assert_eq!(analysis.ruptura.tecnica, "exageracion");
        assert_eq!(analysis.remate.tecnica, "directo");
        assert_eq!(analysis.premisa.estructura, "concepto-compuesto");
    }

    #[test]
    fn test_tags_are_scoped_per_panel() {
        let mut form = FormState::new();
        form.premisa_tags.add_tag("Compartida");
        form.remate_tags.add_tag("Compartida");
        form.toggle_tag(Section::Premisa, "Compartida");

        assert!(form.tags(Section::Premisa).is_selected("Compartida"));
        assert!(!form.tags(Section::Remate).is_selected("Compartida"));
    }

    #[test]
    fn test_select_from_catalog() {
        let mut form = FormState::new();
        assert_eq!(form.select_from_catalog("es-como"), Some(TechniqueField::Remate));
        assert_eq!(form.tecnica_remate.value(), "es-como");

        assert_eq!(
            form.select_from_catalog("literalizacion"),
            Some(TechniqueField::Ruptura)
        );
        assert_eq!(form.tecnica_ruptura.value(), "literalizacion");

        assert_eq!(form.select_from_catalog("no-existe"), None);
    }

    #[test]
    fn test_from_analysis_round_trips_through_collect() {
        let mut analysis = Analysis::default();
        analysis.joke.text = "Chiste".to_string();
        analysis.premisa.concepto = "casa".to_string();
        analysis.premisa.diseccion = vec![
            DissectionItem::new("material", "madera"),
            DissectionItem::new("", "huérfano"),
        ];
        analysis.premisa.tags = vec!["Familia".to_string(), "propia".to_string()];
        analysis.ruptura.tecnica = "a-medida".to_string();
        analysis.remate.situaciones = vec!["una".to_string(), String::new()];

        let form = FormState::from_analysis(&analysis);
        assert_eq!(form.diseccion.len(), 2);
        assert_eq!(form.situaciones.len(), 2);
        assert!(form.premisa_tags.is_selected("propia"));

        let collected = form.collect();
        assert_eq!(collected.joke.text, "Chiste");
        assert_eq!(collected.premisa.diseccion, vec![DissectionItem::new("material", "madera")]);
        assert_eq!(collected.premisa.tags, vec!["Familia", "propia"]);
        assert_eq!(collected.ruptura.tecnica, "a-medida");
        assert_eq!(collected.remate.situaciones, vec!["una"]);
    }

    #[test]
    fn test_select_view_updates_state() {
        let mut form = FormState::new();
        form.select_view("entries");
        assert!(form.view.is_active(View::Entries));
        assert!(!form.view.catalog_visible);
    }
}
