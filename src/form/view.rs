//! View Router
//!
//! Which top-level panel is visible and what the header says.

use serde::{Deserialize, Serialize};

/// Top-level panels of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Analyze,
    Entries,
    Write,
    Tags,
    Techniques,
    Comics,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Analyze,
        View::Entries,
        View::Write,
        View::Tags,
        View::Techniques,
        View::Comics,
    ];

    /// Identifier used by navigation controls
    pub fn id(&self) -> &'static str {
        match self {
            View::Analyze => "analyze",
            View::Entries => "entries",
            View::Write => "write",
            View::Tags => "tags",
            View::Techniques => "techniques",
            View::Comics => "comics",
        }
    }

    /// Header text shown while the view is active
    pub fn title(&self) -> &'static str {
        match self {
            View::Analyze => "Nuevo Análisis",
            View::Entries => "Mis Análisis",
            View::Write => "Escribir Chiste",
            View::Tags => "Catálogo de Etiquetas",
            View::Techniques => "Técnicas",
            View::Comics => "Cómicos",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }
}

/// Result of selecting a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Id of the navigation control marked active
    pub nav_id: String,
    /// Panel shown; `None` when the id is unknown
    pub active: Option<View>,
    /// Header title
    pub title: String,
    /// The technique catalog is only shown next to the analysis form
    pub catalog_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        select_view(View::Analyze.id())
    }
}

impl ViewState {
    pub fn is_active(&self, view: View) -> bool {
        self.active == Some(view)
    }
}

/// Switch to the view with the given id.
///
/// Unknown ids fall back to the raw id as header text and leave no panel
/// visible.
pub fn select_view(view_id: &str) -> ViewState {
    let active = View::from_id(view_id);
    let title = active
        .map(|v| v.title().to_string())
        .unwrap_or_else(|| view_id.to_string());

    tracing::debug!(view = view_id, known = active.is_some(), "Selecting view");

    ViewState {
        nav_id: view_id.to_string(),
        active,
        title,
        catalog_visible: view_id == View::Analyze.id(),
    }
}
