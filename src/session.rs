//! Analysis Session
//!
//! The save and load flows behind the form. Failures are turned into a
//! user-facing notice plus an operator log line; nothing is retried and the
//! form is never cleared.

use crate::analysis::Analysis;
use crate::client::{CreatedEntry, EntryFilter, EntryListing, EntryResult, EntryStore, NewEntry};
use crate::form::FormState;

/// Outcome shown to the user after a save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    SaveFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Saved => "Análisis guardado correctamente",
            Notice::SaveFailed => "Error al guardar el análisis",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::SaveFailed)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Send a collected analysis to the store
pub async fn submit_analysis<S>(store: &S, analysis: &Analysis) -> EntryResult<CreatedEntry>
where
    S: EntryStore + ?Sized,
{
    let entry = NewEntry::from_analysis(analysis);
    tracing::info!(titulo = %entry.titulo, tags = ?entry.tags, "Saving analysis");
    store.create_entry(&entry).await
}

/// Map a save result to its notice, logging failures
pub fn save_notice(result: &EntryResult<CreatedEntry>) -> Notice {
    match result {
        Ok(created) => {
            tracing::info!(id = ?created.id, "Analysis saved");
            Notice::Saved
        }
        Err(e) => {
            tracing::error!(error = %e, status = ?e.status(), "Error saving analysis");
            Notice::SaveFailed
        }
    }
}

/// Load saved analyses into a panel listing. Never fails.
pub async fn load_listing<S>(store: &S) -> EntryListing
where
    S: EntryStore + ?Sized,
{
    EntryListing::from_result(store.list_entries(&EntryFilter::analyses()).await)
}

/// A form bound to a store, with the entries panel it refreshes
pub struct AnalysisSession<S> {
    pub form: FormState,
    entries: Option<EntryListing>,
    store: S,
}

impl<S: EntryStore> AnalysisSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_form(store, FormState::new())
    }

    pub fn with_form(store: S, form: FormState) -> Self {
        Self {
            form,
            entries: None,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Last loaded listing, if any load has run
    pub fn entries(&self) -> Option<&EntryListing> {
        self.entries.as_ref()
    }

    /// Reload the entries panel
    pub async fn load_entries(&mut self) -> &EntryListing {
        let listing = load_listing(&self.store).await;
        self.entries.insert(listing)
    }

    /// Save the current form.
    ///
    /// On success the entries panel is reloaded. On failure the form and the
    /// current listing are left exactly as they were.
    pub async fn save(&mut self) -> Notice {
        let analysis = self.form.collect();
        let result = submit_analysis(&self.store, &analysis).await;
        let notice = save_notice(&result);

        if notice == Notice::Saved {
            self.load_entries().await;
        }
        notice
    }
}
