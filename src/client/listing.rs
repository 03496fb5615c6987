//! Entry listing
//!
//! What the entries panel shows after a load: cards, a "no entries"
//! placeholder, or an error placeholder. A failed load never leaves a
//! blank list.

use chrono::{DateTime, Local, TimeZone};

use super::dto::Entry;
use super::error::EntryResult;

/// Shown when the load succeeded with no entries
pub const EMPTY_PLACEHOLDER: &str = "No hay análisis guardados";

/// Shown when the load failed
pub const ERROR_PLACEHOLDER: &str = "Error al cargar";

/// Title used for entries without one
pub const UNTITLED: &str = "Sin título";

/// Rendered state of the entries panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryListing {
    Entries(Vec<EntryCard>),
    Empty,
    Failed,
}

impl EntryListing {
    /// Project a load result onto the panel
    pub fn from_result(result: EntryResult<Vec<Entry>>) -> Self {
        match result {
            Ok(entries) if entries.is_empty() => EntryListing::Empty,
            Ok(entries) => EntryListing::Entries(entries.iter().map(EntryCard::from_entry).collect()),
            Err(e) => {
                tracing::error!(error = %e, "Error loading entries");
                EntryListing::Failed
            }
        }
    }

    /// Placeholder text, when the panel shows one
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            EntryListing::Entries(_) => None,
            EntryListing::Empty => Some(EMPTY_PLACEHOLDER),
            EntryListing::Failed => Some(ERROR_PLACEHOLDER),
        }
    }

    pub fn cards(&self) -> &[EntryCard] {
        match self {
            EntryListing::Entries(cards) => cards,
            _ => &[],
        }
    }
}

/// One entry as displayed in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl EntryCard {
    pub fn from_entry(entry: &Entry) -> Self {
        let title = entry
            .titulo
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        let date = match entry.fecha.as_deref().filter(|f| !f.is_empty()) {
            Some(fecha) => fecha.to_string(),
            None => entry
                .created_time
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
        };

        Self {
            id: entry.id.clone(),
            title,
            kind: entry.tipo.clone().unwrap_or_default(),
            date,
            tags: entry.tags.clone(),
        }
    }

    /// The tag strip is omitted for untagged entries
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// Format an ISO timestamp as a Spanish short date (`d/m/yyyy`) in the
/// viewer's local time zone.
///
/// Unparseable input is shown as given.
pub fn format_date(timestamp: &str) -> String {
    format_date_in(timestamp, &Local)
}

/// [`format_date`] with an explicit time zone
pub fn format_date_in<Tz>(timestamp: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if timestamp.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(zone).format("%-d/%-m/%Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
