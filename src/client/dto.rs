//! Request and response types for the entry-storage API
//!
//! The backend speaks Spanish field names; these types keep them on the
//! wire and nowhere else.

use serde::{Deserialize, Serialize};

use crate::analysis::{build_tags, entry_title, render_content, Analysis};

/// Entry type of every saved analysis
pub const ANALYSIS_KIND: &str = "Análisis";

// ============================================
// Entries
// ============================================

/// Body of `POST /entries`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub titulo: String,
    pub tipo: String,
    pub contenido: String,
    pub tags: Vec<String>,
}

impl NewEntry {
    /// Build the payload for a collected analysis
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            titulo: entry_title(&analysis.joke.text),
            tipo: ANALYSIS_KIND.to_string(),
            contenido: render_content(analysis),
            tags: build_tags(analysis),
        }
    }
}

/// Response of `POST /entries`. Only its presence matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A stored entry as listed by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    /// Missing tags read as none
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    /// Only present on `GET /entries/{id}`
    #[serde(default)]
    pub contenido: Option<String>,
}

/// Envelope of `GET /entries`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEntriesResponse {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Envelope of `GET /search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Entry>,
}

/// Response of `DELETE /entries/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ArchivedEntry {
    pub id: String,
    #[serde(default)]
    pub archived: bool,
}

/// Response of `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Filter for `GET /entries`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub tipo: Option<String>,
}

impl EntryFilter {
    /// Only saved analyses
    pub fn analyses() -> Self {
        Self {
            tipo: Some(ANALYSIS_KIND.to_string()),
        }
    }

    /// Request path including the encoded query
    pub fn path(&self) -> String {
        match &self.tipo {
            Some(tipo) => format!("/entries?tipo={}", urlencoding::encode(tipo)),
            None => "/entries".to_string(),
        }
    }
}

/// Path of a single entry
pub fn entry_path(id: &str) -> String {
    format!("/entries/{}", urlencoding::encode(id))
}

/// Path of a text search
pub fn search_path(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query))
}

// ============================================
// Writing assistant
// ============================================

/// Body of `POST /agent/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub include_library: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of `POST /agent/develop` and `POST /agent/analyze`
#[derive(Debug, Clone, Serialize)]
pub struct ConceptRequest {
    pub concepto: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevelopResponse {
    #[serde(default)]
    pub concepto: String,
    pub sugerencias: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub concepto: String,
    pub analisis: String,
}

/// Body of `POST /agent/absurd`
#[derive(Debug, Clone, Serialize)]
pub struct AbsurdRequest {
    pub elemento_mecanico: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbsurdResponse {
    #[serde(default)]
    pub elemento_mecanico: String,
    pub realidades_absurdas: String,
}

/// Path of `GET /agent/examples` with its optional filters
pub fn examples_path(tecnica: Option<&str>, concepto: Option<&str>) -> String {
    let params: Vec<String> = [("tecnica", tecnica), ("concepto", concepto)]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, urlencoding::encode(v))))
        .collect();

    if params.is_empty() {
        "/agent/examples".to_string()
    } else {
        format!("/agent/examples?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_from_analysis() {
        let mut analysis = Analysis::default();
        analysis.joke.text = "Chiste corto".to_string();
        analysis.ruptura.tecnica = "exageracion".to_string();
        analysis.ruptura.tags = vec!["exageracion".to_string()];

        let entry = NewEntry::from_analysis(&analysis);
        assert_eq!(entry.titulo, "ANÁLISIS: Chiste corto...");
        assert_eq!(entry.tipo, "Análisis");
        assert_eq!(entry.tags, vec!["exageracion"]);
        assert!(entry.contenido.starts_with("## CHISTE\n\n\"Chiste corto\""));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["tipo"], "Análisis");
        assert!(json["tags"].is_array());
    }

    #[test]
    fn test_entry_without_tags_defaults_to_empty() {
        let json = r#"{ "id": "abc", "titulo": "Uno" }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "abc");
        assert!(entry.tags.is_empty());
        assert_eq!(entry.fecha, None);
    }

    #[test]
    fn test_list_envelope_without_entries() {
        let response: ListEntriesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.entries.is_empty());
    }

    #[test]
    fn test_filter_path_is_encoded() {
        assert_eq!(EntryFilter::analyses().path(), "/entries?tipo=An%C3%A1lisis");
        assert_eq!(EntryFilter::default().path(), "/entries");
    }

    #[test]
    fn test_examples_path() {
        assert_eq!(examples_path(None, None), "/agent/examples");
        assert_eq!(
            examples_path(Some("es-como"), Some("casa vieja")),
            "/agent/examples?tecnica=es-como&concepto=casa%20vieja"
        );
        assert_eq!(examples_path(None, Some("gato")), "/agent/examples?concepto=gato");
    }

    #[test]
    fn test_search_and_entry_paths() {
        assert_eq!(search_path("mi casa"), "/search?q=mi%20casa");
        assert_eq!(entry_path("a1-b2"), "/entries/a1-b2");
    }
}
