//! Analysis record types
//!
//! Plain data with no behavior beyond (de)serialization. Drafts on disk use
//! the same camelCase keys the web form used (`elementoMecanico`).

use serde::{Deserialize, Serialize};

/// A fully assembled analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    pub joke: Joke,
    pub premisa: Premisa,
    pub ruptura: Ruptura,
    pub remate: Remate,
}

/// The joke under analysis. Every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Joke {
    pub text: String,
    pub comic: String,
    pub show: String,
    pub year: String,
}

/// Premise: concept, dissection and mechanical element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Premisa {
    pub concepto: String,
    /// Only rows with both key and value present
    pub diseccion: Vec<DissectionItem>,
    pub elemento_mecanico: String,
    /// Technique slug for the premise structure
    pub estructura: String,
    pub tags: Vec<String>,
}

/// One characteristic of the dissected concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DissectionItem {
    pub key: String,
    pub value: String,
}

impl DissectionItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Both sides filled in
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Break: the technique used to alter reality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruptura {
    pub tecnica: String,
    pub caracteristica: String,
    pub tags: Vec<String>,
}

/// Punchline: justification technique and the absurd situations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remate {
    pub tecnica: String,
    pub situaciones: Vec<String>,
    pub tags: Vec<String>,
}
