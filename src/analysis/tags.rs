//! Tag and title derivation for saved entries

use std::collections::HashSet;

use super::types::Analysis;

/// Prefix of every synthesized entry title
pub const TITLE_PREFIX: &str = "ANÁLISIS: ";

/// Number of joke characters kept in the title
pub const TITLE_TEXT_CHARS: usize = 50;

/// Collect the tags to attach to an entry.
///
/// Section tags come first (premisa, ruptura, remate), followed by the
/// ruptura and remate technique slugs. Empty values are dropped and each
/// tag appears once; the first occurrence keeps its position.
pub fn build_tags(analysis: &Analysis) -> Vec<String> {
    let candidates = analysis
        .premisa
        .tags
        .iter()
        .chain(&analysis.ruptura.tags)
        .chain(&analysis.remate.tags)
        .chain(std::iter::once(&analysis.ruptura.tecnica))
        .chain(std::iter::once(&analysis.remate.tecnica));

    let mut seen = HashSet::new();
    candidates
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Title for a saved analysis.
///
/// Keeps the first [`TITLE_TEXT_CHARS`] characters of the joke and always
/// appends `...`, even when nothing was cut.
pub fn entry_title(joke_text: &str) -> String {
    let head: String = joke_text.chars().take(TITLE_TEXT_CHARS).collect();
    format!("{}{}...", TITLE_PREFIX, head)
}
