//! Naive sentence splitting for clause attribution.

use regex::Regex;

/// Split on sentence terminators. Deliberately naive: abbreviations,
/// decimal numbers, and quoted punctuation split too, and a match that
/// spans two segments is attributed to neither.
pub(crate) fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
}

/// Best-effort excerpt for a matched rule: the first candidate sentence
/// the pattern also matches, trimmed; the raw matched substring when no
/// candidate qualifies.
pub(crate) fn clause_excerpt(pattern: &Regex, text: &str, raw_match: &str) -> String {
    let matching = split_sentences(text).find(|sentence| pattern.is_match(sentence));
    match matching.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => raw_match.to_string(),
    }
}
