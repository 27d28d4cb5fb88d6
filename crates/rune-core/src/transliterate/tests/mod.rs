
use super::*;

/// (original, glyph, name) triples for compact assertions.
pub(super) fn triples(result: &Transliteration) -> Vec<(&str, &str, &str)> {
    result
        .iter()
        .map(|u| (u.original.as_str(), u.glyph.as_str(), u.name.as_str()))
        .collect()
}

pub(super) fn names(result: &Transliteration) -> Vec<&str> {
    result.iter().map(|u| u.name.as_str()).collect()
}
