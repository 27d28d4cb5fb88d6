//! Latin-to-rune transliteration.
//!
//! A single left-to-right scan over the input: at each position a
//! two-character grapheme is tried first, then a single character. Spaces
//! are kept as space units, unmapped alphabet letters become Unknown units,
//! and anything else (digits, punctuation, other scripts) is dropped.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::runes::{RuneMapping, RuneTable};
use crate::unicode::{fold_case, is_rune_alphabet};

pub const SPACE_GLYPH: &str = " ";
pub const SPACE_NAME: &str = "Space";
pub const UNKNOWN_GLYPH: &str = "?";
pub const UNKNOWN_NAME: &str = "Unknown";

/// One consumed input fragment and the rune it became.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedUnit {
    /// Source text as typed (case preserved).
    pub original: String,
    pub glyph: String,
    pub name: String,
}

impl ConvertedUnit {
    fn from_rune(original: &[char], rune: &RuneMapping) -> Self {
        Self {
            original: original.iter().collect(),
            glyph: rune.glyph.clone(),
            name: rune.name.clone(),
        }
    }

    fn space() -> Self {
        Self {
            original: SPACE_GLYPH.to_string(),
            glyph: SPACE_GLYPH.to_string(),
            name: SPACE_NAME.to_string(),
        }
    }

    fn unknown(original: char) -> Self {
        Self {
            original: original.to_string(),
            glyph: UNKNOWN_GLYPH.to_string(),
            name: UNKNOWN_NAME.to_string(),
        }
    }

    pub fn is_space(&self) -> bool {
        self.glyph == SPACE_GLYPH
    }

    pub fn is_unknown(&self) -> bool {
        self.glyph == UNKNOWN_GLYPH
    }
}

/// Ordered transliteration output. Unit order is input scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transliteration {
    units: Vec<ConvertedUnit>,
}

impl Transliteration {
    pub fn units(&self) -> &[ConvertedUnit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<ConvertedUnit> {
        self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConvertedUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All glyphs concatenated in order, no separators.
    pub fn glyph_string(&self) -> String {
        self.units.iter().map(|u| u.glyph.as_str()).collect()
    }

    /// First occurrence of each glyph, skipping spaces and Unknown units.
    /// Units are compared by glyph only.
    pub fn distinct_glyphs(&self) -> Transliteration {
        let mut seen = HashSet::new();
        let units = self
            .units
            .iter()
            .filter(|u| !u.is_space() && !u.is_unknown())
            .filter(|u| seen.insert(u.glyph.as_str()))
            .cloned()
            .collect();
        Transliteration { units }
    }

    /// Input text with dropped characters removed.
    pub fn original_text(&self) -> String {
        self.units.iter().map(|u| u.original.as_str()).collect()
    }

    pub fn unknown_units(&self) -> impl Iterator<Item = &ConvertedUnit> {
        self.units.iter().filter(|u| u.is_unknown())
    }
}

impl From<Vec<ConvertedUnit>> for Transliteration {
    fn from(units: Vec<ConvertedUnit>) -> Self {
        Self { units }
    }
}

impl<'a> IntoIterator for &'a Transliteration {
    type Item = &'a ConvertedUnit;
    type IntoIter = std::slice::Iter<'a, ConvertedUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl RuneTable {
    /// Transliterate `text` with this table.
    pub fn transliterate(&self, text: &str) -> Transliteration {
        let chars: Vec<char> = text.chars().collect();
        let folded: Vec<char> = chars.iter().map(|&c| fold_case(c)).collect();
        let mut units = Vec::with_capacity(chars.len());

        let mut i = 0;
        while i < chars.len() {
            if i + 1 < chars.len() {
                if let Some(rune) = self.digraph(folded[i], folded[i + 1]) {
                    units.push(ConvertedUnit::from_rune(&chars[i..i + 2], rune));
                    i += 2;
                    continue;
                }
            }

            let ch = chars[i];
            if let Some(rune) = self.single(folded[i]) {
                units.push(ConvertedUnit::from_rune(&chars[i..i + 1], rune));
            } else if ch == ' ' {
                units.push(ConvertedUnit::space());
            } else if is_rune_alphabet(ch) {
                units.push(ConvertedUnit::unknown(ch));
            } else {
                trace!(pos = i, ?ch, "dropped character");
            }
            i += 1;
        }

        Transliteration { units }
    }
}

/// Transliterate `text` with the global rune table.
pub fn transliterate(text: &str) -> Transliteration {
    RuneTable::global().transliterate(text)
}

pub fn glyph_string(result: &Transliteration) -> String {
    result.glyph_string()
}

pub fn distinct_glyphs(result: &Transliteration) -> Transliteration {
    result.distinct_glyphs()
}
