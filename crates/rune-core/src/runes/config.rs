use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::transliterate::{SPACE_GLYPH, UNKNOWN_GLYPH};

/// One `[[runes]]` record: a lower-case grapheme and the rune it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneMapping {
    pub grapheme: String,
    pub glyph: String,
    pub name: String,
}

#[derive(Deserialize)]
struct RuneConfig {
    #[serde(default)]
    runes: Vec<RuneMapping>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuneConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[runes]] table is empty")]
    Empty,
    #[error("grapheme must be 1 or 2 characters: {0:?}")]
    GraphemeLength(String),
    #[error("grapheme must be lower case without whitespace: {0:?}")]
    InvalidGrapheme(String),
    #[error("duplicate grapheme: {0:?}")]
    DuplicateGrapheme(String),
    #[error("empty glyph for grapheme: {0:?}")]
    EmptyGlyph(String),
    #[error("empty name for grapheme: {0:?}")]
    EmptyName(String),
    #[error("glyph {glyph:?} for grapheme {grapheme:?} is reserved")]
    ReservedGlyph { grapheme: String, glyph: String },
    #[error("rune table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into the ordered list of rune mappings.
pub fn parse_rune_toml(toml_str: &str) -> Result<Vec<RuneMapping>, RuneConfigError> {
    let config: RuneConfig =
        toml::from_str(toml_str).map_err(|e| RuneConfigError::Parse(e.to_string()))?;

    if config.runes.is_empty() {
        return Err(RuneConfigError::Empty);
    }

    let mut seen = HashSet::new();
    for rune in &config.runes {
        validate_mapping(rune)?;
        if !seen.insert(rune.grapheme.as_str()) {
            return Err(RuneConfigError::DuplicateGrapheme(rune.grapheme.clone()));
        }
    }

    Ok(config.runes)
}

fn validate_mapping(rune: &RuneMapping) -> Result<(), RuneConfigError> {
    let grapheme = &rune.grapheme;
    let len = grapheme.chars().count();
    if !(1..=2).contains(&len) {
        return Err(RuneConfigError::GraphemeLength(grapheme.clone()));
    }
    if grapheme.chars().any(char::is_whitespace) || grapheme.to_lowercase() != *grapheme {
        return Err(RuneConfigError::InvalidGrapheme(grapheme.clone()));
    }
    if rune.glyph.is_empty() {
        return Err(RuneConfigError::EmptyGlyph(grapheme.clone()));
    }
    if rune.name.is_empty() {
        return Err(RuneConfigError::EmptyName(grapheme.clone()));
    }
    if rune.glyph == SPACE_GLYPH || rune.glyph == UNKNOWN_GLYPH {
        return Err(RuneConfigError::ReservedGlyph {
            grapheme: grapheme.clone(),
            glyph: rune.glyph.clone(),
        });
    }
    Ok(())
}
