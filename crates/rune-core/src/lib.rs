//! Elder Futhark transliteration engine.
//!
//! Maps Latin (and Lithuanian) text onto runes with a greedy
//! digraph-first scan over a TOML-configured grapheme table.

pub mod runes;
pub mod transliterate;
pub mod unicode;

pub use runes::{RuneMapping, RuneTable};
pub use transliterate::{
    distinct_glyphs, glyph_string, transliterate, ConvertedUnit, Transliteration,
};
