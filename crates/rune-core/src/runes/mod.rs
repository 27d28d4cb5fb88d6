//! Grapheme-to-rune lookup table.
//!
//! The table is an ordered list of `[[runes]]` records loaded from TOML once
//! per process. Two-character graphemes are indexed separately so the
//! scanner can try them before single characters.

mod config;
mod rune_table;
mod table;

pub use config::{parse_rune_toml, RuneConfigError, RuneMapping};
pub use rune_table::RuneTable;
pub use table::default_toml;
