use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_rune_toml, RuneConfigError, RuneMapping};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<RuneTable> = OnceLock::new();

/// Ordered rune table with digraph and single-character indexes.
#[derive(Debug, Clone)]
pub struct RuneTable {
    entries: Vec<RuneMapping>,
    /// (first, second, entry index) in table order.
    digraphs: Vec<(char, char, usize)>,
    singles: HashMap<char, usize>,
}

impl RuneTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RuneConfigError> {
        // Validate eagerly
        parse_rune_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(RuneConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RuneConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuneTable {
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get();
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_TOML);
            let table = RuneTable::from_toml(toml_str).expect("rune TOML must be valid");
            debug!(
                custom = custom.is_some(),
                entries = table.entries.len(),
                digraphs = table.digraphs.len(),
                "rune table initialized"
            );
            table
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RuneConfigError> {
        parse_rune_toml(toml_str).map(Self::from_mappings)
    }

    /// Build indexes over already-validated mappings.
    pub fn from_mappings(entries: Vec<RuneMapping>) -> Self {
        let mut digraphs = Vec::new();
        let mut singles = HashMap::new();
        for (idx, rune) in entries.iter().enumerate() {
            let mut chars = rune.grapheme.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    singles.entry(c).or_insert(idx);
                }
                (Some(a), Some(b)) => digraphs.push((a, b, idx)),
                _ => {}
            }
        }
        Self {
            entries,
            digraphs,
            singles,
        }
    }

    pub fn entries(&self) -> &[RuneMapping] {
        &self.entries
    }

    /// Exact lookup of a lower-case grapheme.
    pub fn lookup(&self, grapheme: &str) -> Option<&RuneMapping> {
        self.entries.iter().find(|r| r.grapheme == grapheme)
    }

    /// First entry whose rune name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&RuneMapping> {
        self.entries.iter().find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Two-character grapheme starting with `first`, `second` (already folded).
    pub(crate) fn digraph(&self, first: char, second: char) -> Option<&RuneMapping> {
        self.digraphs
            .iter()
            .find(|&&(a, b, _)| a == first && b == second)
            .map(|&(_, _, idx)| &self.entries[idx])
    }

    /// Single-character grapheme (already folded).
    pub(crate) fn single(&self, c: char) -> Option<&RuneMapping> {
        self.singles.get(&c).map(|&idx| &self.entries[idx])
    }
}
