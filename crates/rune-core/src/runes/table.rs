/// Embedded default rune table.
pub(crate) const DEFAULT_TOML: &str = include_str!("default_runes.toml");

/// Returns the embedded default rune table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
