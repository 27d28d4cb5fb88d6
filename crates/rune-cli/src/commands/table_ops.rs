use std::fs;

use unicode_width::UnicodeWidthStr;

use rune_core::runes::{default_toml, parse_rune_toml, RuneMapping, RuneTable};

use super::{die, CliError};

/// Install a custom rune table from `file` before anything touches the global.
pub fn load_custom_table(file: &str) -> Result<usize, CliError> {
    let content = fs::read_to_string(file).map_err(CliError::io(file))?;
    let count = parse_rune_toml(&content)?.len();
    RuneTable::init_custom(content)?;
    Ok(count)
}

pub fn use_table_cmd(file: &str) {
    let count = die!(load_custom_table(file), "Error loading rune table: {}");
    tracing::debug!(file, count, "custom rune table installed");
}

pub fn table_export() {
    print!("{}", default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let runes = die!(parse_rune_toml(&content), "Error: {}");
    let digraphs = runes
        .iter()
        .filter(|r| r.grapheme.chars().count() == 2)
        .count();
    println!("OK: {} runes ({} digraphs)", runes.len(), digraphs);
}

/// Render table rows with the grapheme column padded to display width.
pub fn format_table(entries: &[RuneMapping]) -> Vec<String> {
    let width = entries
        .iter()
        .map(|r| r.grapheme.width())
        .max()
        .unwrap_or(0)
        .max("grapheme".len());

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("{:<width$}  glyph  name", "grapheme"));
    for rune in entries {
        let pad = width - rune.grapheme.width();
        let glyph_pad = 5usize.saturating_sub(rune.glyph.width());
        lines.push(format!(
            "{}{}  {}{}  {}",
            rune.grapheme,
            " ".repeat(pad),
            rune.glyph,
            " ".repeat(glyph_pad),
            rune.name
        ));
    }
    lines
}

pub fn runes_cmd() {
    for line in format_table(RuneTable::global().entries()) {
        println!("{line}");
    }
}
