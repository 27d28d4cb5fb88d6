use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rune_core::{transliterate, Transliteration};

use super::{die, CliError};

/// JSON shape of a single conversion (`convert --json`, one `batch` line).
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub text: String,
    pub glyphs: String,
    pub units: Transliteration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<Transliteration>,
}

impl ConversionRecord {
    pub fn new(text: &str, with_distinct: bool) -> Self {
        let units = transliterate(text);
        Self {
            text: text.to_string(),
            glyphs: units.glyph_string(),
            distinct: with_distinct.then(|| units.distinct_glyphs()),
            units,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub lines: usize,
    pub units: usize,
    pub unknown: usize,
}

pub fn convert_cmd(text: &str, json: bool, distinct: bool) {
    let record = ConversionRecord::new(text, distinct);

    if json {
        let out = die!(serde_json::to_string_pretty(&record), "Error: {}");
        println!("{out}");
    } else {
        println!("{}", record.glyphs);
        if let Some(ref legend) = record.distinct {
            println!();
            for unit in legend {
                println!("{}  {}", unit.glyph, unit.name);
            }
        }
    }

    report_unknown(&record.units);
}

/// Unknown letters are the caller's to surface; the CLI notes them on stderr.
fn report_unknown(result: &Transliteration) {
    let unknown: Vec<&str> = result.unknown_units().map(|u| u.original.as_str()).collect();
    if !unknown.is_empty() {
        eprintln!("note: no rune for: {}", unknown.join(", "));
    }
}

/// Convert every line of `input` and write one JSON record per line to `output`.
pub fn batch_convert(input: &Path, output: &Path) -> Result<BatchSummary, CliError> {
    let content =
        fs::read_to_string(input).map_err(CliError::io(input.display().to_string()))?;
    let file = File::create(output).map_err(CliError::io(output.display().to_string()))?;
    let mut writer = BufWriter::new(file);

    let mut summary = BatchSummary::default();
    for line in content.lines() {
        let record = ConversionRecord::new(line, false);
        summary.lines += 1;
        summary.units += record.units.len();
        summary.unknown += record.units.unknown_units().count();
        debug!(line = summary.lines, units = record.units.len(), "converted");

        serde_json::to_writer(&mut writer, &record)?;
        writeln!(writer).map_err(CliError::io(output.display().to_string()))?;
    }
    writer
        .flush()
        .map_err(CliError::io(output.display().to_string()))?;

    info!(?summary, "batch complete");
    Ok(summary)
}

pub fn batch_cmd(input: &str, output: &str) {
    let summary = die!(
        batch_convert(Path::new(input), Path::new(output)),
        "Error: {}"
    );
    eprintln!(
        "{} lines, {} units, {} unknown -> {output}",
        summary.lines, summary.units, summary.unknown
    );
}
