use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rune_cli::commands::{convert_ops, table_ops};
use rune_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "runetool", about = "Elder Futhark transliteration tool")]
struct Cli {
    /// Custom rune table TOML (replaces the built-in table)
    #[arg(long, global = true)]
    table: Option<String>,
    /// Write JSON logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text to runes
    Convert {
        /// Text to transliterate
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also list each distinct rune once
        #[arg(long)]
        distinct: bool,
    },
    /// Transliterate each line of a file and write JSONL
    Batch {
        /// Input text file (one text per line)
        input_file: String,
        /// Output JSONL file
        output_file: String,
    },
    /// List the active rune table
    Runes,
    /// Export the default rune table as TOML
    TableExport,
    /// Validate a custom rune table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    if let Some(ref file) = cli.table {
        table_ops::use_table_cmd(file);
    }

    match cli.command {
        Command::Convert {
            text,
            json,
            distinct,
        } => convert_ops::convert_cmd(&text, json, distinct),
        Command::Batch {
            input_file,
            output_file,
        } => convert_ops::batch_cmd(&input_file, &output_file),
        Command::Runes => table_ops::runes_cmd(),
        Command::TableExport => table_ops::table_export(),
        Command::TableValidate { file } => table_ops::table_validate(&file),
    }
}
