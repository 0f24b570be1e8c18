use std::path::Path;

use clap::{Parser, Subcommand};

use width_cli::commands::convert_ops::{self, Direction};
use width_cli::commands::table_ops;

#[derive(Parser)]
#[command(name = "widthtool", about = "Fullwidth/halfwidth conversion tool")]
struct Cli {
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert halfwidth text to fullwidth (reads stdin when TEXT is omitted)
    Full {
        /// Text to convert
        text: Option<String>,
        /// Custom pair table TOML (default: built-in catalog)
        #[arg(long)]
        table: Option<String>,
        /// Output one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Convert fullwidth text to halfwidth (reads stdin when TEXT is omitted)
    Half {
        /// Text to convert
        text: Option<String>,
        /// Custom pair table TOML (default: built-in catalog)
        #[arg(long)]
        table: Option<String>,
        /// Output one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Show the registered mappings for each character
    Lookup {
        /// Characters to look up
        chars: String,
        /// Custom pair table TOML (default: built-in catalog)
        #[arg(long)]
        table: Option<String>,
    },
    /// Show display column widths before and after conversion
    Width {
        /// Text to measure
        text: String,
        /// Custom pair table TOML (default: built-in catalog)
        #[arg(long)]
        table: Option<String>,
    },
    /// Export the built-in pair table as TOML
    TableExport,
    /// Validate a custom pair table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.log_dir {
        width_engine::init_tracing(Path::new(dir));
    }

    match cli.command {
        Command::Full { text, table, json } => convert_ops::convert_cmd(
            Direction::ToFullwidth,
            text.as_deref(),
            table.as_deref(),
            json,
        ),
        Command::Half { text, table, json } => convert_ops::convert_cmd(
            Direction::ToHalfwidth,
            text.as_deref(),
            table.as_deref(),
            json,
        ),
        Command::Lookup { chars, table } => table_ops::lookup_cmd(&chars, table.as_deref()),
        Command::Width { text, table } => convert_ops::width_cmd(&text, table.as_deref()),
        Command::TableExport => table_ops::table_export(),
        Command::TableValidate { file } => table_ops::table_validate(&file),
    }
}
