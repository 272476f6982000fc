// wortwerk-analyze: Print every reading of a word as JSON.
//
// One JSON object per input word:
//   {"word": "...", "variants": [{"w": "...", "type": "...", "composits": [...]}]}
//
// Usage:
//   wortwerk-analyze [-d DICT.json]... [WORD...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use wortwerk_cli::CommonArgs;

/// Show how words decompose.
#[derive(Debug, Parser)]
#[command(name = "wortwerk-analyze", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Pretty-print each object
    #[arg(long)]
    pretty: bool,

    /// Words to analyze (default: stdin, one per line)
    words: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wortwerk_cli::init_logging(cli.common.verbose);
    let checker = wortwerk_cli::load_checker(&cli.common)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in wortwerk_cli::inputs(&cli.words, true)? {
        let word = line.trim();
        let record = json!({
            "word": word,
            "variants": checker.resolve(word),
        });
        let rendered = if cli.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}
