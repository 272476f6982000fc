// wortwerk-hyphenate: Print words with their break points.
//
// Reads words from the arguments or stdin (one per line). Known words are
// printed with SEP at every break point, unknown words unchanged.
//
// Usage:
//   wortwerk-hyphenate [-d DICT.json]... [--separator SEP] [WORD...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::warn;

use wortwerk_cli::CommonArgs;

/// Hyphenate words at their compound and syllable joints.
#[derive(Debug, Parser)]
#[command(name = "wortwerk-hyphenate", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Hyphen separator
    #[arg(short, long, default_value = "-")]
    separator: String,

    /// Words to hyphenate (default: stdin, one per line)
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
        match checker.hyphenate(word, &cli.separator) {
            Some(hyphenated) => writeln!(out, "{hyphenated}")?,
            None => {
                warn!("unknown word: {word}");
                writeln!(out, "{word}")?;
            }
        }
    }
    Ok(())
}
