// wortwerk-check: Check text and print it with highlight markup.
//
// Each argument (or each stdin line) is checked as one text. Known words
// get soft hyphens at their break points; problems are wrapped in
// `<span class="spellcheck highlight ...">` elements.
//
// Usage:
//   wortwerk-check [-d DICT.json]... [OPTIONS] [TEXT...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use wortwerk_cli::CommonArgs;

/// Check German text against compound dictionaries.
#[derive(Debug, Parser)]
#[command(name = "wortwerk-check", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Only take symbols and grammar from dictionaries of this locale
    #[arg(short, long)]
    language: Option<String>,

    /// Keep words as written instead of inserting soft hyphens
    #[arg(long)]
    no_hyphenation: bool,

    /// Also highlight known words
    #[arg(long)]
    known: bool,

    /// Show soft hyphens as this string
    #[arg(long, value_name = "SEP")]
    show_hyphens: Option<String>,

    /// Texts to check (default: stdin, one text per line)
    texts: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wortwerk_cli::init_logging(cli.common.verbose);

    let mut checker = wortwerk_cli::load_checker(&cli.common)?;
    if cli.language.is_some() {
        checker.set_language(cli.language.clone());
    }
    if cli.no_hyphenation {
        checker.set_hyphenation(false);
    }
    if cli.known {
        checker.set_highlight_known_words(true);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for text in wortwerk_cli::inputs(&cli.texts, false)? {
        let checked = checker.check_text(&text);
        match &cli.show_hyphens {
            Some(sep) => writeln!(out, "{}", checked.replace('\u{00AD}', sep))?,
            None => writeln!(out, "{checked}")?,
        }
    }
    Ok(())
}
