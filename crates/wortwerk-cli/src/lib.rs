// wortwerk-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args};
use log::{debug, info};

use wortwerk_engine::{CheckOptions, Dictionary, ProcessorRegistry, Spellchecker};

/// Directory of `*.json` dictionaries used when no `-d` is given.
pub const DICT_PATH_ENV: &str = "WORTWERK_DICT_PATH";

/// Arguments every tool accepts.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Dictionary JSON file (repeatable, consulted in order)
    #[arg(short = 'd', long = "dict", value_name = "FILE")]
    pub dictionaries: Vec<PathBuf>,

    /// Check options as JSON (camelCase keys)
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins.
///
/// Call once per process, at the top of `main`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Dictionary files to load.
///
/// Search order:
/// 1. explicit `-d` paths
/// 2. every `*.json` in `WORTWERK_DICT_PATH`, sorted by name
pub fn dictionary_paths(explicit: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }
    let Ok(dir) = std::env::var(DICT_PATH_ENV) else {
        bail!("no dictionaries given: pass -d FILE or set {DICT_PATH_ENV}");
    };
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .with_context(|| format!("failed to read {DICT_PATH_ENV} directory {dir}"))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        bail!("no *.json dictionaries in {dir}");
    }
    Ok(paths)
}

/// Read and build one dictionary file.
pub fn load_dictionary(path: &Path, registry: &ProcessorRegistry) -> Result<Dictionary> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Dictionary::from_json(&json, registry)
        .with_context(|| format!("invalid dictionary {}", path.display()))
}

/// Build a spellchecker from the common arguments.
pub fn load_checker(args: &CommonArgs) -> Result<Spellchecker> {
    let registry = ProcessorRegistry::new();
    let options = match &args.options {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            CheckOptions::default()
                .merged_json(&json)
                .with_context(|| format!("invalid options {}", path.display()))?
        }
        None => CheckOptions::default(),
    };

    let mut checker = Spellchecker::with_options(options);
    for path in dictionary_paths(&args.dictionaries)? {
        debug!("loading {}", path.display());
        checker.add_dictionary(load_dictionary(&path, &registry)?);
    }
    info!("{} dictionaries loaded", checker.dictionaries().len());
    Ok(checker)
}

/// The given arguments, or stdin lines when there are none.
///
/// Blank stdin lines are skipped when `skip_blank` is set.
pub fn inputs(args: &[String], skip_blank: bool) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("error reading stdin")?;
        if skip_blank && line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_paths_win() {
        let paths = vec![PathBuf::from("a.json"), PathBuf::from("b.json")];
        assert_eq!(dictionary_paths(&paths).unwrap(), paths);
    }

    #[test]
    fn missing_file_has_context() {
        let err = load_dictionary(Path::new("/nonexistent/de.json"), &ProcessorRegistry::new())
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/de.json"));
    }

    #[test]
    fn explicit_inputs_are_returned() {
        let args = vec!["Haus".to_string(), "Tür".to_string()];
        assert_eq!(inputs(&args, true).unwrap(), args);
    }
}
