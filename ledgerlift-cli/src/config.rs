use anyhow::{Context, Result};
use ledgerlift_core::CurrencyFormat;
use ledgerlift_export::OutputFormat;
use ledgerlift_ingest::{ClassifierRules, Extractor, LineClassifier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_ledgerlift_home, ledgerlift_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    pub classifier: ClassifierRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Printed before the amount digits ("$1,234.50", "-$7.00")
    pub currency_symbol: String,
    /// Used when `--format` is not given
    pub format: OutputFormat,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            currency_symbol: CurrencyFormat::default().symbol,
            format: OutputFormat::Csv,
        }
    }
}

impl Config {
    pub fn extractor(&self) -> Extractor {
        Extractor::new(
            LineClassifier::new(self.classifier.clone()),
            CurrencyFormat::new(&self.output.currency_symbol),
        )
    }
}

/// Default config location, or `None` when `HOME` is not set.
pub fn config_path() -> Option<PathBuf> {
    ledgerlift_home().ok().map(|home| home.join("config.toml"))
}

/// Load from `path`, or the default location. A missing file (or no `HOME`)
/// means defaults; an explicitly named file must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    load_config_from(path, config_path())
}

fn load_config_from(explicit: Option<&Path>, default_path: Option<PathBuf>) -> Result<Config> {
    let p = match (explicit, default_path) {
        (Some(p), _) => p.to_path_buf(),
        (None, Some(p)) if p.exists() => p,
        (None, default_path) => {
            tracing::debug!(?default_path, "no config file, using defaults");
            return Ok(Config::default());
        }
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

/// Write the default config to `path`, or to `~/.ledgerlift/config.toml`.
/// An existing file is left alone.
pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => ensure_ledgerlift_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(())
}
