use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Per-user directory for ledgerlift settings: `$HOME/.ledgerlift`
pub fn ledgerlift_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".ledgerlift"))
}

pub fn ensure_ledgerlift_home() -> Result<PathBuf> {
    let dir = ledgerlift_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
