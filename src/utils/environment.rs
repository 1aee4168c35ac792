use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the Claude directory path (~/.claude)
///
/// `HOME` takes precedence over the platform home directory so tests (and
/// users) can redirect lookups.
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = env::var("HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::home_dir)
        .context("Could not determine home directory")?;
    Ok(home.join(".claude"))
}
