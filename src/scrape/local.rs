// src/scrape/local.rs
// =============================================================================
// Extraction over local files, for checking the rules against a checkout
// without touching the network.
// =============================================================================

use super::pipeline::parse_module;
use crate::model::Module;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;

/// Parses each file into a module named after its file stem, in the order
/// given. An unreadable file fails the whole call.
pub fn parse_files(paths: &[PathBuf]) -> Result<Vec<Module>> {
    paths
        .iter()
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| anyhow!("Cannot derive a module name from {}", path.display()))?
                .to_string();

            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            Ok(parse_module(name, &text))
        })
        .collect()
}
