//! CLI subcommand implementations.

pub mod new;
pub mod run;
pub mod show;

use std::fs;
use std::path::Path;

use tvl_core::CharacterRecord;

use crate::error::CliResult;

/// Load a character record from a JSON file.
pub fn load_record(path: &Path) -> CliResult<CharacterRecord> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save a character record to a JSON file.
pub fn save_record(path: &Path, record: &CharacterRecord) -> CliResult<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}
