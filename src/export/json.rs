//! JSON backup of review progress.
//! Saves and restores the full review item collection to/from JSON files.

use crate::error::{Result, SrsError};
use crate::models::ReviewItem;
use crate::srs::store::dedupe;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports review items to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path<P: AsRef<Path>>(items: &[ReviewItem], path: P) -> Result<()> {
    let json_string = serde_json::to_string_pretty(items)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports review items from a JSON file.
/// Unlike loading from storage, a missing file or invalid JSON is an error.
/// So is a record with an out-of-range easiness factor or interval.
/// Duplicate (id, type) records keep their first occurrence.
pub fn import_json<P: AsRef<Path>>(path: P) -> Result<Vec<ReviewItem>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let items: Vec<ReviewItem> = serde_json::from_str(&contents)?;
    if let Some((item, reason)) = items
        .iter()
        .find_map(|item| item.invalid_reason().map(|reason| (item, reason)))
    {
        return Err(SrsError::InvalidItem(item.key().to_string(), reason));
    }
    Ok(dedupe(items))
}
