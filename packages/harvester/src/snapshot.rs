//! Corpus snapshot: the parsed corpus written once as JSON and read back on startup.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use crate::error::{HarvesterError, Result};
use crate::types::Regulation;

/// Serialize regulations to the snapshot JSON format.
///
/// Non-ASCII text is written as-is; output is pretty-printed.
pub fn to_json(regulations: &[Regulation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(regulations)?)
}

/// Save regulations as a snapshot file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt an existing snapshot on crash.
pub fn save_snapshot(regulations: &[Regulation], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "regulations.json".to_string());
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    let content = to_json(regulations)?;
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;
    tracing::info!(path = %path.display(), regulations = regulations.len(), "Snapshot saved");
    Ok(())
}

/// Load regulations from a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Vec<Regulation>> {
    if !path.exists() {
        return Err(HarvesterError::SnapshotMissing(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    let regulations: Vec<Regulation> = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), regulations = regulations.len(), "Snapshot loaded");
    Ok(regulations)
}
