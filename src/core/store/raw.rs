//! Raw extract store
//!
//! Persists the merged payload as `extract-YYYYMMDD.json` and picks the
//! extract the transform stage should read.

use super::{ensure_dir, write_atomically};
use crate::config::SelectionStrategy;
use crate::domain::{PindicaError, RawPayload, Result, RunDate};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const FILE_PREFIX: &str = "extract-";
const FILE_EXTENSION: &str = "json";

/// `extract-YYYYMMDD.json`
pub fn extract_file_name(date: RunDate) -> String {
    format!("{FILE_PREFIX}{}.{FILE_EXTENSION}", date.stamp())
}

/// Parses the run date out of an `extract-YYYYMMDD.json` file name
pub fn parse_extract_file_name(name: &str) -> Option<RunDate> {
    name.strip_prefix(FILE_PREFIX)?
        .strip_suffix(&format!(".{FILE_EXTENSION}"))?
        .parse()
        .ok()
}

/// Writes `payload` to `<dir>/extract-<date>.json`, replacing a same-day file
pub fn save(dir: &Path, date: RunDate, payload: &RawPayload) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(extract_file_name(date));

    write_atomically(&path, |writer| {
        serde_json::to_writer(writer, payload)?;
        Ok(())
    })?;

    tracing::info!(
        path = %path.display(),
        years = payload.len(),
        records = payload.record_count(),
        "Extraction loaded in extract folder"
    );
    Ok(path)
}

/// Reads a raw extract back into a payload
pub fn load(path: &Path) -> Result<RawPayload> {
    let contents = fs::read_to_string(path).map_err(|e| {
        PindicaError::Filesystem(format!("failed to read {}: {e}", path.display()))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        PindicaError::Serialization(format!(
            "{} is not a JSON object of year arrays: {e}",
            path.display()
        ))
    })
}

struct Candidate {
    path: PathBuf,
    modified: SystemTime,
    date: Option<RunDate>,
}

fn list_candidates(dir: &Path) -> Result<Vec<Candidate>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        PindicaError::Filesystem(format!(
            "cannot read extract directory {}: {e}",
            dir.display()
        ))
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let metadata = entry.metadata()?;

        if !metadata.is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION)
        {
            continue;
        }

        let date = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_extract_file_name);

        candidates.push(Candidate {
            modified: metadata.modified()?,
            path,
            date,
        });
    }

    Ok(candidates)
}

/// Picks the extract the transform stage reads
///
/// With [`SelectionStrategy::ModifiedTime`] the most recently modified `.json`
/// file wins, whatever its name. With [`SelectionStrategy::FilenameDate`] only
/// `extract-YYYYMMDD.json` files count; the latest date wins and modification
/// time breaks ties.
///
/// # Errors
///
/// Returns [`PindicaError::Filesystem`] when the directory is missing,
/// unreadable or holds no candidate file.
pub fn select_latest(dir: &Path, strategy: SelectionStrategy) -> Result<PathBuf> {
    let candidates = list_candidates(dir)?;

    let selected = match strategy {
        SelectionStrategy::ModifiedTime => candidates.into_iter().max_by_key(|c| c.modified),
        SelectionStrategy::FilenameDate => candidates
            .into_iter()
            .filter(|c| c.date.is_some())
            .max_by_key(|c| (c.date, c.modified)),
    };

    let selected = selected.ok_or_else(|| {
        PindicaError::Filesystem(format!(
            "no raw extract found in {}",
            dir.display()
        ))
    })?;

    tracing::info!(
        path = %selected.path.display(),
        strategy = ?strategy,
        "Following file is being transformed"
    );
    Ok(selected.path)
}
