//! Dated file stores
//!
//! - [`raw`] - `extract-YYYYMMDD.json`, the merged API response
//! - [`clean`] - `data-YYYYMMDD.csv`, the transformed table
//!
//! Both stores create their directory on demand and replace a file written
//! earlier on the same day. Files are written to a `.tmp` sibling and renamed
//! into place once complete.

pub mod clean;
pub mod raw;

use crate::domain::{PindicaError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes `final_path` through a temporary sibling file
pub(crate) fn write_atomically<F>(final_path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file_name = final_path
        .file_name()
        .ok_or_else(|| {
            PindicaError::Filesystem(format!("{} has no file name", final_path.display()))
        })?
        .to_string_lossy();
    let tmp_path = final_path.with_file_name(format!(".{file_name}.tmp"));

    let tmp_file = File::create(&tmp_path).map_err(|e| {
        PindicaError::Filesystem(format!(
            "could not create temporary file {}: {e}",
            tmp_path.display()
        ))
    })?;
    let mut writer = BufWriter::new(tmp_file);

    if let Err(e) = write(&mut writer).and_then(|_| writer.flush().map_err(PindicaError::from)) {
        drop(writer);
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&tmp_path, final_path).map_err(|e| {
        PindicaError::Filesystem(format!(
            "failed to rename {} to {}: {e}",
            tmp_path.display(),
            final_path.display()
        ))
    })
}

/// Creates `dir` (and parents) if needed
pub(crate) fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        PindicaError::Filesystem(format!("failed to create directory {}: {e}", dir.display()))
    })?;
    Ok(dir.to_path_buf())
}
