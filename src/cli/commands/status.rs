//! Status command implementation
//!
//! Lists the raw extracts and clean files on disk and shows which extract the
//! next transform would pick.

use super::{report_failure, EXIT_SUCCESS};
use crate::cli::Cli;
use crate::core::store::raw;
use chrono::{DateTime, Local};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

/// A file shown in the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Local>,
}

/// Regular files in `dir` with the given extension, newest first
///
/// A missing directory yields an empty list.
pub fn list_files(dir: &Path, extension: &str) -> std::io::Result<Vec<FileEntry>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        let path = entry.path();
        if metadata.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(FileEntry {
                path,
                size: metadata.len(),
                modified: DateTime::<Local>::from(metadata.modified()?),
            });
        }
    }

    files.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(files)
}

fn print_listing(title: &str, dir: &str, files: &[FileEntry]) {
    println!("{title} ({dir}):");
    if files.is_empty() {
        println!("  (none)");
        return;
    }
    println!("  {:<40} {:>12} {:<20}", "File", "Bytes", "Modified");
    println!("  {}", "-".repeat(74));
    for file in files {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!(
            "  {:<40} {:>12} {:<20}",
            name,
            file.size,
            file.modified.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!("Checking pipeline status");

        let config = match cli.load_config() {
            Ok(c) => c,
            Err(e) => return Ok(report_failure("configuration", &e)),
        };
        let storage = &config.storage;

        println!("📊 Pindica Status");
        println!();

        let raw_files = list_files(Path::new(&storage.extract_dir), "json")?;
        let data_files = list_files(Path::new(&storage.data_dir), "csv")?;

        print_listing("Raw extracts", &storage.extract_dir, &raw_files);
        println!();
        print_listing("Clean files", &storage.data_dir, &data_files);
        println!();

        match raw::select_latest(Path::new(&storage.extract_dir), storage.selection) {
            Ok(path) => println!(
                "Next transform reads: {} (selection: {:?})",
                path.display(),
                storage.selection
            ),
            Err(_) => {
                println!("No raw extract yet.");
                println!("Run 'pindica extract' or 'pindica run' to fetch data.");
            }
        }
        println!();

        Ok(EXIT_SUCCESS)
    }
}
