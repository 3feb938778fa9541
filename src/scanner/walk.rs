//! Candidate file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::Config;

/// Collects the files to scan under `root`, filtered by the configured
/// extension suffixes.
///
/// Entries are visited in file-name order so a run is reproducible; the
/// requirement identifiers assigned downstream depend on this order.
/// Unreadable directory entries are skipped with a warning.
#[must_use]
pub fn collect_source_files(root: &Path, config: &Config) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| config.matches_extension(name))
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
