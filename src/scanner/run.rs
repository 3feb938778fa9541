//! Whole-tree scan orchestration.
//!
//! Files are scanned in parallel, then requirement identifiers are assigned
//! in a sequential pass over the results in file order. This keeps the
//! identifier sequence gap-free and deterministic for a given file list
//! without sharing a counter across threads.

use std::path::{Path, PathBuf};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    domain::{Config, Record, Requirement, Ticket},
    scanner::{BlockScanner, ScanError, collect_source_files},
};

/// Hands out requirement identifiers in discovery order, starting at 1.
struct IdCounter(u64);

impl IdCounter {
    const fn new() -> Self {
        Self(0)
    }

    fn next_id(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// Scans the directory tree under `root` and returns all records in
/// discovery order.
///
/// # Errors
///
/// Returns the first error encountered: a malformed block anywhere in the
/// tree aborts the whole run.
pub fn scan_tree(root: &Path, config: &Config) -> Result<Vec<Record>, ScanError> {
    let files = collect_source_files(root, config);
    tracing::info!("scanning {} files under {}", files.len(), root.display());
    scan_files(&files, config)
}

/// Scans an explicit list of files and returns all records in discovery
/// order.
///
/// Every file with zero requirement blocks contributes one placeholder
/// record, unless the configuration suppresses them.
///
/// # Errors
///
/// Returns the first error encountered while scanning any of the files.
pub fn scan_files(files: &[PathBuf], config: &Config) -> Result<Vec<Record>, ScanError> {
    let scanner = BlockScanner::new();

    let scanned = files
        .par_iter()
        .map(|file| scanner.scan_file(file).map(|blocks| (file, blocks)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut counter = IdCounter::new();
    let mut records = Vec::new();
    for (file, blocks) in scanned {
        if blocks.is_empty() {
            if !config.skip_no_requirements {
                records.push(Record::NoRequirements {
                    source_file: file.clone(),
                });
            }
            continue;
        }
        for block in blocks {
            records.push(Record::Requirement(Requirement {
                id: counter.next_id(),
                description: block.description,
                ticket: block
                    .ticket
                    .map(|raw| Ticket::parse(&raw, &config.ticket_url_base)),
                source_file: file.clone(),
            }));
        }
    }

    Ok(records)
}
