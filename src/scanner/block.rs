//! Line-oriented scanner for tagged requirement blocks.
//!
//! A requirement block looks like this, embedded in the comments of any text
//! file (the `!>` marker may be preceded by arbitrary characters, e.g. the
//! host language's own comment syntax):
//!
//! ```text
//! !> @beginreq
//! !> - Requirement description which
//! !> may span multiple lines
//! !> - ticket 0000
//! !> @endreq
//! ```
//!
//! The first line after the begin marker must be a description line (marker,
//! hyphen, text). Lines without a hyphen continue the description. A `ticket`
//! entry, if present, ends the description.

use std::{
    io,
    path::{Path, PathBuf},
};

use regex::Regex;

/// A raw requirement block extracted from a single file.
///
/// The ticket value is kept verbatim here; expansion to canonical URLs
/// happens once the scan configuration is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Description text: the first description line plus any continuation
    /// lines, each right-trimmed, concatenated in source order.
    pub description: String,
    /// Raw ticket value, if the block carried a `ticket` entry.
    pub ticket: Option<String>,
}

/// Errors that can occur while scanning a file for requirement blocks.
///
/// Malformed blocks are fatal for the whole run: a report generated from a
/// partially understood file would silently lose traceability.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The line after a begin marker was not a valid description line.
    #[error("requirement not formatted correctly in file {file}, block: {line:?}")]
    MalformedBlock {
        /// The file containing the block.
        file: PathBuf,
        /// The offending line.
        line: String,
    },
    /// A line inside a block was missing the `!>` comment marker.
    #[error("error processing file {file}, line: {line:?}")]
    MalformedContinuation {
        /// The file containing the block.
        file: PathBuf,
        /// The offending line.
        line: String,
    },
    /// The file could not be read.
    #[error("failed to read {file}")]
    Io {
        /// The file that could not be read.
        file: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Scanner state: either looking for a begin marker, or accumulating body
/// lines until the end marker.
enum State {
    Searching,
    InBlock(Vec<String>),
}

/// Scans a file's lines for requirement blocks.
pub struct BlockScanner {
    begin: Regex,
    end: Regex,
    description: Regex,
    ticket: Regex,
}

impl BlockScanner {
    /// Creates a scanner with the fixed marker patterns.
    ///
    /// All patterns are case-insensitive and tolerate arbitrary leading
    /// characters and whitespace around the marker token and the hyphen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            begin: Regex::new(r"(?i)!>\s*@beginreq\s*$").expect("hard-coded pattern is valid"),
            end: Regex::new(r"(?i)!>\s*@endreq\s*$").expect("hard-coded pattern is valid"),
            description: Regex::new(r"^.*!>\s*-\s*").expect("hard-coded pattern is valid"),
            ticket: Regex::new(r"(?i)^.*!>\s*-\s*ticket\s*").expect("hard-coded pattern is valid"),
        }
    }

    /// Scans a file on disk.
    ///
    /// A file that does not exist yields zero blocks rather than an error.
    /// Bytes that are not valid UTF-8 are replaced, not fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if a block
    /// is malformed.
    pub fn scan_file(&self, file: &Path) -> Result<Vec<Block>, ScanError> {
        if !file.is_file() {
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(file).map_err(|source| ScanError::Io {
            file: file.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);

        self.scan_source(file, &source)
    }

    /// Scans already-loaded file content.
    ///
    /// Blocks are returned in source order. A begin marker with no matching
    /// end marker before end-of-file is discarded with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if a block is malformed (see [`ScanError`]).
    pub fn scan_source(&self, file: &Path, source: &str) -> Result<Vec<Block>, ScanError> {
        let mut blocks = Vec::new();
        let mut state = State::Searching;

        for line in source.lines() {
            match &mut state {
                State::Searching => {
                    if self.begin.is_match(line) {
                        state = State::InBlock(Vec::new());
                    }
                }
                State::InBlock(body) => {
                    if self.end.is_match(line) {
                        // An empty body violates the mandatory-description
                        // rule; report the line that exposed it.
                        if body.is_empty() {
                            return Err(ScanError::MalformedBlock {
                                file: file.to_path_buf(),
                                line: line.to_string(),
                            });
                        }
                        blocks.push(self.parse_block(file, body)?);
                        state = State::Searching;
                    } else {
                        body.push(line.to_string());
                    }
                }
            }
        }

        if matches!(state, State::InBlock(_)) {
            tracing::warn!(
                file = %file.display(),
                "unterminated requirement block (no @endreq before end of file); block discarded"
            );
        }

        Ok(blocks)
    }

    /// Parses one block body (the lines between the markers).
    fn parse_block(&self, file: &Path, body: &[String]) -> Result<Block, ScanError> {
        let first = &body[0];
        let Some(matched) = self.description.find(first) else {
            return Err(ScanError::MalformedBlock {
                file: file.to_path_buf(),
                line: first.clone(),
            });
        };
        let mut description = first[matched.end()..].trim_end().to_string();

        let mut ticket = None;
        for line in &body[1..] {
            if let Some(matched) = self.ticket.find(line) {
                ticket = Some(line[matched.end()..].trim_end().to_string());
                // Anything between the ticket entry and the end marker is
                // not part of the requirement.
                break;
            }
            // Continuation text sits between the first and second markers
            // on the rare line that contains `!>` more than once.
            let Some(continuation) = line.splitn(3, "!>").nth(1) else {
                return Err(ScanError::MalformedContinuation {
                    file: file.to_path_buf(),
                    line: line.clone(),
                });
            };
            description.push_str(continuation.trim_end());
        }

        Ok(Block {
            description,
            ticket,
        })
    }
}

impl Default for BlockScanner {
    fn default() -> Self {
        Self::new()
    }
}
