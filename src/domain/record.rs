use std::path::{Path, PathBuf};

use crate::domain::Ticket;

/// A single requirement extracted from a tagged comment block.
///
/// Requirements are discovered in source order and numbered with a
/// process-wide ascending counter, so identifiers are unique across the whole
/// run, not just within one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Identifier assigned in discovery order, starting at 1.
    pub(crate) id: u64,
    /// Free-text description, first line plus any continuation lines.
    pub(crate) description: String,
    /// Optional ticket reference attached to the requirement.
    pub(crate) ticket: Option<Ticket>,
    /// File the requirement was extracted from.
    pub(crate) source_file: PathBuf,
}

impl Requirement {
    /// The identifier assigned to this requirement.
    ///
    /// Identifiers are strictly increasing in discovery order across all
    /// scanned files.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The requirement description.
    ///
    /// Never empty: a block whose description line is missing fails the scan.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The ticket reference, if the block carried one.
    #[must_use]
    pub const fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// The file this requirement was extracted from.
    #[must_use]
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }
}

/// One row of the traceability report.
///
/// A file with no requirement blocks still appears in the report, as a
/// placeholder row carrying only the file path. Modelling that as a variant
/// rather than a bundle of nullable fields keeps "has this file been covered"
/// checks explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A real requirement parsed from a block.
    Requirement(Requirement),
    /// Placeholder for a file in which no requirement blocks were found.
    NoRequirements {
        /// The file that was scanned.
        source_file: PathBuf,
    },
}

impl Record {
    /// The file this record refers to.
    #[must_use]
    pub fn source_file(&self) -> &Path {
        match self {
            Self::Requirement(requirement) => requirement.source_file(),
            Self::NoRequirements { source_file } => source_file,
        }
    }

    /// The identifier, if this record is a real requirement.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Requirement(requirement) => Some(requirement.id),
            Self::NoRequirements { .. } => None,
        }
    }

    /// Returns `true` for placeholder rows.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::NoRequirements { .. })
    }
}
