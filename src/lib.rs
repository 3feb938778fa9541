//! Requirement traceability for tagged source comments
//!
//! Requirements are comment blocks embedded in source and test files,
//! delimited by `!> @beginreq` / `!> @endreq` markers. This crate scans a
//! directory tree for those blocks and collects them into a report table.

pub mod domain;
pub use domain::{Config, Record, Requirement, Ticket};

/// File discovery and requirement block scanning.
pub mod scanner;
pub use scanner::{BlockScanner, ScanError, scan_tree};

/// Report table assembly and HTML rendering.
pub mod report;
pub use report::ReportTable;
