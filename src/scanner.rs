pub mod block;
mod run;
mod walk;

pub use block::{Block, BlockScanner, ScanError};
pub use run::{scan_files, scan_tree};
pub use walk::collect_source_files;
