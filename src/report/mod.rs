//! Match report output.
//!
//! The report is plain text with one line per k-mer that matched at least one
//! sequence:
//!
//! ```text
//! AC	s1,s3
//! TTTT	s2
//! ```
//!
//! Lines follow k-mer load order and sequence IDs follow FASTA order. There is
//! no header row and no summary.

pub mod writer;

pub use writer::{write_matches, write_report};
