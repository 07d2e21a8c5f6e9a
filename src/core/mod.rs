//! Core data types and nucleotide transforms.
//!
//! - [`SequenceRecord`]: a FASTA record ID with its concatenated sequence
//! - [`SequenceSet`]: insertion-ordered, ID-unique collection of records
//! - [`sequence::reverse_complement`]: reverse complement of a DNA string
//!
//! ## Complement rules
//!
//! | Base | Complement |
//! |------|------------|
//! | A    | T          |
//! | T    | A          |
//! | C    | G          |
//! | G    | C          |
//! | other| unchanged  |
//!
//! Matching is case-sensitive, so lowercase bases are never complemented.

pub mod sequence;
pub mod types;

pub use types::{SequenceRecord, SequenceSet};
