//! Parsers for the two pipeline inputs.
//!
//! - **K-mer lists**: one query k-mer per line, taken from the first column
//! - **FASTA files**: multi-record, single- or multi-line sequences
//!
//! Both accept gzip/bgzip compressed files. Neither validates its input:
//! malformed lines are skipped or absorbed, and only I/O failures are errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kmer_locate::parsing::{fasta::parse_fasta, kmers::load_kmers};
//! use std::path::Path;
//!
//! let kmers = load_kmers(Path::new("kmers.txt")).unwrap();
//! let sequences = parse_fasta(Path::new("sequences.fa")).unwrap();
//! ```

pub mod fasta;
pub mod kmers;
