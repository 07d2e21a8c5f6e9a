//! # kmer-locate
//!
//! A library for finding which DNA sequences contain a set of query k-mers.
//!
//! Given a list of short k-mers and a multi-record FASTA file, `kmer-locate`
//! reports, for each k-mer, the IDs of every record that contains it either as
//! written or as its reverse complement.
//!
//! ## Features
//!
//! - **Both strands**: a record matches on the k-mer or its reverse complement
//! - **Presence only**: each matching record is listed once per k-mer
//! - **Order preserving**: results follow k-mer load order and FASTA record order
//! - **Compressed input**: gzip/bgzip k-mer lists and FASTA files are read directly
//! - **Atomic output**: the report replaces any previous file only once complete
//!
//! ## Example
//!
//! ```rust,no_run
//! use kmer_locate::{find_matches, parse_fasta, load_kmers, write_report};
//! use std::path::Path;
//!
//! let kmers = load_kmers(Path::new("kmers.txt")).unwrap();
//! let sequences = parse_fasta(Path::new("sequences.fa")).unwrap();
//!
//! let matches = find_matches(&kmers, &sequences);
//! for hits in matches.matched() {
//!     println!("{}: {}", hits.kmer, hits.sequence_ids.join(","));
//! }
//!
//! write_report(&matches, Path::new("matches.txt")).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence records and reverse complement
//! - [`parsing`]: K-mer list and FASTA parsers
//! - [`matching`]: Matching engine
//! - [`report`]: Report writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod error;
pub mod matching;
pub mod parsing;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::sequence::reverse_complement;
pub use crate::core::types::{SequenceRecord, SequenceSet};
pub use crate::error::{Error, Result};
pub use crate::matching::engine::{find_matches, KmerHits, KmerMatches, MatchingEngine};
pub use crate::parsing::fasta::parse_fasta;
pub use crate::parsing::kmers::load_kmers;
pub use crate::report::writer::write_report;
