//! K-mer matching engine.
//!
//! - [`MatchingEngine`]: searches query k-mers against a [`SequenceSet`]
//! - [`KmerMatches`]: per-k-mer list of matching sequence IDs
//!
//! ## Matching Algorithm
//!
//! For each k-mer the reverse complement is computed once. Every sequence is then
//! tested for substring containment of either orientation, and its ID recorded
//! once if either is present. Search is exact and case-sensitive, with no index:
//! cost grows with k-mers x sequences x sequence length.
//!
//! ## Example
//!
//! ```rust
//! use kmer_locate::{find_matches, SequenceSet};
//!
//! let sequences: SequenceSet = [("s1", "GGACGG"), ("s2", "TTGTTT")].into_iter().collect();
//! let matches = find_matches(&["AC"], &sequences);
//!
//! // s2 only contains GT, the reverse complement of AC
//! assert_eq!(matches.get("AC").unwrap(), &["s1", "s2"]);
//! ```
//!
//! [`SequenceSet`]: crate::core::types::SequenceSet

pub mod engine;

pub use engine::{find_matches, KmerHits, KmerMatches, MatchingEngine};
