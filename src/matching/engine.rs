use std::collections::HashMap;

use tracing::debug;

use crate::core::sequence::reverse_complement;
use crate::core::types::SequenceSet;

/// Sequences containing one k-mer in either orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerHits {
    /// The query k-mer as loaded
    pub kmer: String,

    /// Matching sequence IDs, in sequence iteration order
    pub sequence_ids: Vec<String>,
}

impl KmerHits {
    pub fn is_empty(&self) -> bool {
        self.sequence_ids.is_empty()
    }
}

/// Result of matching every k-mer against every sequence.
///
/// Keyed by k-mer text in first-load order. Every loaded k-mer has an entry,
/// including those that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerMatches {
    entries: Vec<KmerHits>,
    by_kmer: HashMap<String, usize>,
}

impl KmerMatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the hits for a k-mer.
    ///
    /// A k-mer already present has its hit list replaced; its position is unchanged.
    pub fn insert(&mut self, kmer: impl Into<String>, sequence_ids: Vec<String>) {
        let kmer = kmer.into();
        if let Some(&idx) = self.by_kmer.get(&kmer) {
            self.entries[idx].sequence_ids = sequence_ids;
            return;
        }
        self.by_kmer.insert(kmer.clone(), self.entries.len());
        self.entries.push(KmerHits { kmer, sequence_ids });
    }

    /// Matching sequence IDs for a k-mer, `None` if it was never queried
    pub fn get(&self, kmer: &str) -> Option<&[String]> {
        self.by_kmer
            .get(kmer)
            .map(|&idx| self.entries[idx].sequence_ids.as_slice())
    }

    /// All entries, including k-mers without hits
    pub fn iter(&self) -> std::slice::Iter<'_, KmerHits> {
        self.entries.iter()
    }

    /// Entries with at least one matching sequence
    pub fn matched(&self) -> impl Iterator<Item = &KmerHits> {
        self.entries.iter().filter(|h| !h.is_empty())
    }

    /// Number of distinct k-mers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.matched().count()
    }
}

impl<'a> IntoIterator for &'a KmerMatches {
    type Item = &'a KmerHits;
    type IntoIter = std::slice::Iter<'a, KmerHits>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Brute-force k-mer search over a set of sequences
pub struct MatchingEngine<'a> {
    sequences: &'a SequenceSet,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(sequences: &'a SequenceSet) -> Self {
        Self { sequences }
    }

    /// IDs of sequences containing `kmer` or its reverse complement.
    ///
    /// Each sequence is listed at most once, however many times and in however
    /// many orientations the k-mer occurs in it.
    pub fn search(&self, kmer: &str) -> Vec<String> {
        let rev_comp = reverse_complement(kmer);

        self.sequences
            .iter()
            .filter(|record| record.sequence.contains(kmer) || record.sequence.contains(&rev_comp))
            .map(|record| record.id.clone())
            .collect()
    }

    /// Search every k-mer in order.
    ///
    /// A k-mer listed more than once is searched each time; the last search
    /// determines its entry.
    pub fn find_matches<S: AsRef<str>>(&self, kmers: &[S]) -> KmerMatches {
        let mut matches = KmerMatches::new();

        for kmer in kmers {
            let kmer = kmer.as_ref();
            let hits = self.search(kmer);
            debug!("{kmer}: {} matching sequence(s)", hits.len());
            matches.insert(kmer, hits);
        }

        matches
    }
}

/// Match `kmers` against `sequences`; see [`MatchingEngine::find_matches`]
pub fn find_matches<S: AsRef<str>>(kmers: &[S], sequences: &SequenceSet) -> KmerMatches {
    MatchingEngine::new(sequences).find_matches(kmers)
}
