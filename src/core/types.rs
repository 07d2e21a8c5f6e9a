use std::collections::HashMap;

/// A single FASTA record: identifier plus its concatenated sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Header text after `>`
    pub id: String,

    /// All sequence lines of the record joined without separators
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// Insertion-ordered mapping from record ID to sequence.
///
/// IDs are unique. Inserting an ID that is already present replaces its
/// sequence but keeps the position where the ID was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSet {
    records: Vec<SequenceRecord>,
    by_id: HashMap<String, usize>,
}

impl SequenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the sequence it replaced if the ID was already present
    pub fn insert(&mut self, id: impl Into<String>, sequence: impl Into<String>) -> Option<String> {
        let id = id.into();
        let sequence = sequence.into();

        if let Some(&idx) = self.by_id.get(&id) {
            return Some(std::mem::replace(&mut self.records[idx].sequence, sequence));
        }

        self.by_id.insert(id.clone(), self.records.len());
        self.records.push(SequenceRecord::new(id, sequence));
        None
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.by_id
            .get(id)
            .map(|&idx| self.records[idx].sequence.as_str())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    /// Record IDs in iteration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    /// Sum of all sequence lengths in bytes
    pub fn total_length(&self) -> usize {
        self.records.iter().map(|r| r.sequence.len()).sum()
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I: Into<String>, S: Into<String>> FromIterator<(I, S)> for SequenceSet {
    fn from_iter<T: IntoIterator<Item = (I, S)>>(iter: T) -> Self {
        let mut set = SequenceSet::new();
        for (id, sequence) in iter {
            set.insert(id, sequence);
        }
        set
    }
}
