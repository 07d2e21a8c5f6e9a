//! FASTA parser producing an ID -> sequence mapping.
//!
//! Each line is trimmed before it is interpreted. A line starting with `>`
//! opens a new record whose ID is the rest of the line (description included);
//! every other line is appended to the open record. Text before the first header
//! has no record to attach to and is dropped.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::types::SequenceSet;
use crate::error::{Error, Result};
use crate::utils::io::{open_input, read_lines, text_lines};

/// Parse a FASTA file into an insertion-ordered mapping of record ID to sequence.
///
/// When the same ID appears twice the later sequence replaces the earlier one.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be opened or read.
pub fn parse_fasta(path: &Path) -> Result<SequenceSet> {
    let reader = open_input(path)?;
    let sequences = parse_fasta_reader(reader).map_err(|e| Error::read(path, e))?;

    debug!(
        "Loaded {} sequences ({} bases) from {}",
        sequences.len(),
        sequences.total_length(),
        path.display()
    );
    Ok(sequences)
}

/// Parse FASTA records from any buffered reader
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read or is not valid UTF-8.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> std::io::Result<SequenceSet> {
    let mut builder = RecordBuilder::default();
    for line in read_lines(reader) {
        builder.push_line(&line?);
    }
    Ok(builder.finish())
}

/// Parse FASTA records from in-memory text
#[must_use]
pub fn parse_fasta_text(text: &str) -> SequenceSet {
    let mut builder = RecordBuilder::default();
    for line in text_lines(text) {
        builder.push_line(line);
    }
    builder.finish()
}

#[derive(Default)]
struct RecordBuilder {
    sequences: SequenceSet,
    /// ID of the open record, `None` before the first header
    id: Option<String>,
    chunks: Vec<String>,
}

impl RecordBuilder {
    fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if let Some(id) = line.strip_prefix('>') {
            self.commit();
            self.id = Some(id.to_string());
        } else if self.id.is_some() {
            self.chunks.push(line.to_string());
        }
    }

    fn commit(&mut self) {
        let chunks = std::mem::take(&mut self.chunks);
        let Some(id) = self.id.take() else {
            return;
        };

        // A bare `>` header never produces a record
        if id.is_empty() {
            debug!("Dropping FASTA record with an empty ID");
            return;
        }

        if self.sequences.insert(id.as_str(), chunks.concat()).is_some() {
            warn!("Duplicate FASTA ID '{id}': keeping the later sequence");
        }
    }

    fn finish(mut self) -> SequenceSet {
        self.commit();
        self.sequences
    }
}
