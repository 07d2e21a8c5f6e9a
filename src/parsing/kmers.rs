use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::utils::io::{open_input, read_lines, text_lines};

/// Load the query k-mers from a file (plain or gzip compressed).
///
/// The k-mer is the first whitespace-delimited token of each line. Blank lines
/// are skipped and any further columns are ignored. Order and duplicates are
/// kept as they appear in the file.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be opened or read.
pub fn load_kmers(path: &Path) -> Result<Vec<String>> {
    let reader = open_input(path)?;
    let kmers = parse_kmers(reader).map_err(|e| Error::read(path, e))?;

    debug!("Loaded {} k-mers from {}", kmers.len(), path.display());
    Ok(kmers)
}

/// Parse k-mers from any buffered reader
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read or is not valid UTF-8.
pub fn parse_kmers<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut kmers = Vec::new();
    for line in read_lines(reader) {
        if let Some(kmer) = first_token(&line?) {
            kmers.push(kmer.to_string());
        }
    }
    report_repeats(&kmers);
    Ok(kmers)
}

/// Parse k-mers from in-memory text
#[must_use]
pub fn parse_kmer_text(text: &str) -> Vec<String> {
    let kmers: Vec<String> = text_lines(text)
        .filter_map(first_token)
        .map(str::to_string)
        .collect();
    report_repeats(&kmers);
    kmers
}

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Repeated k-mers are kept, but their results collapse into one report line
fn report_repeats(kmers: &[String]) {
    let mut seen = std::collections::HashSet::with_capacity(kmers.len());
    let repeats = kmers.iter().filter(|k| !seen.insert(k.as_str())).count();
    if repeats > 0 {
        warn!("{repeats} k-mer(s) are listed more than once; each is reported once");
    }
}
