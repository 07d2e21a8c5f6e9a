//! Opening input files, with transparent gzip/bgzip decompression, and
//! splitting them into lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::error::{Error, Result};

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file for buffered line reading.
///
/// Paths ending in `.gz` or `.bgz` are decompressed on the fly. A multi-member
/// decoder is used so every BGZF block is read, not just the first.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| Error::read(path, e))?;

    if is_gzipped(path) {
        debug!("Reading {} as gzip", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Lines of a reader, ending at `\n`, `\r\n` or a lone `\r`.
///
/// Line terminators are not included. Errors (including invalid UTF-8) are
/// passed through as they occur.
pub fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().flat_map(|line| -> Vec<io::Result<String>> {
        match line {
            Ok(line) if line.contains('\r') => split_cr(&line)
                .map(|part| Ok(part.to_string()))
                .collect(),
            other => vec![other],
        }
    })
}

/// Lines of in-memory text, ending at `\n`, `\r\n` or a lone `\r`
pub fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(split_cr)
}

/// Split one `\n`-delimited line on classic Mac `\r` endings
fn split_cr(line: &str) -> std::str::Split<'_, char> {
    line.strip_suffix('\r').unwrap_or(line).split('\r')
}
