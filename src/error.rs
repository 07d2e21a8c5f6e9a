use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading inputs or writing the report.
///
/// Every variant is an I/O failure. Malformed k-mer lists and FASTA files are
/// never an error; the parsers skip or absorb what they cannot interpret.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Error::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
