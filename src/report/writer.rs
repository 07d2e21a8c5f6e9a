use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::matching::engine::KmerMatches;

/// Write the match report to `path`.
///
/// A missing or regular-file destination is replaced atomically: the report is
/// built in a temporary file next to `path` and renamed into place once
/// complete, so a failure never leaves a truncated report. Symlinks, FIFOs and
/// devices (e.g. `/dev/stdout`) are opened and written through instead, as is
/// an existing file whose directory does not allow new files.
///
/// # Errors
///
/// Returns `Error::Write` if the destination (or its temporary file) cannot be
/// created, written, or moved into place.
pub fn write_report(matches: &KmerMatches, path: &Path) -> Result<()> {
    let lines = match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_file() => match temp_file_for(path) {
            Ok(temp) => write_atomic(matches, path, temp)?,
            Err(e) => {
                debug!(
                    "Cannot create a temporary file next to {} ({e}); writing in place",
                    path.display()
                );
                write_in_place(matches, path)?
            }
        },
        Ok(_) => write_in_place(matches, path)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let temp = temp_file_for(path).map_err(|e| Error::write(path, e))?;
            write_atomic(matches, path, temp)?
        }
        Err(e) => return Err(Error::write(path, e)),
    };

    debug!("Wrote {lines} report line(s) to {}", path.display());
    Ok(())
}

fn temp_file_for(path: &Path) -> std::io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir)?;

    // Temp files are created owner-only; the report should be world-readable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    Ok(temp)
}

fn write_atomic(matches: &KmerMatches, path: &Path, temp: NamedTempFile) -> Result<usize> {
    let mut writer = BufWriter::new(temp);
    let lines = write_matches(matches, &mut writer).map_err(|e| Error::write(path, e))?;

    let temp = writer
        .into_inner()
        .map_err(|e| Error::write(path, e.into_error()))?;
    temp.persist(path).map_err(|e| Error::write(path, e.error))?;
    Ok(lines)
}

fn write_in_place(matches: &KmerMatches, path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut writer = BufWriter::new(file);
    write_matches(matches, &mut writer).map_err(|e| Error::write(path, e))
}

/// Write one `<kmer>\t<id>,<id>,...` line per k-mer with at least one hit.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn write_matches<W: Write>(matches: &KmerMatches, writer: &mut W) -> std::io::Result<usize> {
    let mut lines = 0;
    for hits in matches.matched() {
        writeln!(writer, "{}\t{}", hits.kmer, hits.sequence_ids.join(","))?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}
