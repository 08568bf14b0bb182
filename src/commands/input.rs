//! Input file parsing for `bulk-get` and `history`.
//!
//! Blank lines and lines starting with `#` are skipped. Any problem with the
//! file is an [`Error::InputFile`] raised before a single request is made.

use std::path::Path;

use log::debug;

use crate::application::HistoryEntry;
use crate::error::Error;
use crate::runtime::Runtime;

fn read_file<R: Runtime + ?Sized>(runtime: &R, path: &Path) -> Result<String, Error> {
    if !runtime.exists(path) {
        return Err(Error::InputFile(format!(
            "failed to open file: {} does not exist",
            path.display()
        )));
    }

    runtime
        .read_to_string(path)
        .map_err(|e| Error::InputFile(format!("failed to read file {}: {:#}", path.display(), e)))
}

/// Trimmed, non-blank, non-comment lines with their 1-based line numbers.
fn content_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Read repository identifiers, one per line.
///
/// Lines are not validated here; malformed identifiers become per-item
/// errors when the batch runs.
pub fn read_repositories<R: Runtime + ?Sized>(
    runtime: &R,
    path: &Path,
) -> Result<Vec<String>, Error> {
    let contents = read_file(runtime, path)?;
    let repositories: Vec<String> = content_lines(&contents)
        .map(|(_, line)| line.to_string())
        .collect();

    debug!(
        "Read {} repositories from {}",
        repositories.len(),
        path.display()
    );
    Ok(repositories)
}

/// Read `repository:version` entries, one per line.
pub fn read_history<R: Runtime + ?Sized>(
    runtime: &R,
    path: &Path,
) -> Result<Vec<HistoryEntry>, Error> {
    let contents = read_file(runtime, path)?;
    let mut entries = Vec::new();

    for (line_num, line) in content_lines(&contents) {
        entries.push(parse_history_line(line_num, line)?);
    }

    debug!("Read {} history entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn parse_history_line(line_num: usize, line: &str) -> Result<HistoryEntry, Error> {
    let (repository, version) = line.split_once(':').ok_or_else(|| {
        Error::InputFile(format!(
            "invalid format at line {}: expected 'repo:version', got '{}'",
            line_num, line
        ))
    })?;

    let (repository, version) = (repository.trim(), version.trim());
    if repository.is_empty() || version.is_empty() {
        return Err(Error::InputFile(format!(
            "invalid entry at line {}: repository and version cannot be empty",
            line_num
        )));
    }

    Ok(HistoryEntry::new(repository, version))
}
