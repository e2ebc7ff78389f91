//! Streaming a file and keeping the selected lines.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::domain::errors::ReadError;
use crate::domain::model::{FormatMode, Selection};

/// Read `path` and return the kept lines joined by `\n`, without a trailing newline.
///
/// Whole-file selections are copied verbatim and never numbered, whatever `format` says. Only
/// explicit selections go through [`FormatMode::render`].
pub fn read_selection(
    path: &Path,
    selection: &Selection,
    format: FormatMode,
) -> Result<String, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    collect_lines(BufReader::new(file), path, selection, format)
}

fn collect_lines<R: BufRead>(
    reader: R,
    path: &Path,
    selection: &Selection,
    format: FormatMode,
) -> Result<String, ReadError> {
    let mut kept: Vec<String> = Vec::new();

    for (idx, chunk) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        // Scan to EOF; a read error past the last wanted line still fails the file.
        let bytes = chunk.map_err(|source| ReadError::Scan {
            path: path.to_path_buf(),
            source,
        })?;
        if !selection.contains(line_no) {
            continue;
        }

        let text = decode_line(&bytes);
        match selection {
            Selection::All => kept.push(text.into_owned()),
            Selection::Lines(_) => kept.push(format.render(line_no, &text)),
        }
    }

    if kept.is_empty() {
        return Err(ReadError::NoMatchingLines {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), lines = kept.len(), "collected lines");
    Ok(kept.join("\n"))
}

fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}
