//! # Record File I/O
//!
//! The two file boundaries of a roster run. Both are scoped: the file is
//! opened, fully consumed or written, and closed before returning, on
//! success and on every error path.
//!
//! Output is rendered completely in memory first, encoded, written to a
//! temporary file next to the target, and renamed into place. A failure at
//! any step leaves the previous target (if any) untouched.

use std::borrow::Borrow;
use std::io::Write;
use std::path::Path;

use serde::Serializer as _;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::codec::CodePage;
use crate::error::RosterError;
use crate::record::{Record, RecordSet};

const INDENT: &[u8] = b"    ";

/// Load a record collection from an encoded JSON file.
///
/// # Errors
///
/// - `RosterError::Io` if the file cannot be read.
/// - `RosterError::Encoding` if a byte is undefined in `code_page`.
/// - `RosterError::Decode` if the text is not a JSON array of objects.
pub fn load_records(path: &Path, code_page: &CodePage) -> Result<RecordSet, RosterError> {
    let bytes = std::fs::read(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = code_page
        .decode(&bytes)
        .map_err(|source| RosterError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

    let document: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| RosterError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let records = RecordSet::from_json(document).map_err(|reason| RosterError::Decode {
        path: path.to_path_buf(),
        reason,
    })?;

    tracing::info!(
        path = %path.display(),
        encoding = code_page.name,
        records = records.len(),
        "loaded records"
    );
    Ok(records)
}

/// Render records as a pretty-printed JSON array (4-space indent, keys in
/// insertion order, non-ASCII characters literal).
pub fn render_records<R: Borrow<Record>>(records: &[R]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    (&mut ser).collect_seq(records.iter().map(<R as Borrow<Record>>::borrow))?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

/// Atomically write records to an encoded JSON file.
///
/// # Errors
///
/// - `RosterError::Encoding` if a character cannot be represented in
///   `code_page`. Nothing is written in that case.
/// - `RosterError::Io` if the temporary file cannot be created, written,
///   or renamed over `path`.
pub fn write_records<R: Borrow<Record>>(
    path: &Path,
    records: &[R],
    code_page: &CodePage,
) -> Result<(), RosterError> {
    let io_err = |source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = render_records(records).map_err(|e| io_err(std::io::Error::from(e)))?;
    let bytes = code_page
        .encode(&text)
        .map_err(|source| RosterError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::info!(
        path = %path.display(),
        encoding = code_page.name,
        records = records.len(),
        bytes = bytes.len(),
        "wrote records"
    );
    Ok(())
}
