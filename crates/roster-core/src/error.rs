//! # Error Types
//!
//! Every failure in a roster run is fatal: there is no skip-and-continue
//! over bad records. The taxonomy is therefore flat and each variant
//! carries enough context (path, record index, field) for a single
//! diagnostic line at the CLI boundary.

use std::path::PathBuf;

use thiserror::Error;

use crate::field::Field;

/// Top-level error type for roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The input decoded to text but is not an array of JSON objects.
    #[error("decode error in '{path}': {reason}")]
    Decode {
        /// File the document was read from.
        path: PathBuf,
        /// What was structurally wrong with it.
        reason: String,
    },

    /// Bytes could not be converted through the configured code page.
    #[error("encoding error in '{path}': {source}")]
    Encoding {
        /// File being read or written.
        path: PathBuf,
        /// The offending byte or character.
        #[source]
        source: EncodingError,
    },

    /// A record lacks a recognized field, or holds the wrong JSON type
    /// where an integer is mandatory.
    #[error("record {record}: field '{field}' {problem}")]
    MissingField {
        /// Zero-based position of the record in its collection.
        record: usize,
        /// The field that could not be read.
        field: Field,
        /// Whether the key was absent or the value mistyped.
        problem: FieldProblem,
    },

    /// The file could not be opened, read, or written.
    #[error("io error on '{path}': {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

/// Why a field could not be read from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    /// The key is not present in the record.
    Absent,
    /// The key is present but the value is not a JSON integer.
    NotInteger,
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("is missing"),
            Self::NotInteger => f.write_str("is not an integer"),
        }
    }
}

/// Error converting between bytes and text with a single-byte code page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The byte has no assigned character in the code page.
    #[error("byte 0x{byte:02X} at offset {offset} is undefined in {code_page}")]
    Undefined {
        /// Name of the code page.
        code_page: &'static str,
        /// The undecodable byte.
        byte: u8,
        /// Byte offset in the input.
        offset: usize,
    },

    /// The character has no byte in the code page.
    #[error("character {ch:?} ({}) at offset {offset} cannot be encoded in {code_page}", code_point(.ch))]
    Unmappable {
        /// Name of the code page.
        code_page: &'static str,
        /// The unencodable character.
        ch: char,
        /// Character offset in the input.
        offset: usize,
    },
}

fn code_point(ch: &char) -> String {
    format!("U+{:04X}", u32::from(*ch))
}
