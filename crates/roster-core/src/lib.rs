//! # roster-core: Foundational Types for roster
//!
//! This crate is the leaf of the roster workspace. It defines the data model
//! every other crate operates on and owns the two file boundaries.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Field` enum.** The nine recognized personnel fields are one
//!    definition in one canonical order. Per-field counters, reports, and
//!    rule tables are indexed by it, so a field cannot be silently dropped.
//!
//! 2. **Records are opaque JSON objects.** A [`Record`] keeps the decoded
//!    object verbatim, including passthrough keys and insertion order, and
//!    only exposes typed access to recognized fields.
//!
//! 3. **Encoding lives at the edges.** [`CodePage`] converts between bytes
//!    and text at load/write time only. Everything in between works on
//!    decoded `String`s.
//!
//! 4. **Atomic output.** [`write_records`] renders the full document into
//!    memory, writes a temporary sibling file, and renames it over the target.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `roster-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codec;
pub mod error;
pub mod field;
pub mod io;
pub mod record;

pub use codec::{CodePage, WINDOWS_1251};
pub use error::{EncodingError, FieldProblem, RosterError};
pub use field::{Field, FieldKind, FIELD_COUNT};
pub use io::{load_records, render_records, write_records};
pub use record::{Record, RecordSet};
