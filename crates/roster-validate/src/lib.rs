//! # roster-validate: Personnel Record Validation
//!
//! Classifies personnel records against a fixed table of field rules and
//! aggregates the results. Invalid data is only classified, never repaired.
//!
//! ## Rule Table (`rules`)
//!
//! [`RuleSet::standard`] is a static registration table mapping each
//! [`Field`](roster_core::Field) to a pure predicate over its raw JSON value.
//! Iterating the table drives both per-record validation and per-field
//! counting, so there is exactly one place a rule is declared.
//!
//! ## Validation Pass (`validator`)
//!
//! [`Validator`] takes ownership of a loaded [`RecordSet`](roster_core::RecordSet),
//! validates every record once, caches the reports and [`AggregateStats`],
//! and can write the fully-valid subset back out.
//!
//! ## Crate Policy
//!
//! - Depends only on `roster-core` internally.
//! - A record missing a recognized field aborts the pass with
//!   `RosterError::MissingField`; there is no skip-and-continue.

pub mod report;
pub mod rules;
pub mod validator;

pub use report::{AggregateStats, ValidityReport};
pub use rules::{Predicate, Rule, RuleSet};
pub use validator::Validator;
