//! # Validator
//!
//! Owns one snapshot of a record collection, validates every record once
//! at construction, and answers all statistics queries from that pass.
//! Running the same input twice yields identical reports and counts.

use std::path::Path;

use roster_core::{load_records, write_records, CodePage, Field, Record, RecordSet, RosterError};
use roster_core::{FIELD_COUNT, WINDOWS_1251};

use crate::report::{AggregateStats, ValidityReport};
use crate::rules::RuleSet;

/// Validation state for one loaded record collection.
#[derive(Debug)]
pub struct Validator {
    records: RecordSet,
    reports: Vec<ValidityReport>,
    stats: AggregateStats,
    rules: &'static RuleSet,
    code_page: &'static CodePage,
}

impl Validator {
    /// Load records from `path` and validate them.
    ///
    /// The code page is remembered and used again by
    /// [`write_valid_records`](Self::write_valid_records).
    ///
    /// # Errors
    ///
    /// Propagates `Io`, `Encoding` and `Decode` errors from loading, and
    /// `MissingField` if any record lacks a recognized field.
    pub fn load(path: &Path, code_page: &'static CodePage) -> Result<Self, RosterError> {
        let records = load_records(path, code_page)?;
        let mut validator = Self::new(records)?;
        validator.code_page = code_page;
        Ok(validator)
    }

    /// Validate an in-memory collection with the standard rules.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::MissingField` for the first record lacking a
    /// recognized field.
    pub fn new(records: RecordSet) -> Result<Self, RosterError> {
        Self::with_rules(records, RuleSet::standard())
    }

    /// Validate an in-memory collection with a specific rule set.
    pub fn with_rules(records: RecordSet, rules: &'static RuleSet) -> Result<Self, RosterError> {
        let reports = records
            .iter()
            .map(|record| rules.validate(record))
            .collect::<Result<Vec<_>, _>>()?;
        let stats = AggregateStats::from_reports(&reports);
        tracing::info!(
            total = stats.total,
            valid = stats.valid,
            invalid = stats.invalid,
            "validated records"
        );

        Ok(Self {
            records,
            reports,
            stats,
            rules,
            code_page: &WINDOWS_1251,
        })
    }

    /// Run every rule against a single record.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::MissingField` if the record lacks a
    /// recognized field.
    pub fn validate(&self, record: &Record) -> Result<ValidityReport, RosterError> {
        self.rules.validate(record)
    }

    /// The loaded records, in file order.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// One report per record, in file order.
    pub fn reports(&self) -> &[ValidityReport] {
        &self.reports
    }

    /// Aggregate statistics for the snapshot.
    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// Number of fully-valid records.
    pub fn count_valid(&self) -> usize {
        self.stats.valid
    }

    /// Number of records with at least one failing field.
    pub fn count_invalid(&self) -> usize {
        self.stats.invalid
    }

    /// Failures per field, in canonical field order.
    pub fn count_invalid_per_field(&self) -> [usize; FIELD_COUNT] {
        self.stats.invalid_per_field
    }

    /// Fully-valid records in file order.
    pub fn valid_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .zip(&self.reports)
            .filter_map(|(record, report)| report.is_valid().then_some(record))
            .collect()
    }

    /// Each invalid record with the fields it failed.
    pub fn failures(&self) -> impl Iterator<Item = (&Record, Vec<Field>)> + '_ {
        self.records
            .iter()
            .zip(&self.reports)
            .filter(|(_, report)| !report.is_valid())
            .map(|(record, report)| (record, report.failing_fields()))
    }

    /// Write the fully-valid subset to `path`, preserving record order and
    /// key order, in the code page the records were loaded with.
    ///
    /// # Errors
    ///
    /// Returns `Encoding` or `Io` errors from the atomic write.
    pub fn write_valid_records(&self, path: &Path) -> Result<usize, RosterError> {
        let valid = self.valid_records();
        if valid.is_empty() {
            tracing::warn!(path = %path.display(), "no valid records; writing an empty list");
        }
        write_records(path, &valid, self.code_page)?;
        Ok(valid.len())
    }
}
