//! # Validity Reports and Statistics
//!
//! A [`ValidityReport`] is the per-record outcome: one boolean per
//! recognized field. [`AggregateStats`] folds a sequence of reports into
//! the valid/invalid totals and the nine per-field invalid counters.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use roster_core::{Field, FIELD_COUNT};

/// Pass/fail outcome of every rule for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidityReport {
    results: [bool; FIELD_COUNT],
}

impl ValidityReport {
    /// Build a report from results indexed by canonical field order.
    pub fn new(results: [bool; FIELD_COUNT]) -> Self {
        Self { results }
    }

    /// Whether `field` passed its rule.
    pub fn get(&self, field: Field) -> bool {
        self.results[field.index()]
    }

    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|ok| *ok)
    }

    /// Always [`FIELD_COUNT`].
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Always false; a report covers every recognized field.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(field, passed)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        Field::ALL.iter().map(|f| (*f, self.get(*f)))
    }

    /// Fields whose rule failed, in canonical order.
    pub fn failing_fields(&self) -> Vec<Field> {
        self.iter()
            .filter_map(|(field, ok)| (!ok).then_some(field))
            .collect()
    }
}

impl Serialize for ValidityReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, ok) in self.iter() {
            map.serialize_entry(field.as_str(), &ok)?;
        }
        map.end()
    }
}

/// Totals over one snapshot of a record collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// Number of records examined.
    pub total: usize,
    /// Records where every field passed.
    pub valid: usize,
    /// Records where at least one field failed.
    pub invalid: usize,
    /// Failures per field, in canonical order. A record failing three
    /// fields counts once in each of the three.
    pub invalid_per_field: [usize; FIELD_COUNT],
}

impl AggregateStats {
    /// Fold a sequence of reports.
    pub fn from_reports<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a ValidityReport>,
    {
        reports.into_iter().fold(Self::default(), |mut stats, report| {
            stats.total += 1;
            if report.is_valid() {
                stats.valid += 1;
            } else {
                stats.invalid += 1;
            }
            for (field, ok) in report.iter() {
                if !ok {
                    stats.invalid_per_field[field.index()] += 1;
                }
            }
            stats
        })
    }

    /// Failures recorded for one field.
    pub fn invalid_for(&self, field: Field) -> usize {
        self.invalid_per_field[field.index()]
    }
}

impl fmt::Display for AggregateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  valid records:   {}", self.valid)?;
        writeln!(f, "  invalid records: {}", self.invalid)?;
        writeln!(f, "  invalid values per field:")?;
        for field in Field::all() {
            writeln!(f, "    {:<16} {}", field.as_str(), self.invalid_for(*field))?;
        }
        Ok(())
    }
}
