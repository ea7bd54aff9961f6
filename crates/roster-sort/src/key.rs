//! # Sort Keys
//!
//! Only integer-typed personnel fields can order a collection. Text fields
//! are rejected when the key is chosen, not when records are compared.

use std::str::FromStr;

use roster_core::{Field, FieldKind, Record, RecordSet, RosterError};

use crate::merge::{is_sorted_by_key, merge_sort_by_key};

/// An integer-typed field records can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey(Field);

impl SortKey {
    /// Order by body weight.
    pub const WEIGHT: SortKey = SortKey(Field::Weight);

    /// Use `field` as a key if it is integer-typed.
    pub fn new(field: Field) -> Option<Self> {
        (field.kind() == FieldKind::Integer).then_some(Self(field))
    }

    /// The underlying field.
    pub fn field(self) -> Field {
        self.0
    }

    /// Read this key from a record.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::MissingField` if the field is absent or not
    /// a JSON integer.
    pub fn extract(self, record: &Record) -> Result<i128, RosterError> {
        record.integer(self.0)
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::WEIGHT
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field: Field = s.parse()?;
        Self::new(field).ok_or_else(|| format!("'{field}' is not an integer field"))
    }
}

/// Stable ascending merge sort of records by `key`.
///
/// Every key is read before any comparison, so a bad record fails the
/// whole sort instead of being ordered arbitrarily. Records with equal keys
/// keep their relative input order.
///
/// # Errors
///
/// Returns `RosterError::MissingField` for the first record whose key is
/// absent or not a JSON integer.
pub fn merge_sort(records: Vec<Record>, key: SortKey) -> Result<Vec<Record>, RosterError> {
    let keyed = records
        .into_iter()
        .map(|record| key.extract(&record).map(|k| (k, record)))
        .collect::<Result<Vec<_>, _>>()?;

    let sorted = merge_sort_by_key(keyed, |(k, _)| *k);
    tracing::debug!(key = %key, records = sorted.len(), "merge-sorted records");
    Ok(sorted.into_iter().map(|(_, record)| record).collect())
}

/// Sort a whole [`RecordSet`], returning a new one.
pub fn sort_records(records: RecordSet, key: SortKey) -> Result<RecordSet, RosterError> {
    merge_sort(records.into_inner(), key).map(RecordSet::from)
}

/// True if `records` is non-decreasing by `key`.
///
/// # Errors
///
/// Returns `RosterError::MissingField` if any record's key is unreadable.
pub fn is_sorted(records: &[Record], key: SortKey) -> Result<bool, RosterError> {
    let keys = records
        .iter()
        .map(|r| key.extract(r))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(is_sorted_by_key(&keys, |k| *k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::FieldProblem;
    use serde_json::{json, Value};

    fn records(items: Value) -> Vec<Record> {
        RecordSet::from_json(items).unwrap().into_inner()
    }

    fn names(sorted: &[Record]) -> Vec<&str> {
        sorted
            .iter()
            .map(|r| r.fields()["name"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn sorts_by_weight() {
        let input = records(json!([
            {"name": "a", "weight": 90},
            {"name": "b", "weight": 45},
            {"name": "c", "weight": 120},
            {"name": "d", "weight": 60}
        ]));
        let sorted = merge_sort(input, SortKey::WEIGHT).unwrap();
        assert_eq!(names(&sorted), ["b", "d", "a", "c"]);
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let input = records(json!([
            {"name": "first", "weight": 70},
            {"name": "x", "weight": 50},
            {"name": "second", "weight": 70},
            {"name": "third", "weight": 70}
        ]));
        let sorted = merge_sort(input, SortKey::WEIGHT).unwrap();
        assert_eq!(names(&sorted), ["x", "first", "second", "third"]);
    }

    #[test]
    fn empty_and_single() {
        assert!(merge_sort(Vec::new(), SortKey::WEIGHT).unwrap().is_empty());
        let one = records(json!([{"name": "solo", "weight": 1}]));
        assert_eq!(names(&merge_sort(one, SortKey::WEIGHT).unwrap()), ["solo"]);
    }

    #[test]
    fn missing_key_fails() {
        let input = records(json!([{"weight": 1}, {"name": "no weight"}]));
        let err = merge_sort(input, SortKey::WEIGHT).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingField {
                record: 1,
                field: Field::Weight,
                problem: FieldProblem::Absent,
            }
        ));
    }

    #[test]
    fn string_key_fails_instead_of_miscomparing() {
        let input = records(json!([{"weight": 100}, {"weight": "9"}]));
        let err = merge_sort(input, SortKey::WEIGHT).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingField {
                problem: FieldProblem::NotInteger,
                ..
            }
        ));
    }

    #[test]
    fn negative_and_large_keys_order_numerically() {
        let input = records(json!([
            {"name": "big", "weight": 18446744073709551615_u64},
            {"name": "neg", "weight": -5},
            {"name": "zero", "weight": 0}
        ]));
        let sorted = merge_sort(input, SortKey::WEIGHT).unwrap();
        assert_eq!(names(&sorted), ["neg", "zero", "big"]);
    }

    #[test]
    fn key_parsing_accepts_only_integer_fields() {
        assert_eq!("weight".parse::<SortKey>().unwrap(), SortKey::WEIGHT);
        assert_eq!(
            "passport_number".parse::<SortKey>().unwrap().field(),
            Field::PassportNumber
        );
        assert!("work_experience".parse::<SortKey>().is_ok());
        assert!("email".parse::<SortKey>().is_err());
        assert!("height".parse::<SortKey>().is_err());
    }

    #[test]
    fn is_sorted_detects_order() {
        let sorted = records(json!([{"weight": 1}, {"weight": 1}, {"weight": 3}]));
        assert!(is_sorted(&sorted, SortKey::WEIGHT).unwrap());
        let unsorted = records(json!([{"weight": 3}, {"weight": 1}]));
        assert!(!is_sorted(&unsorted, SortKey::WEIGHT).unwrap());
    }
}
