//! # Personnel Records
//!
//! A [`Record`] is one decoded JSON object from the input array. The object
//! is held verbatim: unrecognized keys pass through untouched and key order
//! is the order the keys appeared in the file.
//!
//! Records are built once at load time and never mutated afterwards.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{FieldProblem, RosterError};
use crate::field::Field;

/// Interpret a JSON value as an integer.
///
/// Only JSON integers qualify. Numeric strings (`"70"`), floats (`70.0`)
/// and booleans are rejected.
pub fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        _ => None,
    }
}

/// One personnel entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    index: usize,
    fields: Map<String, Value>,
}

impl Record {
    /// Wrap a decoded JSON object found at `index` in its collection.
    pub fn new(index: usize, fields: Map<String, Value>) -> Self {
        Self { index, fields }
    }

    /// Zero-based position of this record in the file it was loaded from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The raw object, including passthrough keys.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw value of a recognized field.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::MissingField` if the key is absent.
    pub fn get(&self, field: Field) -> Result<&Value, RosterError> {
        self.fields
            .get(field.as_str())
            .ok_or(RosterError::MissingField {
                record: self.index,
                field,
                problem: FieldProblem::Absent,
            })
    }

    /// Value of a recognized field that must be a JSON integer.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::MissingField` if the key is absent or the
    /// value is not a JSON integer.
    pub fn integer(&self, field: Field) -> Result<i128, RosterError> {
        as_integer(self.get(field)?).ok_or(RosterError::MissingField {
            record: self.index,
            field,
            problem: FieldProblem::NotInteger,
        })
    }

    /// Consume the record, returning the raw object.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// An ordered collection of records, as loaded from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Build a collection from a decoded JSON document.
    ///
    /// The document must be an array whose elements are all objects.
    /// On failure, returns a description of the first structural problem.
    pub fn from_json(document: Value) -> Result<Self, String> {
        let Value::Array(items) = document else {
            return Err(format!(
                "expected a top-level array of records, found {}",
                json_type_name(&document)
            ));
        };
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(Record::new(index, map)),
                other => Err(format!(
                    "record {index} is {}, expected an object",
                    json_type_name(&other)
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|records| Self { records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Borrow the records as a slice.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Consume the collection, returning the inner `Vec`.
    pub fn into_inner(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
