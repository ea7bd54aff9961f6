//! # Personnel Fields: Canonical Field Set
//!
//! Defines the `Field` enum with the nine recognized personnel fields in
//! their canonical order. That order is the order of the per-field invalid
//! counters and of the console report, so it must never be shuffled.
//!
//! Every `match` on `Field` is exhaustive; adding a field forces the rule
//! table, the report, and the sort-key whitelist to handle it.

use serde::Serialize;
use std::str::FromStr;

/// Number of recognized personnel fields.
pub const FIELD_COUNT: usize = 9;

/// The recognized fields of a personnel record.
///
/// | # | Field | JSON type |
/// |---|-------|-----------|
/// | 1 | email | string |
/// | 2 | weight | integer |
/// | 3 | snils | string |
/// | 4 | passport_number | integer |
/// | 5 | university | string |
/// | 6 | work_experience | integer |
/// | 7 | academic_degree | string |
/// | 8 | worldview | string |
/// | 9 | address | string |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Contact e-mail address.
    Email,
    /// Body weight in kilograms.
    Weight,
    /// Russian insurance number (СНИЛС), 11 digits.
    Snils,
    /// Passport number.
    PassportNumber,
    /// Name of the university attended.
    University,
    /// Years of work experience.
    WorkExperience,
    /// Highest academic degree.
    AcademicDegree,
    /// Declared worldview.
    Worldview,
    /// Street address.
    Address,
}

/// The JSON type a field's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON integer. Numeric strings and floats do not qualify.
    Integer,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Self::Email,
        Self::Weight,
        Self::Snils,
        Self::PassportNumber,
        Self::University,
        Self::WorkExperience,
        Self::AcademicDegree,
        Self::Worldview,
        Self::Address,
    ];

    /// Returns all fields in canonical order.
    pub fn all() -> &'static [Field; FIELD_COUNT] {
        &Self::ALL
    }

    /// The JSON key this field is stored under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Weight => "weight",
            Self::Snils => "snils",
            Self::PassportNumber => "passport_number",
            Self::University => "university",
            Self::WorkExperience => "work_experience",
            Self::AcademicDegree => "academic_degree",
            Self::Worldview => "worldview",
            Self::Address => "address",
        }
    }

    /// Position in canonical order, usable as an array index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The JSON type the field's value must have.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Weight | Self::PassportNumber | Self::WorkExperience => FieldKind::Integer,
            Self::Email
            | Self::Snils
            | Self::University
            | Self::AcademicDegree
            | Self::Worldview
            | Self::Address => FieldKind::Text,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown field: {s:?}"))
    }
}
