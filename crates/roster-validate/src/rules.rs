//! # Field Rules
//!
//! One predicate per recognized field, registered in a static table in
//! canonical field order. Predicates are pure and total: they take the raw
//! JSON value and answer true or false, never error.
//!
//! ## Matching semantics
//!
//! Every pattern is anchored at the start of the value. `email`, `snils`
//! and `worldview` are also anchored at the end, where a single trailing
//! newline is tolerated; `university`, `academic_degree` and `address`
//! accept any trailing text.
//!
//! ## Typing
//!
//! `weight`, `passport_number` and `work_experience` must be JSON integers.
//! `"70"` is not a weight. Text fields holding a non-string value fail.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use roster_core::record::as_integer;
use roster_core::{Field, Record, RosterError, FIELD_COUNT};

use crate::report::ValidityReport;

/// Local part, `@`, one or more dot-terminated labels, top-level label of
/// at least two characters.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@([^\s@.,]+\.)+[^\s@.,]{2,}\n?$";

/// Exactly eleven digits.
pub const SNILS_PATTERN: &str = r"^\d{11}\n?$";

/// Any of the recognized institution markers somewhere in the name.
pub const UNIVERSITY_PATTERN: &str =
    r"^.*(?:[Тт]ех|[Уу]нивер|[Аа]кадем|[Ии]нститут|им\.|СПбГУ|МФТИ|МГТ?У)";

/// One of the recognized degrees as a prefix. The trailing empty
/// alternative matches at the start of any string, so every string passes.
pub const ACADEMIC_DEGREE_PATTERN: &str =
    r"^(?:Бакалавр|Кандидат наук|Специалист|Магистр|Доктор наук|)";

/// At least one character, then an `-изм` or `-анство` suffix.
pub const WORLDVIEW_PATTERN: &str = r"^.+(?:изм|анство)\n?$";

/// Street marker, optional "им", street name, optional second word, house number.
pub const ADDRESS_PATTERN: &str = r"^(?:ул\.|Аллея) (?:им[.\s])?\S+ \S*\s?\d+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));
static SNILS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SNILS_PATTERN).expect("valid regex"));
static UNIVERSITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UNIVERSITY_PATTERN).expect("valid regex"));
static ACADEMIC_DEGREE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ACADEMIC_DEGREE_PATTERN).expect("valid regex"));
static WORLDVIEW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORLDVIEW_PATTERN).expect("valid regex"));
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ADDRESS_PATTERN).expect("valid regex"));

fn matches(re: &Regex, value: &Value) -> bool {
    value.as_str().is_some_and(|s| re.is_match(s))
}

fn integer_in(value: &Value, range: std::ops::Range<i128>) -> bool {
    as_integer(value).is_some_and(|n| range.contains(&n))
}

pub fn email(value: &Value) -> bool {
    matches(&EMAIL_RE, value)
}

/// Strictly between 30 and 200.
pub fn weight(value: &Value) -> bool {
    integer_in(value, 31..200)
}

pub fn snils(value: &Value) -> bool {
    matches(&SNILS_RE, value)
}

/// Six digits: `[100000, 1000000)`.
pub fn passport_number(value: &Value) -> bool {
    integer_in(value, 100_000..1_000_000)
}

pub fn university(value: &Value) -> bool {
    matches(&UNIVERSITY_RE, value)
}

pub fn work_experience(value: &Value) -> bool {
    integer_in(value, 0..80)
}

pub fn academic_degree(value: &Value) -> bool {
    matches(&ACADEMIC_DEGREE_RE, value)
}

pub fn worldview(value: &Value) -> bool {
    matches(&WORLDVIEW_RE, value)
}

pub fn address(value: &Value) -> bool {
    matches(&ADDRESS_RE, value)
}

/// A field validity predicate.
pub type Predicate = fn(&Value) -> bool;

/// A registered rule: the field it applies to and its predicate.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Field the rule reads.
    pub field: Field,
    /// Validity predicate over the raw value.
    pub check: Predicate,
}

/// The fixed rule table, one rule per field, in canonical order.
#[derive(Debug)]
pub struct RuleSet {
    rules: [Rule; FIELD_COUNT],
}

static STANDARD: RuleSet = RuleSet {
    rules: [
        Rule { field: Field::Email, check: email },
        Rule { field: Field::Weight, check: weight },
        Rule { field: Field::Snils, check: snils },
        Rule { field: Field::PassportNumber, check: passport_number },
        Rule { field: Field::University, check: university },
        Rule { field: Field::WorkExperience, check: work_experience },
        Rule { field: Field::AcademicDegree, check: academic_degree },
        Rule { field: Field::Worldview, check: worldview },
        Rule { field: Field::Address, check: address },
    ],
};

impl RuleSet {
    /// The standard personnel rule set.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    /// Iterate over rules in canonical field order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// The rule registered for `field`.
    pub fn rule(&self, field: Field) -> &Rule {
        &self.rules[field.index()]
    }

    /// Run one field's predicate against a raw value.
    pub fn check(&self, field: Field, value: &Value) -> bool {
        (self.rule(field).check)(value)
    }

    /// Run every rule against a record.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::MissingField` for the first recognized field
    /// (in canonical order) that the record lacks.
    pub fn validate(&self, record: &Record) -> Result<ValidityReport, RosterError> {
        let mut results = [false; FIELD_COUNT];
        for rule in &self.rules {
            results[rule.field.index()] = (rule.check)(record.get(rule.field)?);
        }
        Ok(ValidityReport::new(results))
    }
}
