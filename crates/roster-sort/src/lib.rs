//! # roster-sort: Record Ordering
//!
//! Stable merge sort of personnel records by an integer-typed field.
//!
//! - [`merge_sort_by_key`] is the generic top-down merge sort.
//! - [`merge_sort`] applies it to records, reading every key up front so
//!   that a missing or mistyped key is an error rather than a silent
//!   miscomparison.
//!
//! Sorting does not validate records; that is `roster-validate`'s job.

pub mod key;
pub mod merge;

pub use key::{is_sorted, merge_sort, sort_records, SortKey};
pub use merge::{is_sorted_by_key, merge_sort_by_key};
