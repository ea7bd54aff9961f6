//! Property tests for the record merge sort: output is a permutation of the
//! input, ordered by key, and stable on ties.

use proptest::prelude::*;
use serde_json::{json, Value};

use roster_core::{load_records, write_records, Record, RecordSet, WINDOWS_1251};
use roster_sort::{is_sorted, merge_sort, merge_sort_by_key, sort_records, SortKey};

fn people(weights: &[i64]) -> Vec<Record> {
    let items: Vec<Value> = weights
        .iter()
        .enumerate()
        .map(|(i, w)| json!({"id": i, "weight": w}))
        .collect();
    RecordSet::from_json(Value::Array(items)).unwrap().into_inner()
}

fn ids(records: &[Record]) -> Vec<u64> {
    records
        .iter()
        .map(|r| r.fields()["id"].as_u64().unwrap())
        .collect()
}

proptest! {
    #[test]
    fn output_is_sorted_permutation(weights in prop::collection::vec(-50i64..250, 0..64)) {
        let input = people(&weights);
        let sorted = merge_sort(input.clone(), SortKey::WEIGHT).unwrap();

        prop_assert_eq!(sorted.len(), input.len());
        prop_assert!(is_sorted(&sorted, SortKey::WEIGHT).unwrap());

        let mut got = ids(&sorted);
        got.sort_unstable();
        let expected: Vec<u64> = (0..weights.len() as u64).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn ties_keep_input_order(weights in prop::collection::vec(0i64..4, 0..64)) {
        let sorted = merge_sort(people(&weights), SortKey::WEIGHT).unwrap();
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.fields()["weight"] == b.fields()["weight"] {
                prop_assert!(a.fields()["id"].as_u64() < b.fields()["id"].as_u64());
            }
        }
    }

    #[test]
    fn agrees_with_std_stable_sort(items in prop::collection::vec((0u8..10, any::<u16>()), 0..100)) {
        let mut expected = items.clone();
        expected.sort_by_key(|(k, _)| *k);
        prop_assert_eq!(merge_sort_by_key(items, |(k, _)| *k), expected);
    }
}

#[test]
fn sort_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("result.txt");
    let output = dir.path().join("result_sort.txt");

    let records = RecordSet::from(people(&[120, 45, 80, 45]));
    write_records(&input, records.as_slice(), &WINDOWS_1251).unwrap();

    let loaded = load_records(&input, &WINDOWS_1251).unwrap();
    let sorted = sort_records(loaded, SortKey::WEIGHT).unwrap();
    write_records(&output, sorted.as_slice(), &WINDOWS_1251).unwrap();

    let reread = load_records(&output, &WINDOWS_1251).unwrap();
    assert_eq!(ids(reread.as_slice()), [1, 3, 2, 0]);
}
