//! Record files on disk: key order, passthrough keys, and the codec's
//! behavior over the whole byte range.

use proptest::prelude::*;

use roster_core::{load_records, write_records, EncodingError, RosterError, WINDOWS_1251};

#[test]
fn unknown_keys_and_key_order_survive_a_rewrite() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let output = dir.path().join("copy.txt");

    let text = r#"[{"worldview": "Атеизм", "telephone": "+7-900-000-00-00", "email": "x@y.ru", "extra": {"nested": [1, 2]}}]"#;
    std::fs::write(&input, WINDOWS_1251.encode(text).unwrap()).unwrap();

    let records = load_records(&input, &WINDOWS_1251).unwrap();
    write_records(&output, records.as_slice(), &WINDOWS_1251).unwrap();

    let written = WINDOWS_1251
        .decode(&std::fs::read(&output).unwrap())
        .unwrap();
    let expected = "[\n    {\n        \"worldview\": \"Атеизм\",\n        \"telephone\": \"+7-900-000-00-00\",\n        \"email\": \"x@y.ru\",\n        \"extra\": {\n            \"nested\": [\n                1,\n                2\n            ]\n        }\n    }\n]";
    assert_eq!(written, expected);
}

#[test]
fn output_bytes_are_not_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let output = dir.path().join("copy.txt");
    std::fs::write(&input, WINDOWS_1251.encode(r#"[{"a": "Я"}]"#).unwrap()).unwrap();

    let records = load_records(&input, &WINDOWS_1251).unwrap();
    write_records(&output, records.as_slice(), &WINDOWS_1251).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.contains(&0xDF));
    assert!(std::str::from_utf8(&bytes).is_err());
}

#[test]
fn overwrite_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    std::fs::write(&path, b"stale content that is much longer than the new file").unwrap();

    write_records::<roster_core::Record>(&path, &[], &WINDOWS_1251).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"[]");
}

#[test]
fn undefined_byte_reports_offset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, b"[{\"a\": \"\x98\"}]").unwrap();

    match load_records(&path, &WINDOWS_1251).unwrap_err() {
        RosterError::Encoding {
            source: EncodingError::Undefined { byte, offset, .. },
            ..
        } => {
            assert_eq!(byte, 0x98);
            assert_eq!(offset, 8);
        }
        other => panic!("unexpected error: {other}"),
    }
}

proptest! {
    #[test]
    fn every_defined_byte_survives_decode_and_encode(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let bytes: Vec<u8> = bytes.into_iter().filter(|b| *b != 0x98).collect();
        let text = WINDOWS_1251.decode(&bytes).unwrap();
        prop_assert_eq!(WINDOWS_1251.encode(&text).unwrap(), bytes);
    }
}
