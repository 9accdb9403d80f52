//! Malformed UTF-8 Tests
//!
//! Documents coming from storage may carry string bytes that are not valid
//! UTF-8. The matcher does not promise a particular answer for them, only
//! that evaluation terminates without panicking.

use aeromatch::matcher::{
    count_codepoints, DocumentValue, LengthBound, MatchExpression, StrLengthExpression, ValueKind,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Raw Document
// =============================================================================

/// Document value whose strings are arbitrary bytes.
#[derive(Debug)]
enum RawValue {
    Object(Vec<(String, RawValue)>),
    Str(Vec<u8>),
    Int(i64),
}

impl DocumentValue for RawValue {
    fn kind(&self) -> ValueKind {
        match self {
            RawValue::Object(_) => ValueKind::Object,
            RawValue::Str(_) => ValueKind::String,
            RawValue::Int(_) => ValueKind::Number,
        }
    }

    fn field(&self, name: &str) -> Option<&dyn DocumentValue> {
        match self {
            RawValue::Object(fields) => fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value as &dyn DocumentValue),
            _ => None,
        }
    }

    fn string_bytes(&self) -> Option<&[u8]> {
        match self {
            RawValue::Str(bytes) => Some(bytes),
            _ => None,
        }
    }
}

fn raw_doc(field: &str, bytes: &[u8]) -> RawValue {
    RawValue::Object(vec![(field.to_string(), RawValue::Str(bytes.to_vec()))])
}

fn malformed_corpus() -> Vec<&'static [u8]> {
    let corpus: [&'static [u8]; 8] = [
        // unexpected continuation byte
        b"\xbf",
        b"a\x80b",
        // overlong encoding of U+20AC
        b"\xf0\x82\x82\xac",
        // encoded surrogate U+D800
        b"\xed\xa0\x80",
        // leading byte without its continuation bytes
        b"\xdf",
        b"\xe2\x82",
        b"ok\xf0\x9f\x92",
        // bytes that never appear in UTF-8
        b"\xc0\xc1\xf5\xff",
    ];
    corpus.to_vec()
}

// =============================================================================
// Known Malformed Inputs
// =============================================================================

/// Every malformed input evaluates to a plain boolean for both directions.
#[test]
fn test_malformed_inputs_do_not_crash() {
    for bytes in malformed_corpus() {
        let doc = raw_doc("a", bytes);
        for bound in [0, 1, 2, 4, 100] {
            let _ = StrLengthExpression::max_length("a", bound).unwrap().matches(&doc);
            let _ = StrLengthExpression::min_length("a", bound).unwrap().matches(&doc);
        }
    }
}

/// The count of a malformed input never exceeds its byte length.
#[test]
fn test_malformed_count_is_bounded_by_length() {
    for bytes in malformed_corpus() {
        assert!(count_codepoints(bytes) <= bytes.len());
    }
}

/// Valid bytes in a raw document behave as in a JSON document.
#[test]
fn test_valid_bytes_in_raw_document() {
    let doc = raw_doc("a", "\u{1f4a9}x".as_bytes());
    assert!(StrLengthExpression::max_length("a", 2).unwrap().matches(&doc));
    assert!(!StrLengthExpression::max_length("a", 1).unwrap().matches(&doc));
}

/// Non-string raw values never match.
#[test]
fn test_raw_non_string() {
    let doc = RawValue::Object(vec![("a".to_string(), RawValue::Int(3))]);
    assert!(!StrLengthExpression::min_length("a", 0).unwrap().matches(&doc));
}

/// Nested raw objects resolve through dotted paths.
#[test]
fn test_raw_nested_path() {
    let doc = RawValue::Object(vec![("a".to_string(), raw_doc("b", b"ok"))]);
    assert!(StrLengthExpression::min_length("a.b", 2).unwrap().matches(&doc));
    assert!(!StrLengthExpression::max_length("a.b", 1).unwrap().matches(&doc));

    let doc = RawValue::Object(vec![("a".to_string(), raw_doc("b", b"\xed\xa0\x80"))]);
    let _ = StrLengthExpression::max_length("a.b", 1).unwrap().matches(&doc);
}

// =============================================================================
// Random Byte Strings
// =============================================================================

/// Seeded random byte strings, heavy in high bytes, never crash evaluation.
#[test]
fn test_random_bytes_do_not_crash() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let max = StrLengthExpression::new(LengthBound::Max, "s", 8).unwrap();
    let min = StrLengthExpression::new(LengthBound::Min, "s", 8).unwrap();

    for _ in 0..2_000 {
        let len = rng.gen_range(0..32);
        let bytes: Vec<u8> = (0..len)
            .map(|_| if rng.gen_bool(0.7) { rng.gen_range(0x80..=0xff) } else { rng.gen() })
            .collect();

        let doc = raw_doc("s", &bytes);
        let count = count_codepoints(&bytes);
        assert!(count <= bytes.len());

        // Evaluation is consistent with the count it is built on.
        assert_eq!(max.matches(&doc), count <= 8);
        assert_eq!(min.matches(&doc), count >= 8);
    }
}
