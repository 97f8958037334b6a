#![cfg(feature = "serde")]

//! Integration tests for serde support in lambars-maybe.
//!
//! `Maybe<T>` serializes exactly like `Option<T>`: the payload for Present and
//! `null` for Empty.

use lambars_maybe::maybe::Maybe;
use rstest::rstest;
use serde::{Deserialize, Serialize};

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
#[case(Maybe::of(7), "7")]
#[case(Maybe::empty(), "null")]
fn test_integer_serialization(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_float_empty_serializes_as_null() {
    assert_eq!(serde_json::to_string(&Maybe::<f64>::empty()).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Maybe::of(1.5)).unwrap(), "1.5");
}

#[rstest]
fn test_matches_option_encoding() {
    let maybe = Maybe::of("text".to_string());
    let option = Some("text".to_string());
    assert_eq!(
        serde_json::to_string(&maybe).unwrap(),
        serde_json::to_string(&option).unwrap()
    );
}

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn test_string_json_roundtrip() {
    let present = Maybe::of("hello".to_string());
    let empty = Maybe::<String>::empty();

    let restored_present: Maybe<String> =
        serde_json::from_str(&serde_json::to_string(&present).unwrap()).unwrap();
    let restored_empty: Maybe<String> =
        serde_json::from_str(&serde_json::to_string(&empty).unwrap()).unwrap();

    assert_eq!(restored_present, present);
    assert_eq!(restored_empty, empty);
}

#[rstest]
fn test_char_json_roundtrip() {
    let letter = Maybe::of('z');
    let json = serde_json::to_string(&letter).unwrap();
    assert_eq!(json, "\"z\"");
    assert_eq!(serde_json::from_str::<Maybe<char>>(&json).unwrap(), letter);
}

#[rstest]
fn test_float_null_deserializes_to_empty() {
    let restored: Maybe<f64> = serde_json::from_str("null").unwrap();
    assert!(restored.is_empty());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Maybe<String>,
    height: Maybe<f64>,
}

#[rstest]
fn test_nested_in_struct() {
    let profile = Profile {
        name: "ferris".to_string(),
        nickname: Maybe::empty(),
        height: Maybe::of(0.3),
    };

    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(json, r#"{"name":"ferris","nickname":null,"height":0.3}"#);

    let restored: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, profile);
}

#[rstest]
fn test_type_mismatch_is_an_error() {
    assert!(serde_json::from_str::<Maybe<i32>>("\"seven\"").is_err());
}
