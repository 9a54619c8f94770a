//! Encode/decode contract of resolved colors.

mod common;

use serde_json::{json, Value};
use theme_core::{ColorSpace, NativeColor, PlatformColor, ResolvedColor, ThemeError};

fn record_of(color: &ResolvedColor) -> serde_json::Map<String, Value> {
    let value: Value = serde_json::from_slice(&color.to_bytes().unwrap()).unwrap();
    value.as_object().unwrap().clone()
}

fn decode(record: serde_json::Map<String, Value>) -> theme_core::Result<ResolvedColor> {
    ResolvedColor::from_bytes(&serde_json::to_vec(&Value::Object(record)).unwrap())
}

#[test]
fn test_round_trip_preserves_every_field() {
    for color in common::fixtures() {
        let decoded: ResolvedColor = ResolvedColor::from_bytes(&color.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.description(), color.description());
        assert_eq!(decoded.rgba(), color.rgba());
        assert_eq!(decoded.linear_red(), color.linear_red());
        assert_eq!(decoded.linear_green(), color.linear_green());
        assert_eq!(decoded.linear_blue(), color.linear_blue());
        assert_eq!(decoded.native().components(), color.native().components());
        assert_eq!(decoded, color);
    }
}

#[test]
fn test_round_trip_keeps_native_color_space() {
    let native = PlatformColor::new(ColorSpace::DisplayP3, 0.9, 0.1, 0.1, 1.0);
    let color: ResolvedColor = ResolvedColor::new("p3 red", 0.9, 0.1, 0.1, 1.0, native);
    let decoded: ResolvedColor = ResolvedColor::from_bytes(&color.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.native().color_space(), ColorSpace::DisplayP3);
}

#[test]
fn test_record_has_exactly_nine_fields() {
    let record = record_of(&ResolvedColor::srgb(0.2, 0.4, 0.6));
    let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "blue",
            "cgColor",
            "description",
            "green",
            "linearBlue",
            "linearGreen",
            "linearRed",
            "opacity",
            "red"
        ]
    );
    assert!(record["cgColor"].is_array());
}

#[test]
fn test_truncated_native_blob_is_corrupted() {
    let mut record = record_of(&ResolvedColor::srgb(0.2, 0.4, 0.6));
    let blob = record["cgColor"].as_array().unwrap().clone();
    record.insert("cgColor".to_string(), Value::Array(blob[..blob.len() - 3].to_vec()));
    assert!(matches!(decode(record), Err(ThemeError::CorruptedColorData(_))));
}

#[test]
fn test_empty_native_blob_is_corrupted() {
    let mut record = record_of(&ResolvedColor::srgb(0.2, 0.4, 0.6));
    record.insert("cgColor".to_string(), json!([]));
    assert!(matches!(decode(record), Err(ThemeError::CorruptedColorData(_))));
}

#[test]
fn test_every_missing_field_is_reported_by_name() {
    let full = record_of(&ResolvedColor::srgb(0.2, 0.4, 0.6));
    for key in [
        "description",
        "blue",
        "green",
        "linearBlue",
        "linearGreen",
        "linearRed",
        "opacity",
        "red",
        "cgColor",
    ] {
        let mut record = full.clone();
        record.remove(key);
        match decode(record) {
            Err(ThemeError::MissingOrMalformedField { field, .. }) => assert_eq!(field, key),
            other => panic!("expected missing `{key}`, got {other:?}"),
        }
    }
}

#[test]
fn test_description_must_be_a_string() {
    let mut record = record_of(&ResolvedColor::srgb(0.2, 0.4, 0.6));
    record.insert("description".to_string(), json!(42));
    assert!(matches!(
        decode(record),
        Err(ThemeError::MissingOrMalformedField { field: "description", .. })
    ));
}

#[test]
fn test_garbage_bytes_are_a_json_error() {
    let err = ResolvedColor::<PlatformColor>::from_bytes(b"\x00\x01not json").unwrap_err();
    assert!(matches!(err, ThemeError::Json(_)));
}

#[test]
fn test_non_object_record_is_malformed() {
    let err = ResolvedColor::<PlatformColor>::from_bytes(b"[1, 2, 3]").unwrap_err();
    assert!(matches!(err, ThemeError::MissingOrMalformedField { field: "record", .. }));
}

#[test]
fn test_native_handle_follows_decoded_channels() {
    let mut record = record_of(&ResolvedColor::srgb(0.2, 0.4, 0.6));
    record.insert("red".to_string(), json!(0.9));
    record.insert("opacity".to_string(), json!(0.5));
    let decoded = decode(record).unwrap();
    assert_eq!(decoded.red(), 0.9);
    assert_eq!(
        decoded.native().components(),
        [decoded.red(), decoded.green(), decoded.blue(), decoded.opacity()]
    );
}

#[test]
fn test_rebuilt_native_handle_keeps_archived_color_space() {
    let native = PlatformColor::new(ColorSpace::DisplayP3, 0.9, 0.1, 0.1, 1.0);
    let color: ResolvedColor = ResolvedColor::new("p3 red", 0.9, 0.1, 0.1, 1.0, native);
    let mut record = record_of(&color);
    record.insert("green".to_string(), json!(0.3));
    let decoded = decode(record).unwrap();
    assert_eq!(decoded.native().color_space(), ColorSpace::DisplayP3);
    assert_eq!(decoded.native().components(), [0.9, 0.3, 0.1, 1.0]);
}
