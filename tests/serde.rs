//! Serde support: typed strings travel as plain strings.

#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use typed_strings::{ContentType, GeoUri, StunUri, TypedString, identifier};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Endpoint {
    stun: StunUri,
    content_type: ContentType,
}

#[test]
fn serializes_canonical_form() {
    let endpoint = Endpoint {
        stun: StunUri::parse("STUN:example.com").unwrap(),
        content_type: ContentType::parse("Text/Plain; Charset=utf-8").unwrap(),
    };
    let json = serde_json::to_value(&endpoint).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "stun": "stun:example.com:3478",
            "content_type": "text/plain;charset=utf-8",
        })
    );

    let back: Endpoint = serde_json::from_value(json).unwrap();
    assert_eq!(back, endpoint);
}

#[test]
fn deserializing_invalid_input_fails() {
    let result: Result<StunUri, _> = serde_json::from_str(r#""stun:example.com?x=1""#);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("stun:example.com?x=1"), "{message}");
}

#[test]
fn schema_serializes() {
    let schema = GeoUri::schema();
    let json = serde_json::to_value(&schema).unwrap();
    assert_eq!(json["type"], "string");
    assert!(!json["pattern"].as_str().unwrap().contains("(?P<"));

    let schema = identifier::lookup("imei").unwrap().schema();
    let json = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "string",
            "title": "IMEI",
            "description": "International Mobile Equipment Identity",
        })
    );
}

#[test]
fn identifier_serializes_display_form() {
    let isbn = identifier::parse("issn", "03785955").unwrap();
    assert_eq!(serde_json::to_string(&isbn).unwrap(), r#""0378-5955""#);
}
