//! Serialization of codes and code kinds.

use course_code::{Code, CodeType};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Listing {
    code: Code,
    kind: CodeType,
}

#[test]
fn test_code_serializes_as_display_string() {
    let code: Code = "2JD-H08-CC8".parse().unwrap();
    assert_eq!(serde_json::to_string(&code).unwrap(), "\"2JD-H08-CC8\"");
    assert_eq!(serde_json::to_string(&Code::ZERO).unwrap(), "\"000-000-000\"");
}

#[test]
fn test_code_deserializes_from_string_or_payload() {
    let from_str: Code = serde_json::from_str("\"2JD-H08-CC8\"").unwrap();
    let from_num: Code = serde_json::from_str("1671232726238").unwrap();
    assert_eq!(from_str, from_num);

    let lenient: Code = serde_json::from_str("\" 2JD H08 CC8 \"").unwrap();
    assert_eq!(lenient, from_str);
}

#[test]
fn test_code_deserialize_errors() {
    assert!(serde_json::from_str::<Code>("-1").is_err());
    assert!(serde_json::from_str::<Code>("18446744073709551615").is_err());
    assert!(serde_json::from_str::<Code>("\"YYY-YYY-YYY-YYY\"").is_err());
    assert!(serde_json::from_str::<Code>("true").is_err());
}

#[test]
fn test_code_type_labels() {
    assert_eq!(serde_json::to_string(&CodeType::NsoCourse).unwrap(), "\"NSO_COURSE\"");
    assert_eq!(serde_json::to_string(&CodeType::Unknown).unwrap(), "\"UNKNOWN\"");
    let kind: CodeType = serde_json::from_str("\"OCW_MAKER\"").unwrap();
    assert_eq!(kind, CodeType::OcwMaker);
}

#[test]
fn test_struct_round_trip() {
    let listing = Listing {
        code: "93W-SBN-P5G".parse().unwrap(),
        kind: CodeType::NsoCourse,
    };
    let json = serde_json::to_string(&listing).unwrap();
    assert_eq!(json, r#"{"code":"93W-SBN-P5G","kind":"NSO_COURSE"}"#);
    let back: Listing = serde_json::from_str(&json).unwrap();
    assert_eq!(back, listing);
}
