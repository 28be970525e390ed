use inkform_core::data_url::DataUrl;
use inkform_core::error::CoreError;

#[test]
fn encode_produces_tagged_base64_form() {
    let url = DataUrl::new("image/png", vec![0, 1, 2]);
    assert_eq!(url.encode(), "data:image/png;base64,AAEC");
}

#[test]
fn parse_recovers_mime_and_bytes() {
    let url = DataUrl::parse("data:image/png;base64,AAEC").unwrap();
    assert_eq!(url.mime_type, "image/png");
    assert_eq!(url.bytes, vec![0, 1, 2]);
}

#[test]
fn round_trip_is_byte_exact() {
    let bytes: Vec<u8> = (0..=255).collect();
    let original = DataUrl::new("image/jpeg", bytes.clone());

    let decoded = DataUrl::parse(&original.encode()).unwrap();
    assert_eq!(decoded.mime_type, "image/jpeg");
    assert_eq!(decoded.bytes, bytes);

    // And re-encoding the decoded value reproduces the exact string.
    assert_eq!(decoded.encode(), original.encode());
}

#[test]
fn parse_rejects_missing_prefix() {
    let err = DataUrl::parse("image/png;base64,AAEC").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDataUrl(_)));
}

#[test]
fn parse_rejects_missing_payload_separator() {
    let err = DataUrl::parse("data:image/png;base64").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDataUrl(_)));
}

#[test]
fn parse_rejects_non_base64_encoding_marker() {
    let err = DataUrl::parse("data:image/png,rawdata").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDataUrl(_)));
}

#[test]
fn parse_rejects_empty_media_type() {
    let err = DataUrl::parse("data:;base64,AAEC").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDataUrl(_)));
}

#[test]
fn parse_rejects_invalid_base64_payload() {
    let err = DataUrl::parse("data:image/png;base64,!!!").unwrap_err();
    assert!(matches!(err, CoreError::Base64(_)));
}

#[test]
fn extension_is_the_mime_subtype() {
    assert_eq!(DataUrl::new("image/png", vec![]).extension(), "png");
    assert_eq!(DataUrl::new("image/jpeg", vec![]).extension(), "jpeg");
    assert_eq!(DataUrl::new("image/webp", vec![]).extension(), "webp");
}

#[test]
fn extension_falls_back_without_a_subtype() {
    assert_eq!(DataUrl::new("png", vec![]).extension(), "bin");
    assert_eq!(DataUrl::new("image/", vec![]).extension(), "bin");
}
