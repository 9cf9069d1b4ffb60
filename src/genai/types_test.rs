use super::*;

#[test]
fn payload_round_trips_bytes() {
    let bytes = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
    let payload = ImagePayload::from_png_bytes(&bytes);
    assert_eq!(payload.mime_type, "image/png");
    assert_eq!(payload.decode().unwrap(), bytes);
}

#[test]
fn decode_rejects_bad_base64() {
    let payload = ImagePayload { base64: "not base64!!".into(), mime_type: "image/png".into() };
    let err = payload.decode().unwrap_err();
    assert!(matches!(err, GenAiError::BadPayload(_)));
}

#[test]
fn payload_serde_round_trip() {
    let payload = ImagePayload { base64: "aGVsbG8=".into(), mime_type: "image/jpeg".into() };
    let json = serde_json::to_string(&payload).unwrap();
    let restored: ImagePayload = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.base64, payload.base64);
    assert_eq!(restored.mime_type, "image/jpeg");
}
