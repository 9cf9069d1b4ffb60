use super::*;

fn image_response(data: &str, mime: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is the redecorated room:" },
                    { "inlineData": { "mimeType": mime, "data": data } }
                ]
            }
        }]
    })
    .to_string()
}

#[test]
fn parse_extracts_inline_image() {
    let json = image_response("aW1hZ2U=", "image/png");
    let payload = parse_response(&json).unwrap();
    assert_eq!(payload.base64, "aW1hZ2U=");
    assert_eq!(payload.mime_type, "image/png");
}

#[test]
fn parse_no_candidates_is_no_image() {
    let err = parse_response(r#"{"candidates": []}"#).unwrap_err();
    assert!(matches!(err, GenAiError::NoImage));
}

#[test]
fn parse_text_only_is_no_image() {
    let json = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "I cannot do that." }] } }]
    })
    .to_string();
    let err = parse_response(&json).unwrap_err();
    assert!(matches!(err, GenAiError::NoImage));
}

#[test]
fn parse_malformed_json_is_parse_error() {
    let err = parse_response("{ nope").unwrap_err();
    assert!(matches!(err, GenAiError::ApiParse(_)));
}

#[test]
fn parse_ignores_unknown_fields() {
    let json = serde_json::json!({
        "candidates": [{
            "finishReason": "STOP",
            "content": {
                "role": "model",
                "parts": [{ "inlineData": { "mimeType": "image/png", "data": "eA==" } }]
            }
        }],
        "usageMetadata": { "totalTokenCount": 1234 }
    })
    .to_string();
    let payload = parse_response(&json).unwrap();
    assert_eq!(payload.base64, "eA==");
}

#[test]
fn request_wire_shape_is_camel_case() {
    let payload = ImagePayload { base64: "aW1n".into(), mime_type: "image/jpeg".into() };
    let body = ApiRequest {
        contents: vec![Content { parts: vec![Part::inline(&payload), Part::text("make it cozy")] }],
        generation_config: GenerationConfig { response_modalities: vec!["IMAGE"] },
    };

    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["generationConfig"]["responseModalities"][0], "IMAGE");
    assert_eq!(value["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/jpeg");
    assert_eq!(value["contents"][0]["parts"][0]["inlineData"]["data"], "aW1n");
    assert_eq!(value["contents"][0]["parts"][1]["text"], "make it cozy");
    // Image parts must not serialize an empty text field and vice versa.
    assert!(value["contents"][0]["parts"][0].get("text").is_none());
    assert!(value["contents"][0]["parts"][1].get("inlineData").is_none());
}
