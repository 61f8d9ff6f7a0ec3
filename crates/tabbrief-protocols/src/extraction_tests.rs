use serde_json::json;

use super::*;

#[test]
fn test_request_serialization_tag() {
    let json = serde_json::to_value(ExtractionRequest::AllContent).unwrap();
    assert_eq!(json["kind"], "all_content");

    let json = serde_json::to_value(ExtractionRequest::SelectedContent).unwrap();
    assert_eq!(json["kind"], "selected_content");
}

#[test]
fn test_request_roundtrip() {
    let json = serde_json::to_value(ExtractionRequest::SelectedContent).unwrap();
    let parsed: ExtractionRequest = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, ExtractionRequest::SelectedContent);
}

#[test]
fn test_reply_extracted() {
    let reply = ExtractionReply::Extracted {
        text: "page text".to_string(),
    };
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["kind"], "extracted");
    assert_eq!(json["text"], "page text");
}

#[test]
fn test_reply_failed_carries_error() {
    let reply = ExtractionReply::Failed {
        error: ExtractError::NoActiveTab,
    };
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["kind"], "failed");
    assert_eq!(json["error"]["kind"], "no_active_tab");
}

#[test]
fn test_reply_roundtrip() {
    let reply = ExtractionReply::Failed {
        error: ExtractError::RestrictedPage {
            url: "chrome://settings".to_string(),
        },
    };
    let json = serde_json::to_value(&reply).unwrap();
    let parsed: ExtractionReply = serde_json::from_value(json).unwrap();
    match parsed {
        ExtractionReply::Failed {
            error: ExtractError::RestrictedPage { url },
        } => assert_eq!(url, "chrome://settings"),
        other => panic!("unexpected reply: {:?}", other),
    }
}

#[test]
fn test_injection_result_holds_value() {
    let result = InjectionResult::new(json!("selected words"));
    assert_eq!(result.result.as_str(), Some("selected words"));
}

#[test]
fn test_tab_info_deserialization() {
    let json = json!({
        "target_id": "ABC123",
        "title": "Example",
        "url": "https://example.com/"
    });
    let tab: TabInfo = serde_json::from_value(json).unwrap();
    assert_eq!(tab.target_id, "ABC123");
    assert_eq!(tab.url, "https://example.com/");
}
