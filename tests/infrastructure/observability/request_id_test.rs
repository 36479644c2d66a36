use turn_analyzer::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_caller_supplied_id_when_parsing_header_then_keeps_trimmed_value() {
    let request_id = RequestId::from_header("  turn-123 ").unwrap();
    assert_eq!(request_id.as_str(), "turn-123");
}

#[test]
fn given_blank_or_oversized_header_when_parsing_then_rejects_it() {
    assert!(RequestId::from_header("   ").is_none());
    assert!(RequestId::from_header(&"x".repeat(500)).is_none());
}

#[test]
fn given_generated_ids_when_compared_then_they_differ() {
    assert_ne!(RequestId::generate(), RequestId::generate());
}
