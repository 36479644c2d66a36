use turn_analyzer::infrastructure::observability::redact_transcript;

#[test]
fn given_empty_transcript_when_redacting_then_returns_empty_marker() {
    assert_eq!(redact_transcript(""), "[EMPTY]");
    assert_eq!(redact_transcript("  "), "[EMPTY]");
}

#[test]
fn given_short_distress_transcript_when_redacting_then_hides_every_word() {
    let result = redact_transcript("I want to end it all");

    assert_eq!(result, "[REDACTED: 20 chars, 6 words]");
    for word in ["want", "end", "all"] {
        assert!(!result.contains(word), "leaked {:?} in {:?}", word, result);
    }
}

#[test]
fn given_long_transcript_when_redacting_then_reports_only_counts() {
    let transcript = "word ".repeat(30);

    let result = redact_transcript(&transcript);

    assert_eq!(result, "[REDACTED: 149 chars, 30 words]");
}

#[test]
fn given_multibyte_transcript_when_redacting_then_counts_chars_not_bytes() {
    let transcript = "é".repeat(60);

    let result = redact_transcript(&transcript);

    assert_eq!(result, "[REDACTED: 60 chars, 1 words]");
}
