use unicode_segmentation::UnicodeSegmentation;

/// Describes a transcript for logs without any of its content: only the
/// character and word counts survive.
pub fn redact_transcript(transcript: &str) -> String {
    let trimmed = transcript.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let chars = trimmed.chars().count();
    let words = trimmed.unicode_words().count();
    format!("[REDACTED: {} chars, {} words]", chars, words)
}
