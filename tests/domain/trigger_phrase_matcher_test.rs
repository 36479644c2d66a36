use turn_analyzer::domain::{DEFAULT_TRIGGER_PHRASES, TriggerPhraseMatcher};

#[test]
fn given_default_matcher_when_transcript_contains_end_it_all_then_matches_phrase() {
    let matcher = TriggerPhraseMatcher::default();

    let found = matcher.find("I want to end it all");

    assert_eq!(found.unwrap().phrase, "end it all");
}

#[test]
fn given_calm_transcript_when_checking_then_finds_nothing() {
    let matcher = TriggerPhraseMatcher::default();

    assert!(matcher.find("I had a good day").is_none());
}

#[test]
fn given_phrase_inside_longer_word_when_checking_then_does_not_match() {
    let matcher = TriggerPhraseMatcher::new(["die"]);

    assert!(matcher.find("I started a new diet today").is_none());
    assert!(matcher.find("Sometimes I want to die").is_some());
}

#[test]
fn given_mixed_case_and_punctuation_when_checking_then_matches_on_words() {
    let matcher = TriggerPhraseMatcher::new(["end it all"]);

    let found = matcher.find("Maybe I should just... END it, all!");

    assert_eq!(found.unwrap().phrase, "end it all");
}

#[test]
fn given_overlapping_phrases_when_checking_then_earliest_match_wins() {
    let matcher = TriggerPhraseMatcher::new(["hurt myself", "want to hurt"]);

    let found = matcher.find("I want to hurt myself");

    assert_eq!(found.unwrap().phrase, "want to hurt");
}

#[test]
fn given_phrases_sharing_a_start_when_checking_then_longest_wins() {
    let matcher = TriggerPhraseMatcher::new(["kill", "kill myself"]);

    let found = matcher.find("I could kill myself");

    assert_eq!(found.unwrap().phrase, "kill myself");
}

#[test]
fn given_typographic_apostrophe_when_checking_then_matches_ascii_phrase() {
    let matcher = TriggerPhraseMatcher::new(["don't want to live"]);

    assert!(matcher.find("I don\u{2019}t want to live anymore").is_some());
}

#[test]
fn given_blank_phrases_when_building_matcher_then_ignores_them() {
    let matcher = TriggerPhraseMatcher::new(["", "   ", "overdose"]);

    assert_eq!(matcher.len(), 1);
    assert!(matcher.find("").is_none());
}

#[test]
fn given_default_list_when_building_matcher_then_keeps_every_phrase() {
    let matcher = TriggerPhraseMatcher::default();

    assert_eq!(matcher.len(), DEFAULT_TRIGGER_PHRASES.len());
}
