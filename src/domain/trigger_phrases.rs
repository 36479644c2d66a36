use unicode_segmentation::UnicodeSegmentation;

/// Distress phrases used when no list is configured.
pub const DEFAULT_TRIGGER_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "killing myself",
    "end it all",
    "end my life",
    "take my own life",
    "want to die",
    "wanna die",
    "better off dead",
    "no reason to live",
    "hurt myself",
    "harm myself",
    "self harm",
    "cut myself",
    "overdose",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    pub phrase: String,
}

#[derive(Debug, Clone)]
struct TriggerPhrase {
    text: String,
    words: Vec<String>,
}

/// Matches distress phrases against whole-word sequences of a transcript.
///
/// Phrases match only on word boundaries ("die" does not fire on "diet").
/// When several phrases overlap, the one starting earliest in the transcript
/// wins; at the same position the phrase with more words wins.
#[derive(Debug, Clone)]
pub struct TriggerPhraseMatcher {
    phrases: Vec<TriggerPhrase>,
}

impl TriggerPhraseMatcher {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases: Vec<TriggerPhrase> = phrases
            .into_iter()
            .filter_map(|p| {
                let text = p.as_ref().trim().to_string();
                let words = tokenize(&text);
                (!words.is_empty()).then_some(TriggerPhrase { text, words })
            })
            .collect();

        phrases.sort_by(|a, b| b.words.len().cmp(&a.words.len()));

        Self { phrases }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn find(&self, transcript: &str) -> Option<TriggerMatch> {
        let words = tokenize(transcript);

        for start in 0..words.len() {
            let rest = &words[start..];
            // phrases are ordered longest first
            if let Some(phrase) = self.phrases.iter().find(|p| rest.starts_with(&p.words)) {
                return Some(TriggerMatch {
                    phrase: phrase.text.clone(),
                });
            }
        }

        None
    }
}

impl Default for TriggerPhraseMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_PHRASES)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let folded = text.replace(['\u{2018}', '\u{2019}'], "'");
    folded
        .unicode_words()
        .map(|w| w.to_lowercase())
        .collect()
}
