use std::fmt;
use ns_core::{Classification, Result, SentimentClassifier, Summarizer};

const POSITIVE_STEMS: &[&str] = &[
    "unveil", "launch", "gain", "rise", "rising", "surge", "soar", "beat", "record", "growth",
    "profit", "win", "boost", "strong", "success", "expand", "approv", "rally", "upgrade",
];

const NEGATIVE_STEMS: &[&str] = &[
    "drop", "fall", "fell", "declin", "loss", "lose", "lawsuit", "sue", "recall", "miss",
    "crash", "plunge", "slump", "weak", "probe", "layoff", "delay", "downgrade", "protest",
];

/// Offline model: summaries are word truncations, sentiment comes from a
/// small keyword lexicon.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }

    fn lexicon_hits(text: &str) -> (usize, usize) {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();
        let count = |stems: &[&str]| {
            words.iter()
                .filter(|w| stems.iter().any(|stem| w.starts_with(stem)))
                .count()
        };
        (count(POSITIVE_STEMS), count(NEGATIVE_STEMS))
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Summarizer for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, _min_len: usize, max_len: usize) -> Result<String> {
        let words: Vec<&str> = text.split_whitespace().take(max_len.max(1)).collect();
        Ok(words.join(" "))
    }
}

#[async_trait::async_trait]
impl SentimentClassifier for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let (positive, negative) = Self::lexicon_hits(text);
        let hits = positive + negative;
        if hits == 0 {
            return Ok(Classification::new("POSITIVE", 0.5));
        }

        let label = if positive >= negative { "POSITIVE" } else { "NEGATIVE" };
        let margin = positive.abs_diff(negative) as f64 / hits as f64;
        Ok(Classification::new(label, 0.6 + 0.4 * margin))
    }
}
