use async_trait::async_trait;
use crate::types::Classification;
use crate::Result;

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    /// Condense `text` to roughly between `min_len` and `max_len` words
    async fn summarize(&self, text: &str, min_len: usize, max_len: usize) -> Result<String>;
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    fn name(&self) -> &str;

    /// Classify a piece of text, returning the model's raw label and its confidence in [0, 1]
    async fn classify(&self, text: &str) -> Result<Classification>;
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &str;

    /// Render `text` as spoken audio in the given language. May return no bytes.
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>>;
}
