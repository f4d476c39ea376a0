use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;
use ns_core::{Error, Result, SpeechSynthesizer};

const DEFAULT_BASE_URL: &str = "https://translate.google.com/translate_tts";
const USER_AGENT: &str = "Mozilla/5.0";
/// The endpoint rejects longer inputs
const MAX_CHUNK_CHARS: usize = 100;

/// Google Translate's public text-to-speech endpoint, returning MP3.
pub struct GoogleTts {
    client: Client,
    base_url: String,
}

impl fmt::Debug for GoogleTts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTts")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GoogleTts {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    fn chunk_url(&self, chunk: &str, language_code: &str, idx: usize, total: usize) -> Result<Url> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        Url::parse_with_params(
            &self.base_url,
            &[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language_code),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
                ("client", "tw-ob"),
            ],
        )
        .map_err(|e| Error::Synthesis(format!("Invalid TTS URL: {}", e)))
    }
}

impl Default for GoogleTts {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits text at whitespace into chunks of at most `max_chars` characters.
/// Words longer than the limit are cut.
pub(crate) fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            chunks.push(word.drain(..max_chars).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() { word.len() } else { word.len() + 1 };
        if current.chars().count() + needed > max_chars {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    fn name(&self) -> &str {
        "Google Translate TTS"
    }

    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>> {
        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        let mut audio = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            let url = self.chunk_url(chunk, language_code, idx, chunks.len())?;
            let response = self.client
                .get(url)
                .header("User-Agent", USER_AGENT)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(Error::Synthesis(format!(
                    "TTS request for chunk {}/{} failed with status {}",
                    idx + 1,
                    chunks.len(),
                    response.status()
                )));
            }
            audio.extend_from_slice(&response.bytes().await?);
        }

        Ok(audio)
    }
}
