use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use ns_core::{Classification, Error, Result, SentimentClassifier, Summarizer};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
const CHAT_MODEL: &str = "deepseek-chat";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

#[derive(Deserialize)]
struct RawClassification {
    label: String,
    #[serde(alias = "confidence")]
    score: f64,
}

/// Chat-completions backend used for both summarization and sentiment.
pub struct DeepSeekModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for DeepSeekModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepSeekModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DeepSeekModel {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Inference("DeepSeek API key is required".to_string()))?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    async fn chat(&self, prompt: String) -> Result<String> {
        let request = ChatRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: 0.0,
        };

        let response = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        response.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| Error::Inference("DeepSeek returned no choices".to_string()))
    }
}

/// Pulls the JSON object out of a chat reply, tolerating code fences and
/// surrounding prose.
pub(crate) fn parse_classification(content: &str) -> Result<Classification> {
    let start = content.find('{');
    let end = content.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => return Err(Error::Inference(format!("No JSON object in reply: {:?}", content))),
    };

    let raw: RawClassification = serde_json::from_str(json)?;
    Ok(Classification::new(raw.label, raw.score.clamp(0.0, 1.0)))
}

#[async_trait]
impl Summarizer for DeepSeekModel {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    async fn summarize(&self, text: &str, min_len: usize, max_len: usize) -> Result<String> {
        let prompt = format!(
            "Summarize the following news text in {} to {} words. Reply with the summary only.\n\n{}",
            min_len, max_len, text
        );
        let summary = self.chat(prompt).await?;
        if summary.is_empty() {
            return Err(Error::Inference("DeepSeek returned an empty summary".to_string()));
        }
        tracing::debug!("Generated summary: {}", summary);
        Ok(summary)
    }
}

#[async_trait]
impl SentimentClassifier for DeepSeekModel {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let prompt = format!(
            "Classify the sentiment of the following news text as POSITIVE or NEGATIVE. \
             Reply with JSON only, shaped like {{\"label\": \"POSITIVE\", \"score\": 0.93}}, \
             where score is your confidence between 0 and 1.\n\n{}",
            text
        );
        let reply = self.chat(prompt).await?;
        parse_classification(&reply)
    }
}
