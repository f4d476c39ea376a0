use std::path::Path;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use ns_core::{Error, Result};

/// Tag returned when no trigger phrase matches.
pub const GENERAL_TOPIC: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRule {
    pub topic: String,
    pub keywords: Vec<String>,
}

/// Ordered topic → trigger phrase mapping. Order decides the order of
/// detected topics, which in turn decides which topic a comparative pair
/// quotes for an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicVocabulary {
    rules: Vec<TopicRule>,
}

impl TopicVocabulary {
    pub fn new(rules: Vec<TopicRule>) -> Self {
        Self { rules }
    }

    /// Load a vocabulary from a JSON file shaped like
    /// `[{"topic": "Finance", "keywords": ["stock", "revenue"]}]`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let vocabulary: Self = serde_json::from_str(&raw)?;
        if vocabulary.rules.is_empty() {
            return Err(Error::Config(format!("Topic vocabulary {} is empty", path.display())));
        }
        Ok(vocabulary)
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }
}

impl Default for TopicVocabulary {
    fn default() -> Self {
        fn rule(topic: &str, keywords: &[&str]) -> TopicRule {
            TopicRule {
                topic: topic.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }

        Self::new(vec![
            rule("Car", &["Tesla", "vehicle", "car", "EV", "electric car", "automobile", "autonomous driving"]),
            rule("Finance", &["stock", "investment", "profit", "revenue", "market", "shareholders"]),
            rule("Technology", &["AI", "artificial intelligence", "software", "innovation", "tech", "robotics"]),
            rule("Regulations", &["government", "policy", "law", "compliance", "regulations"]),
            rule("Protests", &["protest", "strike", "boycott", "rally", "activists"]),
        ])
    }
}

/// Keyword topic classifier. Cheap to clone; the vocabulary is shared read-only.
#[derive(Debug, Clone)]
pub struct TopicDetector {
    vocabulary: Arc<TopicVocabulary>,
}

impl TopicDetector {
    pub fn new(vocabulary: Arc<TopicVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &TopicVocabulary {
        &self.vocabulary
    }

    /// Every topic with at least one trigger contained in `text`
    /// (case-insensitive substring match), in vocabulary order. Never empty.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let topics: Vec<String> = self.vocabulary.rules.iter()
            .filter(|rule| rule.keywords.iter().any(|k| text.contains(&k.to_lowercase())))
            .map(|rule| rule.topic.clone())
            .collect();

        if topics.is_empty() {
            vec![GENERAL_TOPIC.to_string()]
        } else {
            topics
        }
    }
}

impl Default for TopicDetector {
    fn default() -> Self {
        Self::new(Arc::new(TopicVocabulary::default()))
    }
}
