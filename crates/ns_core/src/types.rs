use std::fmt;
use serde::{Deserialize, Serialize};

/// Canonical three-way sentiment. Raw model labels are mapped onto it once,
/// in [`Classification::sentiment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Case-insensitive mapping from a raw classifier label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" | "pos" => Some(Sentiment::Positive),
            "negative" | "neg" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Display token used in the Hindi narrative
    pub fn hindi(&self) -> &'static str {
        match self {
            Sentiment::Positive => "सकारात्मक",
            Sentiment::Negative => "नकारात्मक",
            Sentiment::Neutral => "तटस्थ",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw output of a sentiment classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f64,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Canonical sentiment after confidence thresholding. Anything below
    /// `threshold`, a NaN confidence, and any label the enum does not know
    /// become neutral.
    pub fn sentiment(&self, threshold: f64) -> Sentiment {
        if self.confidence.is_nan() || self.confidence < threshold {
            return Sentiment::Neutral;
        }
        match Sentiment::from_label(&self.label) {
            Some(sentiment) => sentiment,
            None => {
                tracing::warn!("Unknown sentiment label {:?}, treating as neutral", self.label);
                Sentiment::Neutral
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Topics")]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Overall verdict: whichever of positive and negative is strictly
    /// larger, neutral on a tie.
    pub fn verdict(&self) -> Sentiment {
        use std::cmp::Ordering;
        match self.positive.cmp(&self.negative) {
            Ordering::Greater => Sentiment::Positive,
            Ordering::Less => Sentiment::Negative,
            Ordering::Equal => Sentiment::Neutral,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicOverlap {
    #[serde(rename = "Common Topics")]
    pub common: Vec<String>,
    #[serde(rename = "Unique Topics")]
    pub unique: Vec<String>,
}

/// Juxtaposition of two adjacent articles. `first_topic`/`second_topic` are
/// index 0 of each article's topic list in detection order, not a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparativePair {
    #[serde(skip)]
    pub first: usize,
    #[serde(skip)]
    pub first_topic: String,
    #[serde(skip)]
    pub second_topic: String,
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparativeScore {
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: SentimentDistribution,
    #[serde(rename = "Topic Overlap")]
    pub topic_overlap: TopicOverlap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<Article>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative_score: ComparativeScore,
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<ComparativePair>,
    #[serde(rename = "Final Sentiment Analysis")]
    pub narrative: String,
    #[serde(rename = "Audio")]
    pub audio: Option<String>,
}
