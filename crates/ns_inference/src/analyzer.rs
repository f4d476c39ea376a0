use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use ns_core::{Article, SentimentClassifier, Summarizer};
use crate::topics::TopicDetector;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Classifications below this confidence are reported as neutral
    pub confidence_threshold: f64,
    pub summary_min_len: usize,
    pub summary_max_len: usize,
    pub title_min_len: usize,
    pub title_max_len: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.7,
            summary_min_len: 10,
            summary_max_len: 50,
            title_min_len: 5,
            title_max_len: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    Summarization,
    Classification,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => f.write_str("empty title"),
            SkipReason::Summarization => f.write_str("summarization failed"),
            SkipReason::Classification => f.write_str("classification failed"),
        }
    }
}

/// Outcome of analyzing one headline. Skips are dropped by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Article(Article),
    Skip(SkipReason),
}

impl Analysis {
    pub fn into_article(self) -> Option<Article> {
        match self {
            Analysis::Article(article) => Some(article),
            Analysis::Skip(_) => None,
        }
    }
}

/// Collapse line breaks to spaces and trim.
pub fn normalize_title(raw: &str) -> String {
    raw.replace(['\r', '\n'], " ").trim().to_string()
}

pub struct ArticleAnalyzer {
    summarizer: Arc<dyn Summarizer>,
    classifier: Arc<dyn SentimentClassifier>,
    detector: TopicDetector,
    settings: AnalyzerSettings,
}

impl fmt::Debug for ArticleAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleAnalyzer")
            .field("summarizer", &self.summarizer.name())
            .field("classifier", &self.classifier.name())
            .field("detector", &self.detector)
            .field("settings", &self.settings)
            .finish()
    }
}

impl ArticleAnalyzer {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        classifier: Arc<dyn SentimentClassifier>,
        detector: TopicDetector,
    ) -> Self {
        Self {
            summarizer,
            classifier,
            detector,
            settings: AnalyzerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AnalyzerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    pub async fn analyze(&self, raw_title: &str) -> Analysis {
        let title = normalize_title(raw_title);
        if title.is_empty() {
            return Analysis::Skip(SkipReason::Empty);
        }

        let summary = match self.summarizer
            .summarize(&title, self.settings.summary_min_len, self.settings.summary_max_len)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Skipping {:?}: summarization failed: {}", title, e);
                return Analysis::Skip(SkipReason::Summarization);
            }
        };

        let classification = match self.classifier.classify(&summary).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!("Skipping {:?}: classification failed: {}", title, e);
                return Analysis::Skip(SkipReason::Classification);
            }
        };
        let sentiment = classification.sentiment(self.settings.confidence_threshold);
        debug!(
            "Classified {:?} as {} ({} @ {:.2})",
            title, sentiment, classification.label, classification.confidence
        );

        let topics = self.detector.detect(&summary);
        let title = self.display_title(&summary, title).await;

        Analysis::Article(Article {
            title,
            summary,
            sentiment,
            topics,
        })
    }

    /// Second, shorter summarization pass for display. Falls back to the
    /// normalized headline.
    async fn display_title(&self, summary: &str, fallback: String) -> String {
        match self.summarizer
            .summarize(summary, self.settings.title_min_len, self.settings.title_max_len)
            .await
        {
            Ok(short) if !short.trim().is_empty() => short.trim().to_string(),
            Ok(_) => fallback,
            Err(e) => {
                debug!("Title shortening failed for {:?}, keeping headline: {}", fallback, e);
                fallback
            }
        }
    }
}
