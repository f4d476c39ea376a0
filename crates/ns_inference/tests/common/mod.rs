#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use ns_core::{
    Classification, Error, NewsFetcher, Result, SentimentClassifier, SpeechSynthesizer, Summarizer,
};
use ns_inference::prelude::*;

pub struct StaticFetcher {
    titles: Vec<String>,
}

impl StaticFetcher {
    pub fn new(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[async_trait]
impl NewsFetcher for StaticFetcher {
    fn source(&self) -> &str {
        "static"
    }

    async fn fetch_candidates(&self, _query: &str) -> Result<Vec<String>> {
        Ok(self.titles.clone())
    }
}

pub struct BrokenFetcher;

#[async_trait]
impl NewsFetcher for BrokenFetcher {
    fn source(&self) -> &str {
        "broken"
    }

    async fn fetch_candidates(&self, _query: &str) -> Result<Vec<String>> {
        Err(Error::Scraping("connection refused".to_string()))
    }
}

/// Returns its input unchanged, except for texts containing `fail_marker`
pub struct PassthroughSummarizer {
    fail_marker: Option<String>,
}

impl PassthroughSummarizer {
    pub fn new() -> Self {
        Self { fail_marker: None }
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_marker: Some(marker.to_string()),
        }
    }
}

#[async_trait]
impl Summarizer for PassthroughSummarizer {
    fn name(&self) -> &str {
        "passthrough"
    }

    async fn summarize(&self, text: &str, _min_len: usize, _max_len: usize) -> Result<String> {
        match &self.fail_marker {
            Some(marker) if text.contains(marker.as_str()) => {
                Err(Error::Inference("summarizer crashed".to_string()))
            }
            _ => Ok(text.to_string()),
        }
    }
}

/// Hands out queued classifications in call order
pub struct QueuedClassifier {
    queue: Mutex<VecDeque<Classification>>,
}

impl QueuedClassifier {
    pub fn new(results: &[(&str, f64)]) -> Self {
        Self {
            queue: Mutex::new(
                results.iter().map(|(label, score)| Classification::new(*label, *score)).collect(),
            ),
        }
    }
}

#[async_trait]
impl SentimentClassifier for QueuedClassifier {
    fn name(&self) -> &str {
        "queued"
    }

    async fn classify(&self, _text: &str) -> Result<Classification> {
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Inference("no classification queued".to_string()))
    }
}

pub struct FixedSynthesizer(pub Option<Vec<u8>>);

#[async_trait]
impl SpeechSynthesizer for FixedSynthesizer {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn synthesize(&self, _text: &str, _language_code: &str) -> Result<Vec<u8>> {
        self.0.clone().ok_or_else(|| Error::Synthesis("tts service down".to_string()))
    }
}

/// Sequential pipeline, so queued classifications line up with fetch order
pub fn pipeline(
    fetcher: impl NewsFetcher + 'static,
    summarizer: impl Summarizer + 'static,
    classifier: impl SentimentClassifier + 'static,
    synthesizer: Option<FixedSynthesizer>,
) -> Pipeline {
    let analyzer = ArticleAnalyzer::new(Arc::new(summarizer), Arc::new(classifier), TopicDetector::default());
    let assembler = ReportAssembler::new(
        synthesizer.map(|s| Arc::new(s) as Arc<dyn SpeechSynthesizer>),
    );
    Pipeline::new(Arc::new(fetcher), analyzer, assembler).with_settings(PipelineSettings {
        concurrency: 1,
        ..PipelineSettings::default()
    })
}
