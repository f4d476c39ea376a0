pub mod error;
pub mod fetch;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use fetch::NewsFetcher;
pub use models::{SentimentClassifier, SpeechSynthesizer, Summarizer};
pub use types::{
    Article, Classification, ComparativePair, ComparativeScore, Report, Sentiment,
    SentimentDistribution, TopicOverlap,
};
