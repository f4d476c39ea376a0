mod common;

use std::collections::HashSet;
use ns_core::{Error, Sentiment};
use common::*;

#[tokio::test]
async fn test_mixed_coverage_is_neutral() {
    let pipeline = pipeline(
        StaticFetcher::new(&["Tesla unveils new EV", "Tesla stock drops 5%"]),
        PassthroughSummarizer::new(),
        QueuedClassifier::new(&[("POSITIVE", 0.9), ("NEGATIVE", 0.95)]),
        Some(FixedSynthesizer(Some(b"mp3".to_vec()))),
    );

    let report = pipeline.scrape_and_analyze("Tesla").await.unwrap();
    let score = &report.comparative_score;

    assert_eq!(report.company, "Tesla");
    assert_eq!(report.articles.len(), 2);
    assert_eq!(report.articles[0].sentiment, Sentiment::Positive);
    assert_eq!(report.articles[1].sentiment, Sentiment::Negative);
    assert_eq!(score.sentiment_distribution.positive, 1);
    assert_eq!(score.sentiment_distribution.negative, 1);
    assert_eq!(score.sentiment_distribution.neutral, 0);
    assert_eq!(report.narrative, "Tesla की ताज़ा खबरें ज्यादातर तटस्थ हैं।");

    let observed: HashSet<&str> = score.topic_overlap.common.iter()
        .chain(score.topic_overlap.unique.iter())
        .map(String::as_str)
        .collect();
    assert!(observed.contains("Car"));
    assert!(observed.contains("Finance"));
    // "Tesla" triggers Car in both headlines, "stock" only in the second
    assert_eq!(score.topic_overlap.common, vec!["Car"]);
    assert_eq!(score.topic_overlap.unique, vec!["Finance"]);

    assert_eq!(report.coverage_differences.len(), 1);
    assert_eq!(
        report.coverage_differences[0].comparison,
        "Article 1 discusses Tesla unveils new EV, while Article 2 focuses on Tesla stock drops 5%."
    );
    assert_eq!(report.audio.as_deref(), Some("data:audio/mp3;base64,bXAz"));
}

#[tokio::test]
async fn test_no_titles_is_not_found() {
    let pipeline = pipeline(
        StaticFetcher::new(&[]),
        PassthroughSummarizer::new(),
        QueuedClassifier::new(&[]),
        None,
    );

    let err = pipeline.scrape_and_analyze("Nobody Inc").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "No articles found for the company 'Nobody Inc'");
}

#[tokio::test]
async fn test_fetch_failure_is_not_found() {
    let pipeline = pipeline(BrokenFetcher, PassthroughSummarizer::new(), QueuedClassifier::new(&[]), None);

    let result = pipeline.scrape_and_analyze("Tesla").await;
    assert!(matches!(result, Err(Error::NoArticlesFound { ref company }) if company == "Tesla"));
}

#[tokio::test]
async fn test_only_blank_titles_is_not_found() {
    let pipeline = pipeline(
        StaticFetcher::new(&["", "  \n", "\r\n"]),
        PassthroughSummarizer::new(),
        QueuedClassifier::new(&[("POSITIVE", 0.9)]),
        None,
    );
    assert!(pipeline.scrape_and_analyze("Tesla").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_failed_article_is_dropped() {
    let pipeline = pipeline(
        StaticFetcher::new(&["Tesla recall widens", "Tesla unveils new EV"]),
        PassthroughSummarizer::failing_on("recall"),
        QueuedClassifier::new(&[("POSITIVE", 0.9)]),
        None,
    );

    let report = pipeline.scrape_and_analyze("Tesla").await.unwrap();
    assert_eq!(report.articles.len(), 1);
    assert_eq!(report.articles[0].title, "Tesla unveils new EV");

    let distribution = report.comparative_score.sentiment_distribution;
    assert_eq!(distribution.positive, 1);
    assert_eq!(distribution.total(), 1);
    assert!(report.coverage_differences.is_empty());
}

#[tokio::test]
async fn test_synthesis_failure_keeps_report() {
    let pipeline = pipeline(
        StaticFetcher::new(&["Tesla unveils new EV", "Tesla stock drops 5%"]),
        PassthroughSummarizer::new(),
        QueuedClassifier::new(&[("POSITIVE", 0.9), ("NEGATIVE", 0.95)]),
        Some(FixedSynthesizer(None)),
    );

    let report = pipeline.scrape_and_analyze("Tesla").await.unwrap();
    assert!(report.audio.is_none());
    assert_eq!(report.articles.len(), 2);
    assert_eq!(report.coverage_differences.len(), 1);
    assert!(!report.narrative.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["Audio"].is_null());
}

#[tokio::test]
async fn test_low_confidence_counts_as_neutral() {
    let pipeline = pipeline(
        StaticFetcher::new(&["Tesla holds meeting", "Tesla posts record profit", "Tesla layoffs"]),
        PassthroughSummarizer::new(),
        QueuedClassifier::new(&[("NEGATIVE", 0.55), ("POSITIVE", 0.99), ("NEGATIVE", 0.69)]),
        None,
    );

    let report = pipeline.scrape_and_analyze("Tesla").await.unwrap();
    let distribution = report.comparative_score.sentiment_distribution;
    assert_eq!(distribution.neutral, 2);
    assert_eq!(distribution.positive, 1);
    assert_eq!(distribution.total(), report.articles.len());
    assert_eq!(report.narrative, "Tesla की ताज़ा खबरें ज्यादातर सकारात्मक हैं।");
    assert_eq!(report.coverage_differences.len(), report.articles.len() - 1);
}
