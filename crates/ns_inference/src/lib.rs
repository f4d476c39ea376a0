pub mod aggregate;
pub mod analyzer;
pub mod models;
pub mod narrative;
pub mod pipeline;
pub mod report;
pub mod topics;

/// Model selection, usually filled from CLI flags
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub model_url: Option<String>,
}

pub mod prelude {
    pub use super::Config;
    pub use super::aggregate::{aggregate, Aggregate};
    pub use super::analyzer::{Analysis, AnalyzerSettings, ArticleAnalyzer, SkipReason};
    pub use super::models::{create_model, create_synthesizer, ModelHandles};
    pub use super::narrative::narrate;
    pub use super::pipeline::{Pipeline, PipelineSettings};
    pub use super::report::ReportAssembler;
    pub use super::topics::{TopicDetector, TopicVocabulary};
    pub use ns_core::{Article, Error, Report, Result, Sentiment};
}

pub use models::create_model;
pub use pipeline::{Pipeline, PipelineSettings};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[tokio::test]
    async fn test_inference_pipeline() {
        let handles = create_model(None).await.unwrap();
        let analyzer = ArticleAnalyzer::new(handles.summarizer, handles.classifier, TopicDetector::default());

        let articles = vec![
            analyzer.analyze("Tesla unveils new EV").await.into_article().unwrap(),
            analyzer.analyze("Tesla stock drops 5%").await.into_article().unwrap(),
        ];
        let aggregate = aggregate(&articles);
        assert_eq!(aggregate.distribution.positive, 1);
        assert_eq!(aggregate.distribution.negative, 1);
        assert_eq!(aggregate.comparisons.len(), 1);

        let report = ReportAssembler::new(None)
            .assemble("Tesla", articles, aggregate.clone(), narrate("Tesla", &aggregate.distribution))
            .await;
        assert!(report.narrative.contains(Sentiment::Neutral.hindi()));
    }
}
