use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> ns_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use ns_core::{Report, Result, Error};
    pub use crate::AppState;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use ns_core::{Classification, NewsFetcher, Result, SentimentClassifier, Summarizer};
    use ns_inference::prelude::*;

    struct FakeNews;

    #[async_trait]
    impl NewsFetcher for FakeNews {
        fn source(&self) -> &str {
            "fake"
        }

        async fn fetch_candidates(&self, query: &str) -> Result<Vec<String>> {
            if query == "Tesla" {
                Ok(vec!["Tesla unveils new EV".to_string(), "Tesla stock drops 5%".to_string()])
            } else {
                Ok(vec![])
            }
        }
    }

    struct FakeModel;

    #[async_trait]
    impl Summarizer for FakeModel {
        fn name(&self) -> &str {
            "fake"
        }

        async fn summarize(&self, text: &str, _min_len: usize, _max_len: usize) -> Result<String> {
            Ok(text.to_string())
        }
    }

    #[async_trait]
    impl SentimentClassifier for FakeModel {
        fn name(&self) -> &str {
            "fake"
        }

        async fn classify(&self, text: &str) -> Result<Classification> {
            if text.contains("drops") {
                Ok(Classification::new("NEGATIVE", 0.95))
            } else {
                Ok(Classification::new("POSITIVE", 0.9))
            }
        }
    }

    fn app() -> Router {
        let model = Arc::new(FakeModel);
        let analyzer = ArticleAnalyzer::new(model.clone(), model, TopicDetector::default());
        let pipeline = Pipeline::new(Arc::new(FakeNews), analyzer, ReportAssembler::without_audio());
        create_app(AppState::new(pipeline))
    }

    async fn post_analyze(body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_analyze_returns_report() {
        let (status, body) = post_analyze(r#"{"company": "  Tesla "}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Company"], "Tesla");
        assert_eq!(body["Articles"].as_array().unwrap().len(), 2);
        assert_eq!(body["Comparative Sentiment Score"]["Sentiment Distribution"]["positive"], 1);
        assert_eq!(body["Coverage Differences"].as_array().unwrap().len(), 1);
        assert_eq!(body["Final Sentiment Analysis"], "Tesla की ताज़ा खबरें ज्यादातर तटस्थ हैं।");
        assert!(body["Audio"].is_null());
    }

    #[tokio::test]
    async fn test_empty_company_is_bad_request() {
        let (status, body) = post_analyze(r#"{"company": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No company name provided");

        let (status, _) = post_analyze("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_company_is_not_found() {
        let (status, body) = post_analyze(r#"{"company": "Nobody"}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No articles found for the company 'Nobody'");
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
