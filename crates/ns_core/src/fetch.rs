use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait NewsFetcher: Send + Sync {
    /// Name of the news source, used in log lines
    fn source(&self) -> &str;

    /// Returns raw candidate headlines for a query, in source order.
    /// An empty list is a valid outcome.
    async fn fetch_candidates(&self, query: &str) -> Result<Vec<String>>;
}
