use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use url::Url;
use ns_core::{Error, NewsFetcher, Result};
use crate::logging::Logger;
use super::utils;

/// Headlines from Bing News search results.
#[derive(Debug, Clone)]
pub struct BingNewsScraper {
    client: Client,
    base_url: String,
    limit: usize,
    logger: Logger,
}

impl BingNewsScraper {
    const BASE_URL: &'static str = "https://www.bing.com";
    const USER_AGENT: &'static str = "Mozilla/5.0";
    const TITLE_SELECTOR: &'static str = "a.title";
    const DEFAULT_LIMIT: usize = 10;

    pub fn new() -> Self {
        Self::with_base_url(Self::BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            limit: Self::DEFAULT_LIMIT,
            logger: Logger::new().with_prefix("🦗".to_string()).with_prefix("[Bing]".to_string()),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn search_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(&format!("{}/news/search", self.base_url), &[("q", query)])
            .map_err(|e| Error::Scraping(format!("Failed to build search URL: {}", e)))
    }

    /// Text of the first `limit` result titles, in page order. Titles are
    /// left raw; blank ones are dropped later by the analyzer.
    pub fn parse_titles(html: &str, limit: usize) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let mut titles = utils::extract_texts(&document, Self::TITLE_SELECTOR)?;
        titles.truncate(limit);
        Ok(titles)
    }
}

impl Default for BingNewsScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsFetcher for BingNewsScraper {
    fn source(&self) -> &str {
        "Bing News"
    }

    async fn fetch_candidates(&self, query: &str) -> Result<Vec<String>> {
        let url = self.search_url(query)?;
        self.logger.debug(&format!("GET {}", url));

        let response = self.client
            .get(url)
            .header("User-Agent", Self::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            self.logger.error(&format!("Received status code {}", status));
            return Err(Error::Scraping(format!("Bing News returned status {}", status)));
        }

        let html = response.text().await?;
        let titles = Self::parse_titles(&html, self.limit)?;
        self.logger.info(&format!("Found {} headlines for {:?}", titles.len(), query));
        Ok(titles)
    }
}
