use std::sync::Arc;
use ns_core::NewsFetcher;

pub mod bing;

use bing::BingNewsScraper;

/// Fetchers selectable with `--source`
pub fn get_fetcher(name: &str) -> Option<Arc<dyn NewsFetcher>> {
    match name.to_lowercase().as_str() {
        "bing" => Some(Arc::new(BingNewsScraper::new())),
        _ => None,
    }
}

pub const FETCHER_NAMES: &[&str] = &["bing"];

/// Common utilities for scrapers
pub(crate) mod utils {
    use ns_core::{Error, Result};
    use scraper::{Html, Selector};

    pub fn extract_texts(document: &Html, selector: &str) -> Result<Vec<String>> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector: {}", e)))?;

        Ok(document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect())
    }
}
