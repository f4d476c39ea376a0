use clap::Args;
use ns_core::{Error, Result};
use crate::scrapers::FETCHER_NAMES;
use crate::scrapers::bing::BingNewsScraper;

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Query to search headlines for, usually a company name
    pub query: String,
    /// News source to fetch from
    #[arg(long, default_value = "bing")]
    pub source: String,
    /// Maximum number of headlines to print
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

/// Fetches and prints raw headlines, one per line.
pub async fn handle_command(args: FetchArgs) -> Result<Vec<String>> {
    let fetcher = match args.source.to_lowercase().as_str() {
        "bing" => Box::new(BingNewsScraper::new().with_limit(args.limit)) as Box<dyn ns_core::NewsFetcher>,
        other => {
            return Err(Error::Config(format!(
                "Unknown source '{}'. Available sources: {}",
                other,
                FETCHER_NAMES.join(", ")
            )))
        }
    };

    let titles = fetcher.fetch_candidates(&args.query).await?;
    println!("Found {} headlines from {}", titles.len(), fetcher.source());
    for title in &titles {
        println!("- {}", title.trim());
    }
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_source() {
        let args = FetchArgs {
            query: "Tesla".to_string(),
            source: "altavista".to_string(),
            limit: 10,
        };
        let err = handle_command(args).await.unwrap_err();
        assert!(err.to_string().contains("Available sources: bing"));
    }
}
