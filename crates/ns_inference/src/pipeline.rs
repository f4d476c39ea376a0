use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use futures::stream::{self, StreamExt};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use ns_core::{Article, Error, NewsFetcher, Report, Result};
use crate::aggregate::aggregate;
use crate::analyzer::{Analysis, ArticleAnalyzer};
use crate::narrative::narrate;
use crate::report::ReportAssembler;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    /// Headlines analyzed per request; the rest of the fetch is ignored
    pub max_articles: usize,
    /// Headlines analyzed at once. Results keep fetch order regardless.
    pub concurrency: usize,
    /// Stop analyzing once this much time has passed and report on what
    /// finished so far
    pub deadline: Option<Duration>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_articles: 10,
            concurrency: 4,
            deadline: None,
        }
    }
}

pub struct Pipeline {
    fetcher: Arc<dyn NewsFetcher>,
    analyzer: ArticleAnalyzer,
    assembler: ReportAssembler,
    settings: PipelineSettings,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("fetcher", &self.fetcher.source())
            .field("analyzer", &self.analyzer)
            .field("assembler", &self.assembler)
            .field("settings", &self.settings)
            .finish()
    }
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn NewsFetcher>, analyzer: ArticleAnalyzer, assembler: ReportAssembler) -> Self {
        Self {
            fetcher,
            analyzer,
            assembler,
            settings: PipelineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PipelineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Fetch, analyze and aggregate the news for `company`.
    ///
    /// Per-headline failures and audio failures are absorbed. The only error
    /// is [`Error::NoArticlesFound`], when not a single headline survives.
    pub async fn scrape_and_analyze(&self, company: &str) -> Result<Report> {
        info!("📰 Analyzing news for {}", company);
        let titles = self.fetch_titles(company).await;

        let articles = self.analyze_titles(titles).await;
        if articles.is_empty() {
            warn!("No usable articles for {}", company);
            return Err(Error::NoArticlesFound {
                company: company.to_string(),
            });
        }

        let aggregate = aggregate(&articles);
        let narrative = narrate(company, &aggregate.distribution);
        info!("✨ {}", narrative);

        Ok(self.assembler.assemble(company, articles, aggregate, narrative).await)
    }

    async fn fetch_titles(&self, company: &str) -> Vec<String> {
        match self.fetcher.fetch_candidates(company).await {
            Ok(titles) => {
                info!("🦗 {} returned {} headlines", self.fetcher.source(), titles.len());
                titles
            }
            Err(e) => {
                warn!("Fetching from {} failed: {}", self.fetcher.source(), e);
                Vec::new()
            }
        }
    }

    /// Analyzes up to `max_articles` titles, preserving their order.
    pub async fn analyze_titles(&self, titles: Vec<String>) -> Vec<Article> {
        let total = titles.len().min(self.settings.max_articles);
        let deadline = self.settings.deadline.map(|d| Instant::now() + d);

        let outcomes = stream::iter(titles.into_iter().take(self.settings.max_articles))
            .map(|title| async move { self.analyzer.analyze(&title).await })
            .buffered(self.settings.concurrency.max(1));
        futures::pin_mut!(outcomes);

        let mut articles = Vec::with_capacity(total);
        loop {
            let next = match deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, outcomes.next()).await {
                    Ok(next) => next,
                    Err(_) => {
                        warn!("⏰ Deadline reached after {} of {} headlines", articles.len(), total);
                        break;
                    }
                },
                None => outcomes.next().await,
            };

            match next {
                Some(Analysis::Article(article)) => articles.push(article),
                Some(Analysis::Skip(reason)) => debug!("Skipped headline: {}", reason),
                None => break,
            }
        }

        info!("✅ Analyzed {} of {} headlines", articles.len(), total);
        articles
    }
}
