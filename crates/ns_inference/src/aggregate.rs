use std::collections::{HashMap, HashSet};
use ns_core::{Article, ComparativePair, ComparativeScore, SentimentDistribution, TopicOverlap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub distribution: SentimentDistribution,
    pub overlap: TopicOverlap,
    pub comparisons: Vec<ComparativePair>,
}

impl Aggregate {
    pub fn comparative_score(&self) -> ComparativeScore {
        ComparativeScore {
            sentiment_distribution: self.distribution,
            topic_overlap: self.overlap.clone(),
        }
    }
}

pub fn aggregate(articles: &[Article]) -> Aggregate {
    Aggregate {
        distribution: sentiment_distribution(articles),
        overlap: topic_overlap(articles),
        comparisons: compare_articles(articles),
    }
}

pub fn sentiment_distribution(articles: &[Article]) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for article in articles {
        distribution.record(article.sentiment);
    }
    distribution
}

/// Topics seen in more than one article go to `common`, the rest to
/// `unique`. Both lists are ordered by descending article count, ties
/// by first appearance.
pub fn topic_overlap(articles: &[Article]) -> TopicOverlap {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for article in articles {
        let mut seen_here = HashSet::new();
        for topic in &article.topics {
            if !seen_here.insert(topic.as_str()) {
                continue;
            }
            let count = counts.entry(topic.as_str()).or_insert_with(|| {
                first_seen.push(topic.as_str());
                0
            });
            *count += 1;
        }
    }

    // stable sort keeps first-seen order among equal counts
    let mut ranked: Vec<(&str, usize)> = first_seen.into_iter().map(|t| (t, counts[t])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut overlap = TopicOverlap::default();
    for (topic, count) in ranked {
        if count > 1 {
            overlap.common.push(topic.to_string());
        } else {
            overlap.unique.push(topic.to_string());
        }
    }
    overlap
}

/// One pair per adjacent pair of articles. Each side quotes `topics[0]`,
/// the first topic in detection order. That is positional only: reordering
/// the vocabulary changes the text.
pub fn compare_articles(articles: &[Article]) -> Vec<ComparativePair> {
    articles.windows(2).enumerate().map(|(i, pair)| {
        let (first, second) = (&pair[0], &pair[1]);
        let first_topic = leading_topic(first);
        let second_topic = leading_topic(second);

        ComparativePair {
            first: i,
            comparison: format!(
                "Article {} discusses {}, while Article {} focuses on {}.",
                i + 1, first.title, i + 2, second.title
            ),
            impact: format!(
                "The first article highlights {}, whereas the second emphasizes {}.",
                first_topic, second_topic
            ),
            first_topic,
            second_topic,
        }
    }).collect()
}

fn leading_topic(article: &Article) -> String {
    article.topics.first()
        .cloned()
        .unwrap_or_else(|| crate::topics::GENERAL_TOPIC.to_string())
}
