use std::sync::Arc;

use chrono::Utc;
use ns_core::{clean, HeadlineSource, ObjectStore, Result, ScoredArticle, Sentiment, SentimentAnalyzer};
use tracing::info;

/// Logical prefix batch files are written under and drained from.
pub const BATCH_PREFIX: &str = "news_sentiment/";
const BATCH_KEY_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome {
    /// The API returned zero articles; nothing was written.
    NoArticles,
    Stored { key: String, count: usize },
}

/// Fetches the current headline snapshot, cleans and scores it, and writes
/// the whole batch as one JSON array.
pub struct ExtractStage {
    source: Arc<dyn HeadlineSource>,
    analyzer: Arc<dyn SentimentAnalyzer>,
    store: Arc<dyn ObjectStore>,
}

impl ExtractStage {
    pub fn new(
        source: Arc<dyn HeadlineSource>,
        analyzer: Arc<dyn SentimentAnalyzer>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            source,
            analyzer,
            store,
        }
    }

    pub async fn run(&self) -> Result<ExtractOutcome> {
        let articles = self.source.fetch_headlines().await?;
        if articles.is_empty() {
            info!("No articles in the current headline snapshot");
            return Ok(ExtractOutcome::NoArticles);
        }
        info!("📰 Fetched {} articles from {}", articles.len(), self.source.name());

        let mut scored = Vec::with_capacity(articles.len());
        for mut article in articles {
            article.source = clean(Some(&article.source));
            article.title = clean(Some(&article.title));
            article.description = clean(Some(&article.description));

            let text = format!("{} {}", article.title, article.description);
            let scores = self.analyzer.score(&text).await?;
            scored.push(ScoredArticle {
                article,
                sentiment_label: Sentiment::from_compound(scores.compound),
                sentiment_scores: scores,
            });
        }

        // One put for the whole batch; a failed run writes nothing.
        let key = format!(
            "{}sentiment_{}.json",
            BATCH_PREFIX,
            Utc::now().format(BATCH_KEY_FORMAT)
        );
        let body = serde_json::to_vec(&scored)?;
        self.store.put(&key, body, "application/json").await?;
        info!("💾 Stored batch of {} scored articles at {}", scored.len(), key);

        Ok(ExtractOutcome::Stored {
            key,
            count: scored.len(),
        })
    }
}
