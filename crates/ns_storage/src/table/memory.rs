use async_trait::async_trait;
use ns_core::{ArticleRow, ArticleTable, Error, Result, ScoredArticle};
use tokio::sync::RwLock;

use super::parse_published_at;

#[derive(Default)]
struct Inner {
    created: bool,
    rows: Vec<ArticleRow>,
}

/// In-process stand-in for the destination table, with the same
/// create-if-absent and insert-order semantics.
#[derive(Default)]
pub struct MemoryTable {
    inner: RwLock<Inner>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn schema_created(&self) -> bool {
        self.inner.read().await.created
    }

    pub async fn row_count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl ArticleTable for MemoryTable {
    async fn ensure_schema(&self) -> Result<()> {
        self.inner.write().await.created = true;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        if !inner.created {
            return Err(Error::Database("news_articles table does not exist".to_string()));
        }
        inner.rows.clear();
        Ok(())
    }

    async fn insert(&self, article: &ScoredArticle) -> Result<()> {
        let published_at = parse_published_at(&article.article.published_at)?;
        let mut inner = self.inner.write().await;
        if !inner.created {
            return Err(Error::Database("news_articles table does not exist".to_string()));
        }
        inner.rows.push(ArticleRow {
            published_at,
            source: article.article.source.clone(),
            sentiment_label: article.sentiment_label.to_string(),
            title: article.article.title.clone(),
            description: article.article.description.clone(),
        });
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ArticleRow>> {
        Ok(self.inner.read().await.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::{ArticleRecord, Sentiment, SentimentScores};

    fn scored(title: &str, published_at: &str) -> ScoredArticle {
        ScoredArticle {
            article: ArticleRecord {
                published_at: published_at.to_string(),
                source: "AP".to_string(),
                title: title.to_string(),
                description: String::new(),
            },
            sentiment_label: Sentiment::Neutral,
            sentiment_scores: SentimentScores {
                compound: 0.0,
                positive: 0.0,
                negative: 0.0,
                neutral: 1.0,
            },
        }
    }

    #[tokio::test]
    async fn insert_requires_schema() {
        let table = MemoryTable::new();
        assert!(table.insert(&scored("x", "2026-08-05 10:00:00")).await.is_err());
        assert!(table.clear().await.is_err());

        table.ensure_schema().await.unwrap();
        table.insert(&scored("x", "2026-08-05 10:00:00")).await.unwrap();
        assert_eq!(table.row_count().await, 1);
    }

    #[tokio::test]
    async fn clear_empties_preserving_schema() {
        let table = MemoryTable::new();
        table.ensure_schema().await.unwrap();
        table.insert(&scored("x", "2026-08-05 10:00:00")).await.unwrap();
        table.clear().await.unwrap();
        assert_eq!(table.row_count().await, 0);
        assert!(table.schema_created().await);
    }

    #[tokio::test]
    async fn rows_come_back_in_insert_order() {
        let table = MemoryTable::new();
        table.ensure_schema().await.unwrap();
        table.insert(&scored("first", "2026-08-05 10:00:00")).await.unwrap();
        table.insert(&scored("second", "2026-08-05 09:00:00")).await.unwrap();

        let rows = table.fetch_all().await.unwrap();
        assert_eq!(rows[0].title, "first");
        assert_eq!(rows[1].title, "second");
        assert_eq!(rows[0].sentiment_label, "Neutral");
    }
}
