use async_trait::async_trait;
use ns_core::{ArticleRow, ArticleTable, DbConfig, Error, Result, ScoredArticle};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::parse_published_at;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS news_articles (
    id SERIAL PRIMARY KEY,
    published_at TIMESTAMP,
    source TEXT,
    sentiment_label TEXT,
    title TEXT,
    description TEXT
)
"#;

/// The destination table on PostgreSQL.
pub struct PgArticleTable {
    pool: PgPool,
}

impl PgArticleTable {
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.url())
            .await
            .map_err(|e| Error::Database(format!("database connection failed: {}", e)))?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_row(row: PgRow) -> Result<ArticleRow> {
    let decode = |e: sqlx::Error| Error::Database(format!("failed to decode news_articles row: {}", e));
    Ok(ArticleRow {
        published_at: row.try_get("published_at").map_err(decode)?,
        source: row.try_get("source").map_err(decode)?,
        sentiment_label: row.try_get("sentiment_label").map_err(decode)?,
        title: row.try_get("title").map_err(decode)?,
        description: row.try_get("description").map_err(decode)?,
    })
}

#[async_trait]
impl ArticleTable for PgArticleTable {
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("failed to ensure news_articles table: {}", e)))?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM news_articles")
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("failed to clear news_articles table: {}", e)))?;
        Ok(())
    }

    async fn insert(&self, article: &ScoredArticle) -> Result<()> {
        let published_at = parse_published_at(&article.article.published_at)?;
        sqlx::query(
            "INSERT INTO news_articles (published_at, source, sentiment_label, title, description) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(published_at)
        .bind(&article.article.source)
        .bind(article.sentiment_label.as_str())
        .bind(&article.article.title)
        .bind(&article.article.description)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(format!("failed to insert article: {}", e)))?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ArticleRow>> {
        let rows = sqlx::query(
            "SELECT published_at, source, sentiment_label, title, description FROM news_articles",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Database(format!("failed to query news_articles: {}", e)))?;

        rows.into_iter().map(decode_row).collect()
    }
}
