use async_trait::async_trait;

use crate::model::{ArticleRow, ScoredArticle};
use crate::Result;

/// Object storage holding the batch files between the extract and load runs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List object keys under a prefix, in lexicographic order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;

    /// Read an object's bytes.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Write an object in one atomic put.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Delete an object.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// The destination `news_articles` table.
#[async_trait]
pub trait ArticleTable: Send + Sync {
    /// Create the table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<()>;

    /// Delete every row.
    async fn clear(&self) -> Result<()>;

    /// Insert one article as one row.
    async fn insert(&self, article: &ScoredArticle) -> Result<()>;

    /// Read back all rows' non-id columns.
    async fn fetch_all(&self) -> Result<Vec<ArticleRow>>;
}
