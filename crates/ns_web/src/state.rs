use std::sync::Arc;
use std::time::{Duration, Instant};

use ns_core::{ArticleRow, ArticleTable, Result};
use tokio::sync::RwLock;

/// Renders within this window reuse the previous query's rows.
pub const CACHE_TTL: Duration = Duration::from_secs(600);

struct CachedRows {
    fetched_at: Instant,
    rows: Arc<Vec<ArticleRow>>,
}

pub struct AppState {
    table: Arc<dyn ArticleTable>,
    cache: RwLock<Option<CachedRows>>,
    ttl: Duration,
}

impl AppState {
    pub fn new(table: Arc<dyn ArticleTable>) -> Self {
        Self::with_ttl(table, CACHE_TTL)
    }

    pub fn with_ttl(table: Arc<dyn ArticleTable>, ttl: Duration) -> Self {
        Self {
            table,
            cache: RwLock::new(None),
            ttl,
        }
    }

    /// Rows for display, most recent first.
    pub async fn rows(&self) -> Result<Arc<Vec<ArticleRow>>> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < self.ttl {
                    return Ok(cached.rows.clone());
                }
            }
        }

        let mut rows = self.table.fetch_all().await?;
        rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        let rows = Arc::new(rows);
        *self.cache.write().await = Some(CachedRows {
            fetched_at: Instant::now(),
            rows: rows.clone(),
        });
        Ok(rows)
    }
}
