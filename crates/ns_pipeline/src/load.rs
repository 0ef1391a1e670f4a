use std::sync::Arc;

use ns_core::{ArticleTable, ObjectStore, Result, ScoredArticle};
use tracing::info;

use crate::extract::BATCH_PREFIX;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Nothing pending; the table was left untouched.
    NoFiles,
    Loaded {
        processed_files: Vec<String>,
        inserted: usize,
    },
}

/// Drains every pending batch file into the destination table, replacing
/// its whole contents.
pub struct LoadStage {
    store: Arc<dyn ObjectStore>,
    table: Arc<dyn ArticleTable>,
}

impl LoadStage {
    pub fn new(store: Arc<dyn ObjectStore>, table: Arc<dyn ArticleTable>) -> Self {
        Self { store, table }
    }

    /// The table is cleared before the first insert, so a failure midway
    /// leaves it holding only the batches consumed so far; files already
    /// consumed stay deleted and later files stay pending. There is no
    /// cross-file rollback, and concurrent runs are unsafe.
    pub async fn run(&self) -> Result<LoadOutcome> {
        self.table.ensure_schema().await?;

        let keys: Vec<String> = self
            .store
            .list(BATCH_PREFIX)
            .await?
            .into_iter()
            .filter(|key| key.ends_with(".json"))
            .collect();
        if keys.is_empty() {
            info!("No batch files pending under {}", BATCH_PREFIX);
            return Ok(LoadOutcome::NoFiles);
        }
        info!("📂 {} batch files pending", keys.len());

        self.table.clear().await?;

        let mut processed_files = Vec::with_capacity(keys.len());
        let mut inserted = 0;
        for key in keys {
            let bytes = self.store.get(&key).await?;
            let articles: Vec<ScoredArticle> = serde_json::from_slice(&bytes)?;
            for article in &articles {
                self.table.insert(article).await?;
            }
            inserted += articles.len();
            self.store.delete(&key).await?;
            info!("💾 Loaded {} articles from {}", articles.len(), key);
            processed_files.push(key);
        }

        info!(
            "✅ Inserted {} rows from {} batch files",
            inserted,
            processed_files.len()
        );
        Ok(LoadOutcome::Loaded {
            processed_files,
            inserted,
        })
    }
}
