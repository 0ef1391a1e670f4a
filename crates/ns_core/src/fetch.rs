use async_trait::async_trait;

use crate::model::ArticleRecord;
use crate::Result;

/// A provider of current headlines, parsed into uniform records.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch the current headline snapshot. An empty vec is a valid
    /// outcome, distinct from failure.
    async fn fetch_headlines(&self) -> Result<Vec<ArticleRecord>>;
}
