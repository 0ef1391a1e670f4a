use async_trait::async_trait;

use crate::model::SentimentScores;
use crate::Result;

/// A lexicon-based polarity scorer. Anything returning the four
/// `{compound, pos, neg, neu}` proportions can stand in; the label is
/// derived from the compound score by the caller.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    fn name(&self) -> &str;

    async fn score(&self, text: &str) -> Result<SentimentScores>;
}
