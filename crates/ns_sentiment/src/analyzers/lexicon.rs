use std::fmt;

use async_trait::async_trait;
use ns_core::{Error, Result, SentimentAnalyzer, SentimentScores};

/// VADER-backed polarity scorer. The underlying analyzer is rebuilt per
/// call; the lexicon is static, so identical input scores identically
/// across calls.
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LexiconAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconAnalyzer").finish()
    }
}

#[async_trait]
impl SentimentAnalyzer for LexiconAnalyzer {
    fn name(&self) -> &str {
        "vader"
    }

    async fn score(&self, text: &str) -> Result<SentimentScores> {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let field = |key: &str| {
            scores.get(key).copied().ok_or_else(|| {
                Error::Sentiment(format!("lexicon scorer returned no '{}' score", key))
            })
        };
        Ok(SentimentScores {
            compound: field("compound")?,
            positive: field("pos")?,
            negative: field("neg")?,
            neutral: field("neu")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::Sentiment;

    #[tokio::test]
    async fn scores_obviously_positive_text() {
        let analyzer = LexiconAnalyzer::new();
        let scores = analyzer
            .score("Wonderful news: the team achieved a great, happy outcome")
            .await
            .unwrap();
        assert!(scores.compound > 0.05);
        assert_eq!(Sentiment::from_compound(scores.compound), Sentiment::Positive);
    }

    #[tokio::test]
    async fn scores_obviously_negative_text() {
        let analyzer = LexiconAnalyzer::new();
        let scores = analyzer
            .score("Horrible disaster kills hope, terrible tragic losses mount")
            .await
            .unwrap();
        assert!(scores.compound < -0.05);
        assert_eq!(Sentiment::from_compound(scores.compound), Sentiment::Negative);
    }

    #[tokio::test]
    async fn proportions_are_in_range() {
        let analyzer = LexiconAnalyzer::new();
        let scores = analyzer.score("The committee met on Tuesday.").await.unwrap();
        for value in [scores.positive, scores.negative, scores.neutral] {
            assert!((0.0..=1.0).contains(&value));
        }
        assert!((-1.0..=1.0).contains(&scores.compound));
    }

    #[tokio::test]
    async fn deterministic_for_identical_input() {
        let analyzer = LexiconAnalyzer::new();
        let first = analyzer.score("Stocks rally after upbeat earnings").await.unwrap();
        let second = analyzer.score("Stocks rally after upbeat earnings").await.unwrap();
        assert_eq!(first, second);
    }
}
