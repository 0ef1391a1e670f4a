use serde::{Deserialize, Serialize};

/// Timestamp layout used everywhere a time crosses a boundary: article
/// timestamps after normalization, batch-file names (with `_` separators)
/// and envelope render times.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Normalized `YYYY-MM-DD HH:MM:SS`, reformatted from the source's
    /// ISO-8601-with-Z form at fetch time.
    pub published_at: String,
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Aggregate polarity in [-1, 1].
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Label policy over the compound score, boundaries inclusive.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Sentiment::Positive
        } else if compound <= -0.05 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An [`ArticleRecord`] with its sentiment attached; one JSON object per
/// article inside a batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: ArticleRecord,
    pub sentiment_label: Sentiment,
    pub sentiment_scores: SentimentScores,
}

/// One row read back from the `news_articles` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub published_at: chrono::NaiveDateTime,
    pub source: String,
    pub sentiment_label: String,
    pub title: String,
    pub description: String,
}
