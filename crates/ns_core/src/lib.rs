pub mod analyzer;
pub mod clean;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod storage;

pub use analyzer::SentimentAnalyzer;
pub use clean::clean;
pub use config::{DbConfig, NewsApiConfig};
pub use error::Error;
pub use fetch::HeadlineSource;
pub use model::{ArticleRecord, ArticleRow, ScoredArticle, Sentiment, SentimentScores};
pub use storage::{ArticleTable, ObjectStore};

pub type Result<T> = std::result::Result<T, Error>;
