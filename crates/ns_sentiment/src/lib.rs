pub mod analyzers;

pub use analyzers::{create_analyzer, LexiconAnalyzer};

pub mod prelude {
    pub use super::analyzers::create_analyzer;
    pub use ns_core::{Result, Sentiment, SentimentAnalyzer, SentimentScores};
}
