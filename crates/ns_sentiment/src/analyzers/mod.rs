use std::sync::Arc;

use ns_core::SentimentAnalyzer;

pub mod lexicon;

pub use lexicon::LexiconAnalyzer;

/// Default analyzer used by the pipeline.
pub fn create_analyzer() -> Arc<dyn SentimentAnalyzer> {
    Arc::new(LexiconAnalyzer::new())
}
