pub mod extract;
pub mod handler;
pub mod load;

pub use extract::{ExtractOutcome, ExtractStage, BATCH_PREFIX};
pub use handler::{run_extract, run_load, Response};
pub use load::{LoadOutcome, LoadStage};

pub mod prelude {
    pub use super::{ExtractStage, LoadStage, Response};
    pub use ns_core::{Result, ScoredArticle};
}
