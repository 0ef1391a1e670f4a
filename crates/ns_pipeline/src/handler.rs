use chrono::Utc;
use ns_core::model::TIMESTAMP_FORMAT;
use serde_json::{json, Value};
use tracing::error;

use crate::extract::{ExtractOutcome, ExtractStage};
use crate::load::{LoadOutcome, LoadStage};

/// What a stage invocation hands back to whatever triggered it. 200 covers
/// success and empty outcomes; every caught failure becomes 500.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status_code: u16,
    pub body: Value,
}

fn render_time() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

fn failure(err: ns_core::Error) -> Response {
    error!("run failed: {}", err);
    Response {
        status_code: 500,
        body: json!({
            "error": err.to_string(),
            "timestamp": render_time(),
        }),
    }
}

/// Run the extract stage once, folding any failure into the envelope.
pub async fn run_extract(stage: &ExtractStage) -> Response {
    match stage.run().await {
        Ok(ExtractOutcome::NoArticles) => Response {
            status_code: 200,
            body: json!({
                "message": "No articles found from the news API",
                "timestamp": render_time(),
            }),
        },
        Ok(ExtractOutcome::Stored { key, count }) => Response {
            status_code: 200,
            body: json!({
                "message": "News fetched, sentiment analysis completed, and results stored",
                "stored_file": key,
                "article_count": count,
                "timestamp": render_time(),
            }),
        },
        Err(err) => failure(err),
    }
}

/// Run the load stage once, folding any failure into the envelope.
pub async fn run_load(stage: &LoadStage) -> Response {
    match stage.run().await {
        Ok(LoadOutcome::NoFiles) => Response {
            status_code: 200,
            body: json!({
                "message": "No batch files pending",
                "timestamp": render_time(),
            }),
        },
        Ok(LoadOutcome::Loaded {
            processed_files,
            inserted,
        }) => Response {
            status_code: 200,
            body: json!({
                "message": "Successfully inserted articles into the database",
                "processed_files": processed_files,
                "db_inserted": inserted,
                "timestamp": render_time(),
            }),
        },
        Err(err) => failure(err),
    }
}
