use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};

use crate::render;
use crate::AppState;

pub async fn dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.rows().await {
        Ok(rows) => Html(render::page(&rows)).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::error_page(&err.to_string())),
        )
            .into_response(),
    }
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.rows().await {
        Ok(rows) => Json(rows.as_ref().clone()).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use ns_core::{ArticleRecord, ArticleTable, ScoredArticle, Sentiment, SentimentScores};
    use ns_storage::MemoryTable;
    use tower::util::ServiceExt;

    async fn seeded_state() -> AppState {
        let table = Arc::new(MemoryTable::new());
        table.ensure_schema().await.unwrap();
        table
            .insert(&ScoredArticle {
                article: ArticleRecord {
                    published_at: "2026-08-05 10:30:00".to_string(),
                    source: "AP".to_string(),
                    title: "Markets rally".to_string(),
                    description: "Stocks climbed.".to_string(),
                },
                sentiment_label: Sentiment::Positive,
                sentiment_scores: SentimentScores {
                    compound: 0.6,
                    positive: 0.5,
                    negative: 0.0,
                    neutral: 0.5,
                },
            })
            .await
            .unwrap();
        AppState::new(table)
    }

    #[tokio::test]
    async fn dashboard_renders_the_table() {
        let app = crate::create_app(seeded_state().await);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("News Sentiment Dashboard"));
        assert!(html.contains("Markets rally"));
        assert!(html.contains("background-color: green"));
    }

    #[tokio::test]
    async fn api_returns_rows_as_json() {
        let app = crate::create_app(seeded_state().await);
        let response = app
            .oneshot(Request::builder().uri("/api/articles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(rows[0]["sentiment_label"], "Positive");
    }
}
