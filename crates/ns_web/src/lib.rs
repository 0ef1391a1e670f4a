use std::sync::Arc;

use axum::{routing::get, Router};

pub mod handlers;
pub mod render;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/articles", get(handlers::list_articles))
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, host: &str, port: u16) -> ns_core::Result<()> {
    let app = create_app(state);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("📊 Dashboard listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use super::AppState;
    pub use ns_core::{ArticleRow, Result};
}
