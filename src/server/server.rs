//! HTTP server wiring.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::data::QuestionStore;
use crate::quiz::QuizSelector;

use super::handlers;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub selector: QuizSelector,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/questions", get(handlers::get_questions))
        .with_state(state)
}

/// Run the quiz server until Ctrl-C.
///
/// The question bank is loaded before binding so a bad dataset fails fast.
pub async fn run(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(QuestionStore::new(&config.questions_path));
    let loaded = store.load_all()?.len();
    let selector = QuizSelector::new(store);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, questions = loaded, "server listening");

    serve(listener, selector).await?;
    Ok(())
}

/// Serve the API on an already bound listener.
pub async fn serve(listener: TcpListener, selector: QuizSelector) -> std::io::Result<()> {
    axum::serve(listener, router(AppState { selector }))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
