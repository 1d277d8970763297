//! HTTP API.
//!
//! Provides the axum router that exposes the quiz selector.

mod error;
mod handlers;
mod server;

pub use error::ApiError;
pub use handlers::{parse_categories, QuestionsQuery, QuestionsResponse};
pub use server::{router, run, serve, AppState};
