//! # gridiron-iq
//!
//! Randomized NFL trivia served over HTTP.
//!
//! The crate is split into a read-only [`QuestionStore`], a stateless
//! [`QuizSelector`] that samples questions and shuffles their answers, and a
//! thin axum layer in [`server`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use gridiron_iq::{QuestionStore, QuizError, QuizSelector};
//!
//! fn main() -> Result<(), QuizError> {
//!     let store = Arc::new(QuestionStore::new("data/questions.json"));
//!     let selector = QuizSelector::new(store);
//!
//!     let categories = vec!["History".to_string()];
//!     let quiz = selector.get_random(4, Some(categories.as_slice()), &mut rand::rng())?;
//!     for question in &quiz {
//!         println!("{}", question.text());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
mod data;
mod models;
mod quiz;
pub mod server;

use thiserror::Error;

pub use config::ServerConfig;
pub use data::{
    load_questions_from_json, parse_questions, LoadError, QuestionStore, DEFAULT_QUESTIONS_PATH,
};
pub use models::{
    Category, Question, QuestionRecord, DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY,
    NUM_OPTIONS,
};
pub use quiz::{shuffle_answers, QuizSelector};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question bank could not be loaded.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// The caller passed an argument the selector cannot serve.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
