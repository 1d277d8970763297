mod loader;

pub use loader::{
    load_questions_from_json, parse_questions, LoadError, QuestionStore, DEFAULT_QUESTIONS_PATH,
};
