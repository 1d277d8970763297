//! Quiz selection.

mod selector;

pub use selector::{shuffle_answers, QuizSelector};
