mod question;

pub use question::{
    Category, Question, QuestionRecord, DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY,
    NUM_OPTIONS,
};
