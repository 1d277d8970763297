use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::models::{Question, QuestionRecord};

pub const DEFAULT_QUESTIONS_PATH: &str = "data/questions.json";

/// Error type for loading the question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be read.
    #[error("questions file unavailable: {}: {source}", .path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dataset was read but failed parsing or validation.
    #[error("questions data is corrupt: {reason}")]
    DataCorrupt { reason: String },
}

impl LoadError {
    fn corrupt(reason: impl Into<String>) -> Self {
        LoadError::DataCorrupt {
            reason: reason.into(),
        }
    }
}

/// Parse and validate a JSON dataset.
///
/// The whole dataset is rejected on the first invalid record.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(json).map_err(|e| LoadError::corrupt(e.to_string()))?;

    let questions = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            Question::try_from(record).map_err(|e| LoadError::corrupt(format!("record {}: {}", i, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_bank(&questions)?;
    Ok(questions)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(&json_content)
}

fn validate_bank(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::corrupt("dataset must contain at least one question"));
    }

    let mut ids = HashSet::with_capacity(questions.len());
    for q in questions {
        if !ids.insert(q.id()) {
            return Err(LoadError::corrupt(format!("duplicate question id '{}'", q.id())));
        }
    }

    Ok(())
}

enum Source {
    File(PathBuf),
    Preloaded,
}

/// Read-only question bank, loaded at most once.
pub struct QuestionStore {
    source: Source,
    questions: OnceCell<Arc<[Question]>>,
}

impl QuestionStore {
    /// Store backed by a JSON file, read on the first [`QuestionStore::load_all`].
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            source: Source::File(path.into()),
            questions: OnceCell::new(),
        }
    }

    /// Store over questions that are already in memory.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, LoadError> {
        validate_bank(&questions)?;
        Ok(Self {
            source: Source::Preloaded,
            questions: OnceCell::with_value(questions.into()),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            Source::File(path) => Some(path.as_path()),
            Source::Preloaded => None,
        }
    }

    /// The full question bank.
    ///
    /// A failed load leaves the cache empty so the next call reads again.
    pub fn load_all(&self) -> Result<Arc<[Question]>, LoadError> {
        self.questions
            .get_or_try_init(|| {
                let Source::File(path) = &self.source else {
                    return Err(LoadError::corrupt("preloaded question store is empty"));
                };
                let questions = load_questions_from_json(path)?;
                tracing::info!(count = questions.len(), path = %path.display(), "loaded questions");
                Ok(Arc::from(questions))
            })
            .map(Arc::clone)
    }
}
