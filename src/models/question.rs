use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NUM_OPTIONS: usize = 4;
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Topic a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    History,
    Scheme,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::History, Category::Scheme];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::History => "History",
            Category::Scheme => "Scheme",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// A single dataset entry as it appears on disk, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub q: String,
    pub a: Vec<String>,
    pub correct: i64,
    #[serde(rename = "type")]
    pub category: String,
    pub expl: String,
    #[serde(default)]
    pub difficulty: Option<i64>,
}

/// A validated trivia question.
///
/// Instances only come out of [`Question::try_from`] on a [`QuestionRecord`]
/// or out of [`Question::with_options`], so `correct_index` always points
/// into `options` and the options are always distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: String,
    #[serde(rename = "q")]
    text: String,
    #[serde(rename = "a")]
    options: [String; NUM_OPTIONS],
    #[serde(rename = "correct")]
    correct_index: usize,
    #[serde(rename = "type")]
    category: Category,
    #[serde(rename = "expl")]
    explanation: String,
    difficulty: u8,
}

impl Question {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; NUM_OPTIONS] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Copy of this question with the options reordered.
    ///
    /// `order[i]` is the index in the current options of the answer that
    /// lands at position `i`. Returns `None` if `order` is not a permutation.
    pub fn with_options(&self, order: [usize; NUM_OPTIONS]) -> Option<Question> {
        let mut seen = [false; NUM_OPTIONS];
        for &i in &order {
            if i >= NUM_OPTIONS || seen[i] {
                return None;
            }
            seen[i] = true;
        }

        let options = order.map(|i| self.options[i].clone());
        let correct_index = order.iter().position(|&i| i == self.correct_index)?;

        Some(Question {
            id: self.id.clone(),
            text: self.text.clone(),
            options,
            correct_index,
            category: self.category,
            explanation: self.explanation.clone(),
            difficulty: self.difficulty,
        })
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = String;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let label = record.id.as_deref().unwrap_or(record.q.as_str()).to_string();

        let options: [String; NUM_OPTIONS] = record.a.try_into().map_err(|a: Vec<String>| {
            format!(
                "question '{}' has {} options, expected {}",
                label,
                a.len(),
                NUM_OPTIONS
            )
        })?;

        for i in 0..NUM_OPTIONS {
            if options[i + 1..].contains(&options[i]) {
                return Err(format!(
                    "question '{}' repeats the option '{}'",
                    label, options[i]
                ));
            }
        }

        let correct_index = usize::try_from(record.correct)
            .ok()
            .filter(|&i| i < NUM_OPTIONS)
            .ok_or_else(|| {
                format!(
                    "question '{}' has correct index {}, expected 0..={}",
                    label,
                    record.correct,
                    NUM_OPTIONS - 1
                )
            })?;

        let category = record
            .category
            .parse::<Category>()
            .map_err(|e| format!("question '{}': {}", label, e))?;

        let difficulty = match record.difficulty {
            None => DEFAULT_DIFFICULTY,
            Some(d) => u8::try_from(d)
                .ok()
                .filter(|d| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(d))
                .ok_or_else(|| {
                    format!(
                        "question '{}' has difficulty {}, expected {}..={}",
                        label, d, MIN_DIFFICULTY, MAX_DIFFICULTY
                    )
                })?,
        };

        Ok(Question {
            id: record.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            text: record.q,
            options,
            correct_index,
            category,
            explanation: record.expl,
            difficulty,
        })
    }
}
