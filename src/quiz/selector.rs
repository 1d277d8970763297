//! Question selection and answer shuffling.

use std::sync::Arc;

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::data::QuestionStore;
use crate::models::{Question, NUM_OPTIONS};
use crate::QuizError;

/// Draws randomized quizzes from a [`QuestionStore`].
///
/// The selector holds no mutable state; all randomness comes from the
/// generator passed to each call.
#[derive(Clone)]
pub struct QuizSelector {
    store: Arc<QuestionStore>,
}

impl QuizSelector {
    pub fn new(store: Arc<QuestionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    /// Pick up to `count` distinct questions and shuffle each one's answers.
    ///
    /// `categories` restricts the pool to questions whose category name is
    /// listed. If nothing matches, the full bank is used instead. The count
    /// is clamped to the size of the pool.
    pub fn get_random<R: Rng + ?Sized>(
        &self,
        count: usize,
        categories: Option<&[String]>,
        rng: &mut R,
    ) -> Result<Vec<Question>, QuizError> {
        if count == 0 {
            return Err(QuizError::InvalidArgument(
                "count must be at least 1".to_string(),
            ));
        }

        let all = self.store.load_all()?;
        let pool = filter_by_categories(&all, categories);

        let amount = count.min(pool.len());
        let quiz: Vec<Question> = index::sample(rng, pool.len(), amount)
            .iter()
            .map(|i| shuffle_answers(pool[i], rng))
            .collect();

        tracing::debug!(
            requested = count,
            returned = quiz.len(),
            pool = pool.len(),
            "selected questions"
        );

        Ok(quiz)
    }
}

fn filter_by_categories<'a>(all: &'a [Question], categories: Option<&[String]>) -> Vec<&'a Question> {
    let Some(names) = categories.filter(|names| !names.is_empty()) else {
        return all.iter().collect();
    };

    let filtered: Vec<&Question> = all
        .iter()
        .filter(|q| names.iter().any(|name| name == q.category().as_str()))
        .collect();

    if filtered.is_empty() {
        tracing::warn!(?names, "no questions match categories, using full bank");
        return all.iter().collect();
    }

    filtered
}

/// Copy of `question` with its options uniformly permuted.
///
/// The returned question keeps the same id, and its correct index points at
/// the same answer text as before.
pub fn shuffle_answers<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Question {
    let mut order: [usize; NUM_OPTIONS] = std::array::from_fn(|i| i);
    order.shuffle(rng);

    // `order` is a permutation of 0..NUM_OPTIONS by construction.
    question
        .with_options(order)
        .unwrap_or_else(|| question.clone())
}
