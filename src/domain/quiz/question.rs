//! Questions and their answer options.

use serde::{Deserialize, Serialize};

use super::{Dimension, Pole};
use crate::domain::foundation::{AnswerId, QuestionId, ValidationError};

/// Largest magnitude an answer value may carry.
pub const MAX_ANSWER_MAGNITUDE: f64 = 2.0;

/// Fewest answer options a question may offer.
pub const MIN_ANSWERS_PER_QUESTION: usize = 2;

/// Most answer options a question may offer.
pub const MAX_ANSWERS_PER_QUESTION: usize = 3;

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
    pub value: f64,
    pub pole: Pole,
}

impl Answer {
    pub fn new(id: AnswerId, text: impl Into<String>, value: f64, pole: Pole) -> Self {
        Self {
            id,
            text: text.into(),
            value,
            pole,
        }
    }
}

/// A catalog question measuring a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub dimension: Dimension,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Builds a question and checks its structural rules.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        dimension: Dimension,
        answers: Vec<Answer>,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id,
            prompt: prompt.into(),
            dimension,
            answers,
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks answer count, value range, and that every pole belongs to the
    /// question's dimension.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.prompt", self.id)));
        }

        let count = self.answers.len();
        if !(MIN_ANSWERS_PER_QUESTION..=MAX_ANSWERS_PER_QUESTION).contains(&count) {
            return Err(ValidationError::out_of_range(
                format!("{}.answers", self.id),
                MIN_ANSWERS_PER_QUESTION as f64,
                MAX_ANSWERS_PER_QUESTION as f64,
                count as f64,
            ));
        }

        for answer in &self.answers {
            if !answer.value.is_finite() || answer.value.abs() > MAX_ANSWER_MAGNITUDE {
                return Err(ValidationError::out_of_range(
                    format!("{}.value", answer.id),
                    -MAX_ANSWER_MAGNITUDE,
                    MAX_ANSWER_MAGNITUDE,
                    answer.value,
                ));
            }
            if !self.dimension.contains(answer.pole) {
                return Err(ValidationError::invalid_format(
                    format!("{}.pole", answer.id),
                    format!(
                        "pole {} does not belong to dimension {}",
                        answer.pole, self.dimension
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Looks up one of this question's answers.
    pub fn answer(&self, answer_id: &AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| &a.id == answer_id)
    }
}
