//! Recorded selections.

use serde::{Deserialize, Serialize};

use super::{Answer, Pole, Question};
use crate::domain::foundation::{AnswerId, QuestionId};

/// One user selection: the chosen answer's value and pole, keyed by question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: QuestionId,
    pub answer_id: AnswerId,
    pub value: f64,
    pub pole: Pole,
}

impl UserAnswer {
    pub fn new(question_id: QuestionId, answer_id: AnswerId, value: f64, pole: Pole) -> Self {
        Self {
            question_id,
            answer_id,
            value,
            pole,
        }
    }

    /// Records the selection of `answer` for `question`.
    pub fn from_selection(question: &Question, answer: &Answer) -> Self {
        Self {
            question_id: question.id.clone(),
            answer_id: answer.id.clone(),
            value: answer.value,
            pole: answer.pole,
        }
    }
}

/// At most one `UserAnswer` per question.
///
/// Recording a second selection for a question replaces the first in place,
/// so iteration order follows each question's first selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<UserAnswer>", into = "Vec<UserAnswer>")]
pub struct AnswerSheet {
    answers: Vec<UserAnswer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `answer`, returning the selection it replaced, if any.
    pub fn record(&mut self, answer: UserAnswer) -> Option<UserAnswer> {
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question_id == answer.question_id)
        {
            Some(existing) => Some(std::mem::replace(existing, answer)),
            None => {
                self.answers.push(answer);
                None
            }
        }
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&UserAnswer> {
        self.answers.iter().find(|a| &a.question_id == question_id)
    }

    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.get(question_id).is_some()
    }

    pub fn remove(&mut self, question_id: &QuestionId) -> Option<UserAnswer> {
        let index = self
            .answers
            .iter()
            .position(|a| &a.question_id == question_id)?;
        Some(self.answers.remove(index))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn as_slice(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserAnswer> {
        self.answers.iter()
    }
}

impl From<Vec<UserAnswer>> for AnswerSheet {
    /// Later entries for the same question win.
    fn from(answers: Vec<UserAnswer>) -> Self {
        let mut sheet = AnswerSheet::new();
        for answer in answers {
            sheet.record(answer);
        }
        sheet
    }
}

impl From<AnswerSheet> for Vec<UserAnswer> {
    fn from(sheet: AnswerSheet) -> Self {
        sheet.answers
    }
}

impl FromIterator<UserAnswer> for AnswerSheet {
    fn from_iter<T: IntoIterator<Item = UserAnswer>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
