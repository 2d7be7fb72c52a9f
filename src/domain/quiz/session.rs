//! TestSession - one run through the questionnaire.
//!
//! Holds navigation state and the answer sheet. The catalog is passed into
//! each operation rather than stored, so a session can be persisted and
//! replayed against the same static catalog.

use serde::{Deserialize, Serialize};

use super::{AnswerSheet, Question, QuestionCatalog, UserAnswer};
use crate::domain::foundation::{
    AnswerId, Percentage, QuestionId, SessionId, Timestamp, ValidationError,
};
use crate::domain::personality::TypeCode;

/// Progress summary for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestProgress {
    /// 1-based position of the current question.
    pub current_question: usize,
    pub total_questions: usize,
    pub answered_questions: usize,
    pub progress_percentage: Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSession {
    id: SessionId,
    current_question_index: usize,
    answers: AnswerSheet,
    completed_type: Option<TypeCode>,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl TestSession {
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            current_question_index: 0,
            answers: AnswerSheet::new(),
            completed_type: None,
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    /// Rebuilds a session from persisted parts.
    pub fn restore(
        id: SessionId,
        current_question_index: usize,
        answers: AnswerSheet,
        completed_type: Option<TypeCode>,
        started_at: Timestamp,
        completed_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            current_question_index,
            answers,
            completed_type,
            started_at,
            completed_at,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn completed_type(&self) -> Option<TypeCode> {
        self.completed_type
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed_type.is_some()
    }

    pub fn current_question<'c>(&self, catalog: &'c QuestionCatalog) -> Option<&'c Question> {
        catalog.by_index(self.current_question_index)
    }

    /// Answers the question under the cursor, then advances unless it was
    /// the last one.
    ///
    /// Returns the selection that was replaced, if the question had one.
    pub fn answer_current(
        &mut self,
        catalog: &QuestionCatalog,
        answer_id: &AnswerId,
    ) -> Result<Option<UserAnswer>, ValidationError> {
        let question = self.current_question(catalog).ok_or_else(|| {
            ValidationError::out_of_range(
                "current_question_index",
                0.0,
                catalog.len().saturating_sub(1) as f64,
                self.current_question_index as f64,
            )
        })?;
        let question_id = question.id.clone();

        let replaced = self.answer_question(catalog, &question_id, answer_id)?;
        if !self.is_last_question(catalog) {
            self.go_to_next(catalog);
        }
        Ok(replaced)
    }

    /// Records a selection for any question without moving the cursor.
    pub fn answer_question(
        &mut self,
        catalog: &QuestionCatalog,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> Result<Option<UserAnswer>, ValidationError> {
        let (question, answer) = catalog.find_answer(question_id, answer_id)?;
        let replaced = self
            .answers
            .record(UserAnswer::from_selection(question, answer));

        // A changed answer sheet invalidates any earlier result.
        self.completed_type = None;
        self.completed_at = None;

        Ok(replaced)
    }

    pub fn go_to_previous(&mut self) {
        self.current_question_index = self.current_question_index.saturating_sub(1);
    }

    pub fn go_to_next(&mut self, catalog: &QuestionCatalog) {
        let last = catalog.len().saturating_sub(1);
        self.current_question_index = (self.current_question_index + 1).min(last);
    }

    pub fn go_to(&mut self, catalog: &QuestionCatalog, index: usize) -> Result<(), ValidationError> {
        if index >= catalog.len() {
            return Err(ValidationError::out_of_range(
                "question_index",
                0.0,
                catalog.len().saturating_sub(1) as f64,
                index as f64,
            ));
        }
        self.current_question_index = index;
        Ok(())
    }

    pub fn can_go_back(&self) -> bool {
        self.current_question_index > 0
    }

    pub fn can_go_forward(&self, catalog: &QuestionCatalog) -> bool {
        self.current_question_index + 1 < catalog.len()
    }

    pub fn is_last_question(&self, catalog: &QuestionCatalog) -> bool {
        self.current_question_index + 1 == catalog.len()
    }

    pub fn has_answered_current(&self, catalog: &QuestionCatalog) -> bool {
        self.current_question(catalog)
            .map(|q| self.answers.contains(&q.id))
            .unwrap_or(false)
    }

    pub fn progress(&self, catalog: &QuestionCatalog) -> TestProgress {
        let total = catalog.len();
        TestProgress {
            current_question: self.current_question_index + 1,
            total_questions: total,
            answered_questions: self.answers.len(),
            progress_percentage: Percentage::from_ratio(self.answers.len(), total),
        }
    }

    /// Marks the session finished with the resolved type.
    pub fn complete(&mut self, type_code: TypeCode) {
        self.completed_type = Some(type_code);
        self.completed_at = Some(Timestamp::now());
    }

    /// Clears answers and navigation, keeping the session id.
    pub fn reset(&mut self) {
        *self = Self::with_id(self.id);
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
