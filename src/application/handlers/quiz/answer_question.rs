//! AnswerQuestionHandler - Command handler for recording a selection.

use std::sync::Arc;

use crate::domain::foundation::{AnswerId, QuestionId, SessionId};
use crate::domain::quiz::{QuestionCatalog, QuizError, TestProgress, TestSession, UserAnswer};
use crate::ports::SessionStore;

/// Command to answer a question.
///
/// Without `question_id` the question under the cursor is answered and the
/// cursor advances, unless it is on the last question.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    pub session_id: SessionId,
    pub question_id: Option<QuestionId>,
    pub answer_id: AnswerId,
}

#[derive(Debug, Clone)]
pub struct AnswerQuestionResult {
    pub session: TestSession,
    pub progress: TestProgress,
    /// The selection this answer replaced, if any.
    pub replaced: Option<UserAnswer>,
}

pub struct AnswerQuestionHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<QuestionCatalog>,
}

impl AnswerQuestionHandler {
    pub fn new(store: Arc<dyn SessionStore>, catalog: Arc<QuestionCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        cmd: AnswerQuestionCommand,
    ) -> Result<AnswerQuestionResult, QuizError> {
        let mut session = self.store.load(cmd.session_id).await?;

        let replaced = match &cmd.question_id {
            Some(question_id) => {
                session.answer_question(&self.catalog, question_id, &cmd.answer_id)?
            }
            None => session.answer_current(&self.catalog, &cmd.answer_id)?,
        };

        self.store.save(&session).await?;

        Ok(AnswerQuestionResult {
            progress: session.progress(&self.catalog),
            session,
            replaced,
        })
    }
}
