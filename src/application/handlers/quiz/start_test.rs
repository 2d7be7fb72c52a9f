//! StartTestHandler - Command handler for starting or resuming a test.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::quiz::{Question, QuestionCatalog, QuizError, TestProgress, TestSession};
use crate::ports::SessionStore;

/// Command to start a test.
///
/// With `resume` set and a stored session under that id, the stored session
/// is returned unchanged instead of creating a new one.
#[derive(Debug, Clone, Default)]
pub struct StartTestCommand {
    pub resume: Option<SessionId>,
}

#[derive(Debug, Clone)]
pub struct StartTestResult {
    pub session: TestSession,
    pub progress: TestProgress,
    pub current_question: Option<Question>,
    pub resumed: bool,
}

/// Handler for starting tests.
pub struct StartTestHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<QuestionCatalog>,
}

impl StartTestHandler {
    pub fn new(store: Arc<dyn SessionStore>, catalog: Arc<QuestionCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: StartTestCommand) -> Result<StartTestResult, QuizError> {
        if let Some(id) = cmd.resume {
            if self.store.exists(id).await? {
                let session = self.store.load(id).await?;
                tracing::debug!(session_id = %id, "Resuming stored test");
                return Ok(self.result(session, true));
            }
        }

        let session = match cmd.resume {
            Some(id) => TestSession::with_id(id),
            None => TestSession::new(),
        };
        self.store.save(&session).await?;
        tracing::info!(session_id = %session.id(), "Started test");

        Ok(self.result(session, false))
    }

    fn result(&self, session: TestSession, resumed: bool) -> StartTestResult {
        StartTestResult {
            progress: session.progress(&self.catalog),
            current_question: session.current_question(&self.catalog).cloned(),
            session,
            resumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::foundation::AnswerId;

    fn handler(store: &InMemorySessionStore) -> StartTestHandler {
        StartTestHandler::new(
            Arc::new(store.clone()),
            Arc::new(QuestionCatalog::builtin().clone()),
        )
    }

    #[tokio::test]
    async fn starts_fresh_session_on_first_question() {
        let store = InMemorySessionStore::new();
        let result = handler(&store).handle(StartTestCommand::default()).await.unwrap();

        assert!(!result.resumed);
        assert_eq!(result.progress.current_question, 1);
        assert_eq!(result.progress.total_questions, 18);
        assert_eq!(result.current_question.unwrap().id.as_str(), "q1");
        assert!(store.exists(result.session.id()).await.unwrap());
    }

    #[tokio::test]
    async fn resumes_stored_session() {
        let store = InMemorySessionStore::new();
        let catalog = QuestionCatalog::builtin();
        let mut session = TestSession::new();
        session
            .answer_current(catalog, &AnswerId::new("q1a1").unwrap())
            .unwrap();
        store.save(&session).await.unwrap();

        let result = handler(&store)
            .handle(StartTestCommand {
                resume: Some(session.id()),
            })
            .await
            .unwrap();

        assert!(result.resumed);
        assert_eq!(result.session, session);
        assert_eq!(result.progress.answered_questions, 1);
        assert_eq!(result.current_question.unwrap().id.as_str(), "q2");
    }

    #[tokio::test]
    async fn unknown_resume_id_starts_under_that_id() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();

        let result = handler(&store)
            .handle(StartTestCommand { resume: Some(id) })
            .await
            .unwrap();

        assert!(!result.resumed);
        assert_eq!(result.session.id(), id);
    }
}
