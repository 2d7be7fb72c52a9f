//! Quiz command and query handlers.

mod answer_question;
mod resolve_shared_result;
mod start_test;

pub use answer_question::{AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult};
pub use reset_test::{ResetTestCommand, ResetTestHandler, ResetTestResult};
pub use resolve_shared_result::{
    ResolveSharedResultHandler, ResolveSharedResultQuery, ResolveSharedResultResult,
};
pub use start_test::{StartTestCommand, StartTestHandler, StartTestResult};
pub use submit_test::{SubmitTestCommand, SubmitTestHandler, SubmitTestResult};
