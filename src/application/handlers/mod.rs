//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quiz;

pub use quiz::{
    AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult, ResetTestCommand,
    ResetTestHandler, ResetTestResult, ResolveSharedResultHandler, ResolveSharedResultQuery,
    ResolveSharedResultResult, StartTestCommand, StartTestHandler, StartTestResult,
    SubmitTestCommand, SubmitTestHandler, SubmitTestResult,
};
