//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change stored sessions; the shared-result query only
//! reads the personality catalog.

pub mod handlers;

pub use handlers::{
    AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult, ResetTestCommand,
    ResetTestHandler, ResetTestResult, ResolveSharedResultHandler, ResolveSharedResultQuery,
    ResolveSharedResultResult, StartTestCommand, StartTestHandler, StartTestResult,
    SubmitTestCommand, SubmitTestHandler, SubmitTestResult,
};
