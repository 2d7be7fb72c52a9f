//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the quiz domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;
mod upcaster;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnswerId, QuestionId, SessionId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
pub use upcaster::{UpcastError, Upcaster, UpcasterRegistry};
