//! Quiz module - the questionnaire and a user's run through it.
//!
//! - `dimension` - The four axes and their eight poles
//! - `question` - Questions and answer options
//! - `catalog` - The static, validated question list
//! - `user_answer` - Recorded selections, one per question
//! - `session` - Navigation and answer collection for one test run
//! - `snapshot` - Versioned persistence format for sessions
//! - `errors` - Errors surfaced by session operations

mod catalog;
mod dimension;
mod errors;
mod question;
mod session;
mod snapshot;
mod user_answer;

pub use catalog::{CatalogError, QuestionCatalog};
pub use dimension::{Dimension, Pole};
pub use errors::QuizError;
pub use question::{
    Answer, Question, MAX_ANSWERS_PER_QUESTION, MAX_ANSWER_MAGNITUDE, MIN_ANSWERS_PER_QUESTION,
};
pub use session::{TestProgress, TestSession};
pub use snapshot::{SessionSnapshot, CURRENT_SNAPSHOT_VERSION, LEGACY_SNAPSHOT_VERSION};
pub use user_answer::{AnswerSheet, UserAnswer};
