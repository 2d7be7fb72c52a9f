//! Domain layer containing the quiz rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `quiz` - Questions, recorded answers and test sessions
//! - `personality` - Type codes, travel profiles and sharing
//! - `scoring` - Pure scoring, type resolution and answer validation

pub mod foundation;
pub mod personality;
pub mod quiz;
pub mod scoring;
