//! Type resolution from normalized scores.

use super::ScoreVector;
use crate::domain::personality::{TypeCode, TypeDirectory};
use crate::domain::quiz::{Dimension, Pole};

/// Picks one letter per dimension and checks the result against a directory.
///
/// A score of exactly zero resolves to the second letter of the pair (E, N,
/// F or P). When the assembled code has no entry in the directory, the
/// configured fallback is returned and the anomaly is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeResolver {
    fallback: TypeCode,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self {
            fallback: TypeCode::ENFP,
        }
    }
}

impl TypeResolver {
    pub fn new(fallback: TypeCode) -> Self {
        Self { fallback }
    }

    /// The four letters chosen by the scores, before any directory check.
    pub fn letters(scores: &ScoreVector) -> [Pole; 4] {
        let mut poles = [Pole::E; 4];
        for dimension in Dimension::all() {
            poles[dimension.index()] = dimension.pole_for_score(scores.get(*dimension));
        }
        poles
    }

    pub fn resolve(&self, scores: &ScoreVector, directory: &dyn TypeDirectory) -> TypeCode {
        let letters = Self::letters(scores);
        match TypeCode::from_poles(letters) {
            Some(code) if directory.contains(code) => code,
            candidate => {
                let attempted: String = letters.iter().map(|p| p.as_char()).collect();
                tracing::warn!(
                    attempted = %attempted,
                    known = candidate.is_some(),
                    fallback = %self.fallback,
                    "Resolved type code has no profile, using fallback"
                );
                self.fallback
            }
        }
    }
}
