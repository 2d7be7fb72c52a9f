//! The sixteen four-letter type codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::quiz::{Dimension, Pole};
use crate::domain::scoring::ScoringError;

/// A personality type code, one letter per dimension in EI, SN, TF, JP order.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeCode {
    // Analysts
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    // Diplomats
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    // Sentinels
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    // Explorers
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl TypeCode {
    pub fn all() -> &'static [TypeCode] {
        &[
            TypeCode::INTJ,
            TypeCode::INTP,
            TypeCode::ENTJ,
            TypeCode::ENTP,
            TypeCode::INFJ,
            TypeCode::INFP,
            TypeCode::ENFJ,
            TypeCode::ENFP,
            TypeCode::ISTJ,
            TypeCode::ISFJ,
            TypeCode::ESTJ,
            TypeCode::ESFJ,
            TypeCode::ISTP,
            TypeCode::ISFP,
            TypeCode::ESTP,
            TypeCode::ESFP,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCode::INTJ => "INTJ",
            TypeCode::INTP => "INTP",
            TypeCode::ENTJ => "ENTJ",
            TypeCode::ENTP => "ENTP",
            TypeCode::INFJ => "INFJ",
            TypeCode::INFP => "INFP",
            TypeCode::ENFJ => "ENFJ",
            TypeCode::ENFP => "ENFP",
            TypeCode::ISTJ => "ISTJ",
            TypeCode::ISFJ => "ISFJ",
            TypeCode::ESTJ => "ESTJ",
            TypeCode::ESFJ => "ESFJ",
            TypeCode::ISTP => "ISTP",
            TypeCode::ISFP => "ISFP",
            TypeCode::ESTP => "ESTP",
            TypeCode::ESFP => "ESFP",
        }
    }

    /// Builds a code from one pole per dimension, in EI, SN, TF, JP order.
    ///
    /// Returns `None` if a pole sits in the wrong position.
    pub fn from_poles(poles: [Pole; 4]) -> Option<TypeCode> {
        let in_order = poles
            .iter()
            .zip(Dimension::all())
            .all(|(pole, dim)| pole.dimension() == *dim);
        if !in_order {
            return None;
        }
        let code: String = poles.iter().map(Pole::as_char).collect();
        code.parse().ok()
    }

    /// The letter this code holds for `dimension`.
    pub fn pole_for(&self, dimension: Dimension) -> Pole {
        self.poles()[dimension.index()]
    }

    pub fn poles(&self) -> [Pole; 4] {
        let mut poles = [Pole::E, Pole::N, Pole::F, Pole::P];
        for (slot, c) in poles.iter_mut().zip(self.as_str().chars()) {
            if let Some(pole) = Pole::from_char(c) {
                *slot = pole;
            }
        }
        poles
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeCode::all()
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ScoringError::unknown_type_code(s))
    }
}

impl TryFrom<String> for TypeCode {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.as_str().to_string()
    }
}
