//! Dimension pairs and their poles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four personality axes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    EI,
    SN,
    TF,
    JP,
}

impl Dimension {
    /// All dimensions in type-code order.
    pub fn all() -> &'static [Dimension] {
        &[Dimension::EI, Dimension::SN, Dimension::TF, Dimension::JP]
    }

    /// Position of this dimension in a type code.
    pub fn index(&self) -> usize {
        match self {
            Dimension::EI => 0,
            Dimension::SN => 1,
            Dimension::TF => 2,
            Dimension::JP => 3,
        }
    }

    /// The two poles of this axis, as written in the pair name.
    pub fn poles(&self) -> [Pole; 2] {
        match self {
            Dimension::EI => [Pole::E, Pole::I],
            Dimension::SN => [Pole::S, Pole::N],
            Dimension::TF => [Pole::T, Pole::F],
            Dimension::JP => [Pole::J, Pole::P],
        }
    }

    /// The pole a non-negative score resolves to.
    ///
    /// This is E for EI but N, F and P for the others: the score sign only
    /// lines up with the pair name on the EI axis.
    pub fn non_negative_pole(&self) -> Pole {
        match self {
            Dimension::EI => Pole::E,
            Dimension::SN => Pole::N,
            Dimension::TF => Pole::F,
            Dimension::JP => Pole::P,
        }
    }

    /// The pole a negative score resolves to.
    pub fn negative_pole(&self) -> Pole {
        match self {
            Dimension::EI => Pole::I,
            Dimension::SN => Pole::S,
            Dimension::TF => Pole::T,
            Dimension::JP => Pole::J,
        }
    }

    /// Resolves a signed score to a pole. Zero goes to `non_negative_pole`.
    pub fn pole_for_score(&self, score: f64) -> Pole {
        if score >= 0.0 {
            self.non_negative_pole()
        } else {
            self.negative_pole()
        }
    }

    /// Returns true if `pole` belongs to this axis.
    pub fn contains(&self, pole: Pole) -> bool {
        pole.dimension() == *self
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::EI => "EI",
            Dimension::SN => "SN",
            Dimension::TF => "TF",
            Dimension::JP => "JP",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EI" => Ok(Dimension::EI),
            "SN" => Ok(Dimension::SN),
            "TF" => Ok(Dimension::TF),
            "JP" => Ok(Dimension::JP),
            other => Err(ValidationError::invalid_format(
                "dimension",
                format!("'{}' is not one of EI, SN, TF, JP", other),
            )),
        }
    }
}

/// A single letter within a dimension pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Pole {
    /// All eight poles, grouped by dimension.
    pub fn all() -> &'static [Pole] {
        &[
            Pole::E,
            Pole::I,
            Pole::S,
            Pole::N,
            Pole::T,
            Pole::F,
            Pole::J,
            Pole::P,
        ]
    }

    /// The axis this pole belongs to.
    pub fn dimension(&self) -> Dimension {
        match self {
            Pole::E | Pole::I => Dimension::EI,
            Pole::S | Pole::N => Dimension::SN,
            Pole::T | Pole::F => Dimension::TF,
            Pole::J | Pole::P => Dimension::JP,
        }
    }

    /// Multiplier applied to an answer value tagged with this pole.
    ///
    /// E, N, F and P add their value to the dimension sum; I, S, T and J
    /// subtract it.
    pub fn sign(&self) -> f64 {
        match self {
            Pole::E | Pole::N | Pole::F | Pole::P => 1.0,
            Pole::I | Pole::S | Pole::T | Pole::J => -1.0,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Pole::E => 'E',
            Pole::I => 'I',
            Pole::S => 'S',
            Pole::N => 'N',
            Pole::T => 'T',
            Pole::F => 'F',
            Pole::J => 'J',
            Pole::P => 'P',
        }
    }

    pub fn from_char(c: char) -> Option<Pole> {
        match c {
            'E' => Some(Pole::E),
            'I' => Some(Pole::I),
            'S' => Some(Pole::S),
            'N' => Some(Pole::N),
            'T' => Some(Pole::T),
            'F' => Some(Pole::F),
            'J' => Some(Pole::J),
            'P' => Some(Pole::P),
            _ => None,
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Pole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Pole::from_char), chars.next()) {
            (Some(pole), None) => Ok(pole),
            _ => Err(ValidationError::invalid_format(
                "pole",
                format!("'{}' is not one of E, I, S, N, T, F, J, P", s),
            )),
        }
    }
}
