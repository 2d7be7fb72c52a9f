//! Strength labels for a single dimension.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the `moderate` band.
pub const MODERATE_THRESHOLD: f64 = 0.3;

/// Lower bound of the `clear` band.
pub const CLEAR_THRESHOLD: f64 = 0.7;

/// Lower bound of the `very clear` band.
pub const VERY_CLEAR_THRESHOLD: f64 = 1.3;

/// How decisively a dimension leans one way.
///
/// Bands are half-open on the right: [0, 0.3) slight, [0.3, 0.7) moderate,
/// [0.7, 1.3) clear, and 1.3 or above very clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strength {
    #[serde(rename = "slight")]
    Slight,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "very clear")]
    VeryClear,
}

impl Strength {
    /// Classifies a signed score by its magnitude.
    pub fn for_score(score: f64) -> Self {
        Self::for_magnitude(score.abs())
    }

    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude >= VERY_CLEAR_THRESHOLD {
            Strength::VeryClear
        } else if magnitude >= CLEAR_THRESHOLD {
            Strength::Clear
        } else if magnitude >= MODERATE_THRESHOLD {
            Strength::Moderate
        } else {
            Strength::Slight
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Slight => "slight",
            Strength::Moderate => "moderate",
            Strength::Clear => "clear",
            Strength::VeryClear => "very clear",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_upper_band() {
        assert_eq!(Strength::for_magnitude(0.3), Strength::Moderate);
        assert_eq!(Strength::for_magnitude(0.7), Strength::Clear);
        assert_eq!(Strength::for_magnitude(1.3), Strength::VeryClear);
    }

    #[test]
    fn values_just_below_boundaries_stay_in_lower_band() {
        assert_eq!(Strength::for_magnitude(0.0), Strength::Slight);
        assert_eq!(Strength::for_magnitude(0.299_999), Strength::Slight);
        assert_eq!(Strength::for_magnitude(0.699_999), Strength::Moderate);
        assert_eq!(Strength::for_magnitude(1.299_999), Strength::Clear);
        assert_eq!(Strength::for_magnitude(2.0), Strength::VeryClear);
    }

    #[test]
    fn sign_does_not_matter() {
        assert_eq!(Strength::for_score(-1.5), Strength::VeryClear);
        assert_eq!(Strength::for_score(-0.5), Strength::Moderate);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Strength::VeryClear).unwrap(),
            "\"very clear\""
        );
        assert_eq!(Strength::Slight.to_string(), "slight");
    }
}
