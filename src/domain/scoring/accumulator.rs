//! Score accumulation and normalization.
//!
//! Each answer contributes `+value` to its dimension when its pole is E, N, F
//! or P and `-value` when it is I, S, T or J. The normalized score of a
//! dimension is the sum of its contributions divided by how many answers it
//! received, or zero when it received none.

use super::ScoreVector;
use crate::domain::quiz::{Dimension, UserAnswer};

/// Signed contributions collected per dimension.
///
/// Contributions are summed in a canonical order, so the same multiset of
/// answers always yields bit-identical sums regardless of answer order.
#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    contributions: [Vec<f64>; 4],
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an accumulator from a complete answer list.
    pub fn from_answers<'a, I>(answers: I) -> Self
    where
        I: IntoIterator<Item = &'a UserAnswer>,
    {
        let mut acc = Self::new();
        for answer in answers {
            acc.add(answer);
        }
        acc
    }

    pub fn add(&mut self, answer: &UserAnswer) {
        let dimension = answer.pole.dimension();
        self.contributions[dimension.index()].push(answer.pole.sign() * answer.value);
    }

    /// Sum of signed contributions for a dimension.
    pub fn sum(&self, dimension: Dimension) -> f64 {
        let mut values = self.contributions[dimension.index()].clone();
        values.sort_by(f64::total_cmp);
        values.iter().sum()
    }

    /// Number of answers that landed in a dimension.
    pub fn count(&self, dimension: Dimension) -> usize {
        self.contributions[dimension.index()].len()
    }

    /// Average signed contribution for a dimension; zero when unanswered.
    pub fn average(&self, dimension: Dimension) -> f64 {
        match self.count(dimension) {
            0 => 0.0,
            n => self.sum(dimension) / n as f64,
        }
    }

    pub fn normalize(&self) -> ScoreVector {
        let mut scores = ScoreVector::ZERO;
        for dimension in Dimension::all() {
            scores.set(*dimension, self.average(*dimension));
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AnswerId, QuestionId};
    use crate::domain::quiz::Pole;

    fn answer(q: &str, value: f64, pole: Pole) -> UserAnswer {
        UserAnswer::new(
            QuestionId::new(q).unwrap(),
            AnswerId::new(format!("{q}-a")).unwrap(),
            value,
            pole,
        )
    }

    #[test]
    fn sign_follows_pole() {
        let answers = vec![answer("q1", 2.0, Pole::E), answer("q2", 2.0, Pole::J)];
        let acc = ScoreAccumulator::from_answers(&answers);
        assert_eq!(acc.sum(Dimension::EI), 2.0);
        assert_eq!(acc.sum(Dimension::JP), -2.0);
        assert_eq!(acc.count(Dimension::EI), 1);
        assert_eq!(acc.count(Dimension::SN), 0);
    }

    #[test]
    fn negative_value_on_negative_pole_leans_positive() {
        let answers = vec![answer("q1", -2.0, Pole::I)];
        let scores = ScoreAccumulator::from_answers(&answers).normalize();
        assert_eq!(scores.ei, 2.0);
    }

    #[test]
    fn average_divides_by_count() {
        let answers = vec![
            answer("q1", 2.0, Pole::T),
            answer("q2", 0.0, Pole::T),
            answer("q3", -2.0, Pole::F),
            answer("q4", 2.0, Pole::F),
        ];
        let scores = ScoreAccumulator::from_answers(&answers).normalize();
        // (-2 + 0 - 2 + 2) / 4
        assert!((scores.tf - -0.5).abs() < 1e-12);
    }

    #[test]
    fn unanswered_dimension_is_zero() {
        let answers = vec![answer("q1", 1.0, Pole::N)];
        let scores = ScoreAccumulator::from_answers(&answers).normalize();
        assert_eq!(scores.ei, 0.0);
        assert_eq!(scores.tf, 0.0);
        assert_eq!(scores.jp, 0.0);
        assert_eq!(scores.sn, 1.0);
    }

    #[test]
    fn reordering_answers_keeps_sums_identical() {
        let forward = vec![
            answer("q1", 0.1, Pole::E),
            answer("q2", 0.2, Pole::E),
            answer("q3", 0.3, Pole::I),
            answer("q4", 1.7, Pole::E),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let a = ScoreAccumulator::from_answers(&forward).normalize();
        let b = ScoreAccumulator::from_answers(&backward).normalize();
        assert_eq!(a.ei.to_bits(), b.ei.to_bits());
    }
}
