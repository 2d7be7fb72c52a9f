//! Property tests for scoring, resolution and validation.

use proptest::prelude::*;

use travel_type::domain::foundation::{AnswerId, Percentage, QuestionId};
use travel_type::domain::personality::{PersonalityCatalog, TypeCode};
use travel_type::domain::quiz::{Dimension, Pole, UserAnswer};
use travel_type::domain::scoring::{
    AnswerSetValidator, ConfidenceEstimator, ScoreAccumulator, ScoreVector, ScoringEngine,
    Strength, TypeResolver,
};

fn user_answer(index: usize, pole: Pole, value: f64) -> UserAnswer {
    UserAnswer::new(
        QuestionId::new(format!("q{}", index + 1)).unwrap(),
        AnswerId::new(format!("q{}a1", index + 1)).unwrap(),
        value,
        pole,
    )
}

fn answers_strategy(max: usize) -> impl Strategy<Value = Vec<UserAnswer>> {
    prop::collection::vec((0usize..8, -2.0f64..=2.0), 0..max).prop_map(|picks| {
        picks
            .into_iter()
            .enumerate()
            .map(|(i, (pole, value))| user_answer(i, Pole::all()[pole], value))
            .collect()
    })
}

fn score_strategy() -> impl Strategy<Value = ScoreVector> {
    (-2.0f64..=2.0, -2.0f64..=2.0, -2.0f64..=2.0, -2.0f64..=2.0)
        .prop_map(|(ei, sn, tf, jp)| ScoreVector::new(ei, sn, tf, jp))
}

proptest! {
    /// Reordering answers never changes the scores
    #[test]
    fn prop_scores_are_permutation_invariant(
        (original, shuffled) in answers_strategy(30)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = ScoreAccumulator::from_answers(&original).normalize();
        let b = ScoreAccumulator::from_answers(&shuffled).normalize();
        for d in Dimension::all() {
            prop_assert_eq!(a.get(*d).to_bits(), b.get(*d).to_bits());
        }
    }

    /// Cancelling answers on every pole leave every score at zero
    #[test]
    fn prop_cancelling_answers_score_zero(picks in prop::collection::vec((0usize..8, 0.0f64..=2.0), 1..12)) {
        let mut answers = Vec::new();
        for (i, (pole, value)) in picks.into_iter().enumerate() {
            answers.push(user_answer(2 * i, Pole::all()[pole], value));
            answers.push(user_answer(2 * i + 1, Pole::all()[pole], -value));
        }

        let scores = ScoreAccumulator::from_answers(&answers).normalize();
        for d in Dimension::all() {
            prop_assert!(scores.get(*d).abs() < 1e-9);
        }
    }

    /// Every score vector resolves to one of the sixteen codes, letter by letter
    #[test]
    fn prop_resolver_is_total(scores in score_strategy()) {
        let code = TypeResolver::default().resolve(&scores, PersonalityCatalog::builtin());
        prop_assert!(TypeCode::all().contains(&code));
        for d in Dimension::all() {
            prop_assert_eq!(code.pole_for(*d), d.pole_for_score(scores.get(*d)));
        }
    }

    /// Confidence stays in range and never drops when scores grow
    #[test]
    fn prop_confidence_is_monotone(scores in score_strategy(), factor in 1.0f64..4.0) {
        let estimator = ConfidenceEstimator::default();
        let base = estimator.estimate(&scores);
        let scaled = estimator.estimate(&ScoreVector::new(
            scores.ei * factor,
            scores.sn * factor,
            scores.tf * factor,
            scores.jp * factor,
        ));
        prop_assert!(base.value() <= 100);
        prop_assert!(scaled >= base);
    }

    /// Stronger scores never get a weaker label
    #[test]
    fn prop_strength_is_monotone(a in 0.0f64..=2.0, b in 0.0f64..=2.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Strength::for_magnitude(low) <= Strength::for_magnitude(high));
    }

    /// Completeness follows the answered count and drives the gate
    #[test]
    fn prop_completeness_gate(count in 0usize..=18) {
        let answers: Vec<UserAnswer> = (0..count)
            .map(|i| user_answer(i, Pole::all()[i % 8], 1.0))
            .collect();
        let validator = AnswerSetValidator::default();
        let report = validator.validate(&answers);

        prop_assert_eq!(report.completeness, Percentage::from_ratio(count, 18));
        prop_assert_eq!(validator.ensure_complete(&report).is_ok(), report.completeness.value() >= 70);
    }

    /// Scoring any answer list, even an empty one, produces a full result
    #[test]
    fn prop_score_is_total(answers in answers_strategy(24)) {
        let result = ScoringEngine::default().score(&answers, PersonalityCatalog::builtin());
        prop_assert_eq!(result.dimension_scores.len(), 4);
        prop_assert!(result.confidence.value() <= 100);
    }
}
