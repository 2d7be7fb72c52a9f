//! ScoringEngine - turns an answer list into a result.
//!
//! Scoring always replays the full answer list. There is no incremental
//! update path, so a resumed session scores exactly like an uninterrupted one.

use super::{
    AnswerSetValidator, ConfidenceEstimator, DimensionScore, QuizResult, ScoreAccumulator,
    ScoringError, TypeResolver, ValidationReport,
};
use crate::domain::personality::TypeDirectory;
use crate::domain::quiz::{Dimension, UserAnswer};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    resolver: TypeResolver,
    confidence: ConfidenceEstimator,
    validator: AnswerSetValidator,
}

impl ScoringEngine {
    pub fn new(
        resolver: TypeResolver,
        confidence: ConfidenceEstimator,
        validator: AnswerSetValidator,
    ) -> Self {
        Self {
            resolver,
            confidence,
            validator,
        }
    }

    pub fn validator(&self) -> &AnswerSetValidator {
        &self.validator
    }

    /// Scores any answer list, including an empty one.
    pub fn score(&self, answers: &[UserAnswer], directory: &dyn TypeDirectory) -> QuizResult {
        let scores = ScoreAccumulator::from_answers(answers).normalize();
        let type_code = self.resolver.resolve(&scores, directory);
        let confidence = self.confidence.estimate(&scores);
        let dimension_scores = Dimension::all()
            .iter()
            .map(|d| DimensionScore::from_score(*d, scores.get(*d)))
            .collect();

        QuizResult {
            type_code,
            scores,
            confidence,
            dimension_scores,
        }
    }

    /// Validates, applies the completeness gate, then scores.
    ///
    /// Issues other than low completeness are logged and returned in the
    /// report; they do not stop scoring, but the answers they name are left
    /// out of the scores.
    pub fn finalize(
        &self,
        answers: &[UserAnswer],
        directory: &dyn TypeDirectory,
    ) -> Result<(QuizResult, ValidationReport), ScoringError> {
        let report = self.validator.validate(answers);
        self.finalize_with_report(answers, report, directory)
    }

    /// Like `finalize`, with a report the caller already produced.
    pub fn finalize_with_report(
        &self,
        answers: &[UserAnswer],
        report: ValidationReport,
        directory: &dyn TypeDirectory,
    ) -> Result<(QuizResult, ValidationReport), ScoringError> {
        if let Err(err) = self.validator.ensure_complete(&report) {
            tracing::warn!(
                completeness = report.completeness.value(),
                required = self.validator.threshold().value(),
                "Refusing to finalize incomplete test"
            );
            return Err(err);
        }

        if !report.is_valid {
            tracing::warn!(issues = ?report.messages(), "Test validation failed");
        }

        let accepted: Vec<UserAnswer> = answers
            .iter()
            .filter(|answer| report.accepts(answer))
            .cloned()
            .collect();
        if accepted.len() < answers.len() {
            tracing::debug!(
                skipped = answers.len() - accepted.len(),
                "Scoring without malformed answers"
            );
        }

        Ok((self.score(&accepted, directory), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AnswerId, Percentage, QuestionId};
    use crate::domain::personality::{PersonalityCatalog, TypeCode};
    use crate::domain::quiz::{Pole, QuestionCatalog};
    use crate::domain::scoring::Strength;

    fn answer(q: &str, value: f64, pole: Pole) -> UserAnswer {
        UserAnswer::new(
            QuestionId::new(q).unwrap(),
            AnswerId::new(format!("{q}a1")).unwrap(),
            value,
            pole,
        )
    }

    fn directory() -> &'static PersonalityCatalog {
        PersonalityCatalog::builtin()
    }

    #[test]
    fn maximal_second_letters_give_enfp_with_full_confidence() {
        let answers = vec![
            answer("q1", 2.0, Pole::E),
            answer("q2", 2.0, Pole::E),
            answer("q3", 2.0, Pole::N),
            answer("q4", 2.0, Pole::N),
            answer("q5", 2.0, Pole::F),
            answer("q6", 2.0, Pole::F),
            answer("q7", 2.0, Pole::P),
            answer("q8", 2.0, Pole::P),
        ];

        let result = ScoringEngine::default().score(&answers, directory());

        assert_eq!(result.type_code, TypeCode::ENFP);
        assert_eq!(result.scores.ei, 2.0);
        assert_eq!(result.scores.sn, 2.0);
        assert_eq!(result.scores.tf, 2.0);
        assert_eq!(result.scores.jp, 2.0);
        assert_eq!(result.confidence, Percentage::HUNDRED);
        assert!(result
            .dimension_scores
            .iter()
            .all(|d| d.strength == Strength::VeryClear));
    }

    #[test]
    fn single_negative_introvert_answer_resolves_to_e() {
        let result = ScoringEngine::default().score(&[answer("q1", -2.0, Pole::I)], directory());
        assert_eq!(result.scores.ei, 2.0);
        assert_eq!(result.dimension(Dimension::EI).unwrap().preference, Pole::E);
        assert_eq!(result.type_code, TypeCode::ENFP);
    }

    #[test]
    fn empty_answers_score_as_enfp_with_zero_confidence() {
        let result = ScoringEngine::default().score(&[], directory());
        assert_eq!(result.type_code, TypeCode::ENFP);
        assert_eq!(result.confidence, Percentage::ZERO);
        assert_eq!(result.dimension_scores.len(), 4);
        assert!(result
            .dimension_scores
            .iter()
            .all(|d| d.strength == Strength::Slight));
    }

    #[test]
    fn finalize_refuses_incomplete_answers() {
        let answers: Vec<UserAnswer> = (0..12)
            .map(|i| answer(&format!("q{}", i + 1), 1.0, Pole::all()[i % 8]))
            .collect();

        let err = ScoringEngine::default()
            .finalize(&answers, directory())
            .unwrap_err();

        assert!(matches!(
            err,
            ScoringError::IncompleteInput { completeness, .. } if completeness.value() == 67
        ));
    }

    #[test]
    fn finalize_proceeds_with_issues_above_threshold() {
        // Only E and S are covered, so pole coverage fails.
        let answers: Vec<UserAnswer> = (0..14)
            .map(|i| {
                let pole = if i % 2 == 0 { Pole::E } else { Pole::S };
                answer(&format!("q{}", i + 1), 2.0, pole)
            })
            .collect();

        let (result, report) = ScoringEngine::default()
            .finalize(&answers, directory())
            .unwrap();

        assert!(!report.is_valid);
        assert!(report.meets_threshold);
        assert_eq!(result.type_code, TypeCode::ESFP);
    }

    #[test]
    fn malformed_answer_cannot_lift_completeness_over_gate() {
        let catalog = QuestionCatalog::builtin();
        let mut answers: Vec<UserAnswer> = catalog
            .questions()
            .iter()
            .take(12)
            .map(|q| UserAnswer::from_selection(q, &q.answers[0]))
            .collect();
        // q13 measures TF
        answers.push(answer("q13", 9.0, Pole::E));
        answers.push(answer("q99", 1.0, Pole::P));

        let engine = ScoringEngine::default();
        let report = engine.validator().validate_against(&answers, catalog);
        assert_eq!(report.completeness.value(), 67);

        let err = engine
            .finalize_with_report(&answers, report, directory())
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::incomplete(Percentage::new(67), Percentage::new(70))
        );
    }

    #[test]
    fn finalize_scores_only_accepted_answers() {
        let catalog = QuestionCatalog::builtin();
        let mut answers: Vec<UserAnswer> = catalog
            .questions()
            .iter()
            .take(15)
            .map(|q| UserAnswer::from_selection(q, &q.answers[0]))
            .collect();
        answers[12].value = 9.0;
        answers[12].pole = Pole::E;

        let engine = ScoringEngine::default();
        let report = engine.validator().validate_against(&answers, catalog);
        let (result, report) = engine
            .finalize_with_report(&answers, report, directory())
            .unwrap();

        assert_eq!(report.completeness.value(), 78);
        assert!(!report.is_valid);
        for d in Dimension::all() {
            assert!(result.scores.get(*d).abs() <= 2.0, "{} out of range", d);
        }
        assert_eq!(result.scores.ei, 2.0);
    }

    #[test]
    fn dimension_scores_follow_type_code_order() {
        let result = ScoringEngine::default().score(&[], directory());
        let order: Vec<Dimension> = result.dimension_scores.iter().map(|d| d.dimension).collect();
        assert_eq!(order, Dimension::all().to_vec());
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = ScoringEngine::default().score(&[answer("q1", 2.0, Pole::E)], directory());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["typeCode"], "ENFP");
        assert_eq!(json["scores"]["EI"], 2.0);
        assert_eq!(json["confidence"], 25);
        assert_eq!(json["dimensionScores"][0]["strength"], "very clear");
    }
}
