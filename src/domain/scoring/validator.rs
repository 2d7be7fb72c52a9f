//! Answer-set validation and the completeness gate.
//!
//! Validation collects issues as data. Only the completeness gate is a hard
//! stop: below the threshold a result must not be finalized.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use super::ScoringError;
use crate::domain::foundation::{Percentage, QuestionId};
use crate::domain::quiz::{Dimension, Pole, QuestionCatalog, UserAnswer, MAX_ANSWER_MAGNITUDE};

/// Default number of questions in a full run.
pub const DEFAULT_EXPECTED_QUESTIONS: usize = 18;

/// Default minimum completeness before a result may be finalized.
pub const DEFAULT_COMPLETENESS_THRESHOLD: u8 = 70;

/// One problem found in an answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerIssue {
    NoAnswers,
    /// Poles that no answer was tagged with.
    MissingPoles { poles: Vec<Pole> },
    /// Value outside the allowed range or not a finite number.
    InvalidValue { question_id: QuestionId, value: f64 },
    /// Pole that does not belong to the question's dimension.
    PoleMismatch {
        question_id: QuestionId,
        pole: Pole,
        dimension: Dimension,
    },
    UnknownQuestion { question_id: QuestionId },
}

impl AnswerIssue {
    pub fn message(&self) -> String {
        match self {
            AnswerIssue::NoAnswers => "No answers provided".to_string(),
            AnswerIssue::MissingPoles { poles } => {
                let letters: Vec<String> = poles.iter().map(|p| p.to_string()).collect();
                format!("Missing dimensions: {}", letters.join(", "))
            }
            AnswerIssue::InvalidValue { question_id, value } => {
                format!("Answer to '{}' has invalid value {}", question_id, value)
            }
            AnswerIssue::PoleMismatch {
                question_id,
                pole,
                dimension,
            } => format!(
                "Answer to '{}' is tagged {} but the question measures {}",
                question_id, pole, dimension
            ),
            AnswerIssue::UnknownQuestion { question_id } => {
                format!("Answer refers to unknown question '{}'", question_id)
            }
        }
    }

    /// The question a per-answer issue refers to.
    pub fn question_id(&self) -> Option<&QuestionId> {
        match self {
            AnswerIssue::InvalidValue { question_id, .. }
            | AnswerIssue::PoleMismatch { question_id, .. }
            | AnswerIssue::UnknownQuestion { question_id } => Some(question_id),
            AnswerIssue::NoAnswers | AnswerIssue::MissingPoles { .. } => None,
        }
    }

    /// The issue as a `MalformedAnswer` error, when it concerns one answer.
    pub fn as_malformed(&self) -> Option<ScoringError> {
        match self {
            AnswerIssue::InvalidValue { question_id, value } => Some(ScoringError::malformed(
                question_id.as_str(),
                format!("value {} outside [-{max}, {max}]", value, max = MAX_ANSWER_MAGNITUDE),
            )),
            AnswerIssue::PoleMismatch {
                question_id,
                pole,
                dimension,
            } => Some(ScoringError::malformed(
                question_id.as_str(),
                format!("pole {} does not belong to {}", pole, dimension),
            )),
            AnswerIssue::UnknownQuestion { question_id } => Some(ScoringError::malformed(
                question_id.as_str(),
                "question is not in the catalog",
            )),
            AnswerIssue::NoAnswers | AnswerIssue::MissingPoles { .. } => None,
        }
    }
}

impl fmt::Display for AnswerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of validating an answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub completeness: Percentage,
    pub issues: Vec<AnswerIssue>,
    pub is_valid: bool,
    /// Whether completeness reached the gate threshold.
    pub meets_threshold: bool,
}

impl ValidationReport {
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(AnswerIssue::message).collect()
    }

    pub fn malformed_answers(&self) -> Vec<ScoringError> {
        self.issues.iter().filter_map(AnswerIssue::as_malformed).collect()
    }

    /// False when any issue was raised against this answer's question.
    pub fn accepts(&self, answer: &UserAnswer) -> bool {
        !self
            .issues
            .iter()
            .any(|issue| issue.question_id() == Some(&answer.question_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerSetValidator {
    expected_total: usize,
    threshold: Percentage,
    max_magnitude: f64,
}

impl Default for AnswerSetValidator {
    fn default() -> Self {
        Self {
            expected_total: DEFAULT_EXPECTED_QUESTIONS,
            threshold: Percentage::new(DEFAULT_COMPLETENESS_THRESHOLD),
            max_magnitude: MAX_ANSWER_MAGNITUDE,
        }
    }
}

impl AnswerSetValidator {
    pub fn new(expected_total: usize, threshold: Percentage, max_magnitude: f64) -> Self {
        Self {
            expected_total,
            threshold,
            max_magnitude,
        }
    }

    pub fn with_expected_total(mut self, expected_total: usize) -> Self {
        self.expected_total = expected_total;
        self
    }

    pub fn expected_total(&self) -> usize {
        self.expected_total
    }

    pub fn threshold(&self) -> Percentage {
        self.threshold
    }

    /// Checks pole coverage, values and completeness.
    ///
    /// Only answers without a per-answer issue count as answered or cover a
    /// pole.
    pub fn validate(&self, answers: &[UserAnswer]) -> ValidationReport {
        self.collect(answers, self.expected_total, None)
    }

    /// Like `validate`, but also checks each answer against its question.
    ///
    /// The expected total becomes the catalog size. Answers to unknown
    /// questions or tagged with a foreign pole do not count as answered.
    pub fn validate_against(
        &self,
        answers: &[UserAnswer],
        catalog: &QuestionCatalog,
    ) -> ValidationReport {
        self.collect(answers, catalog.len(), Some(catalog))
    }

    fn collect(
        &self,
        answers: &[UserAnswer],
        expected_total: usize,
        catalog: Option<&QuestionCatalog>,
    ) -> ValidationReport {
        if answers.is_empty() {
            return self.report(Percentage::ZERO, vec![AnswerIssue::NoAnswers]);
        }

        let mut answer_issues = Vec::new();
        let mut answered: HashSet<&QuestionId> = HashSet::new();
        let mut present: HashSet<Pole> = HashSet::new();
        for answer in answers {
            let found = self.answer_issues(answer, catalog);
            if found.is_empty() {
                answered.insert(&answer.question_id);
                present.insert(answer.pole);
            }
            answer_issues.extend(found);
        }

        let mut issues = Vec::new();
        let missing: Vec<Pole> = Pole::all()
            .iter()
            .copied()
            .filter(|p| !present.contains(p))
            .collect();
        if !missing.is_empty() {
            issues.push(AnswerIssue::MissingPoles { poles: missing });
        }
        issues.extend(answer_issues);

        let completeness = Percentage::from_ratio(answered.len(), expected_total);
        self.report(completeness, issues)
    }

    fn answer_issues(
        &self,
        answer: &UserAnswer,
        catalog: Option<&QuestionCatalog>,
    ) -> Vec<AnswerIssue> {
        let mut issues = Vec::new();

        if !answer.value.is_finite() || answer.value.abs() > self.max_magnitude {
            issues.push(AnswerIssue::InvalidValue {
                question_id: answer.question_id.clone(),
                value: answer.value,
            });
        }

        if let Some(catalog) = catalog {
            match catalog.get(&answer.question_id) {
                None => issues.push(AnswerIssue::UnknownQuestion {
                    question_id: answer.question_id.clone(),
                }),
                Some(question) if !question.dimension.contains(answer.pole) => {
                    issues.push(AnswerIssue::PoleMismatch {
                        question_id: answer.question_id.clone(),
                        pole: answer.pole,
                        dimension: question.dimension,
                    })
                }
                Some(_) => {}
            }
        }

        issues
    }

    /// Refuses to proceed when completeness is under the threshold.
    pub fn ensure_complete(&self, report: &ValidationReport) -> Result<(), ScoringError> {
        if report.completeness < self.threshold {
            return Err(ScoringError::incomplete(report.completeness, self.threshold));
        }
        Ok(())
    }

    fn report(&self, completeness: Percentage, issues: Vec<AnswerIssue>) -> ValidationReport {
        let meets_threshold = completeness >= self.threshold;
        ValidationReport {
            completeness,
            is_valid: issues.is_empty() && meets_threshold,
            issues,
            meets_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AnswerId;

    fn answer(q: &str, value: f64, pole: Pole) -> UserAnswer {
        UserAnswer::new(
            QuestionId::new(q).unwrap(),
            AnswerId::new(format!("{q}a1")).unwrap(),
            value,
            pole,
        )
    }

    fn covering(count: usize) -> Vec<UserAnswer> {
        (0..count)
            .map(|i| answer(&format!("q{}", i + 1), 1.0, Pole::all()[i % 8]))
            .collect()
    }

    #[test]
    fn empty_answers_report_no_answers() {
        let report = AnswerSetValidator::default().validate(&[]);
        assert_eq!(report.completeness, Percentage::ZERO);
        assert_eq!(report.issues, vec![AnswerIssue::NoAnswers]);
        assert!(!report.is_valid);
        assert_eq!(report.messages(), vec!["No answers provided".to_string()]);
    }

    #[test]
    fn full_coverage_is_valid() {
        let report = AnswerSetValidator::default().validate(&covering(18));
        assert_eq!(report.completeness, Percentage::HUNDRED);
        assert!(report.issues.is_empty());
        assert!(report.is_valid);
    }

    #[test]
    fn twelve_of_eighteen_is_sixty_seven_percent_and_gated() {
        let validator = AnswerSetValidator::default();
        let report = validator.validate(&covering(12));
        assert_eq!(report.completeness.value(), 67);
        assert!(report.issues.is_empty());
        assert!(!report.is_valid);
        assert!(!report.meets_threshold);

        let err = validator.ensure_complete(&report).unwrap_err();
        assert_eq!(
            err,
            ScoringError::incomplete(Percentage::new(67), Percentage::new(70))
        );
    }

    #[test]
    fn exactly_threshold_passes_gate() {
        let validator = AnswerSetValidator::new(10, Percentage::new(70), 2.0);
        let report = validator.validate(&covering(7));
        assert_eq!(report.completeness.value(), 70);
        assert!(validator.ensure_complete(&report).is_ok());
    }

    #[test]
    fn missing_poles_are_listed_in_order() {
        let answers = vec![answer("q1", 2.0, Pole::E), answer("q2", 2.0, Pole::N)];
        let report = AnswerSetValidator::default().validate(&answers);
        assert_eq!(
            report.issues[0],
            AnswerIssue::MissingPoles {
                poles: vec![Pole::I, Pole::S, Pole::T, Pole::F, Pole::J, Pole::P]
            }
        );
        assert_eq!(report.messages()[0], "Missing dimensions: I, S, T, F, J, P");
    }

    #[test]
    fn invalid_values_are_reported_but_not_gated() {
        let mut answers = covering(18);
        answers[0].value = 3.0;
        answers[1].value = f64::NAN;

        let validator = AnswerSetValidator::default();
        let report = validator.validate(&answers);
        assert_eq!(report.issues.len(), 2);
        assert!(!report.is_valid);
        assert!(validator.ensure_complete(&report).is_ok());

        let malformed = report.malformed_answers();
        assert!(matches!(
            &malformed[0],
            ScoringError::MalformedAnswer { question_id, .. } if question_id == "q1"
        ));
    }

    #[test]
    fn invalid_values_do_not_count_as_answered() {
        let mut answers = covering(12);
        answers.push(answer("q13", 9.0, Pole::E));

        let validator = AnswerSetValidator::default();
        let report = validator.validate(&answers);
        assert_eq!(report.completeness.value(), 67);
        assert!(matches!(
            validator.ensure_complete(&report),
            Err(ScoringError::IncompleteInput { .. })
        ));
        assert!(!report.accepts(&answers[12]));
        assert!(report.accepts(&answers[0]));
    }

    #[test]
    fn mismatched_and_unknown_answers_do_not_count_against_catalog() {
        let catalog = QuestionCatalog::builtin();
        let mut answers: Vec<UserAnswer> = catalog
            .questions()
            .iter()
            .take(12)
            .map(|q| UserAnswer::from_selection(q, &q.answers[2]))
            .collect();
        // q13 measures TF
        answers.push(answer("q13", 2.0, Pole::E));
        answers.push(answer("q99", 1.0, Pole::P));

        let validator = AnswerSetValidator::default();
        let report = validator.validate_against(&answers, catalog);
        assert_eq!(report.completeness.value(), 67);
        assert_eq!(
            validator.ensure_complete(&report).unwrap_err(),
            ScoringError::incomplete(Percentage::new(67), Percentage::new(70))
        );
        assert_eq!(report.malformed_answers().len(), 2);
    }

    #[test]
    fn poles_of_rejected_answers_do_not_cover() {
        let answers = vec![answer("q1", 2.0, Pole::E), answer("q2", 5.0, Pole::I)];
        let report = AnswerSetValidator::default().validate(&answers);
        assert!(matches!(
            &report.issues[0],
            AnswerIssue::MissingPoles { poles } if poles.contains(&Pole::I)
        ));
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut answers = covering(18);
        answers[0].value = -2.0;
        answers[1].value = 2.0;
        let report = AnswerSetValidator::default().validate(&answers);
        assert!(report.is_valid);
    }

    #[test]
    fn duplicate_question_ids_count_once() {
        let mut answers = covering(18);
        answers.truncate(13);
        answers.push(answer("q1", 1.0, Pole::E));
        let report = AnswerSetValidator::default().validate(&answers);
        assert_eq!(report.completeness, Percentage::from_ratio(13, 18));
    }

    #[test]
    fn validate_against_flags_pole_mismatch_and_unknown_question() {
        let catalog = QuestionCatalog::builtin();
        let mut answers: Vec<UserAnswer> = catalog
            .questions()
            .iter()
            .map(|q| UserAnswer::from_selection(q, &q.answers[0]))
            .collect();
        // q1 measures EI
        answers[0].pole = Pole::T;
        answers.push(answer("q99", 1.0, Pole::P));

        let report = AnswerSetValidator::default().validate_against(&answers, catalog);
        assert!(report.issues.iter().any(|i| matches!(
            i,
            AnswerIssue::PoleMismatch { pole: Pole::T, dimension: Dimension::EI, .. }
        )));
        assert!(report
            .issues
            .iter()
            .any(|i| matches!(i, AnswerIssue::UnknownQuestion { question_id } if question_id.as_str() == "q99")));
        assert!(!report.is_valid);
    }
}
