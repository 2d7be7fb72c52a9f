//! Question catalog - the fixed questionnaire.
//!
//! The built-in catalog is embedded from `data/questions.yaml` and parsed
//! once on first use. Alternate catalogs can be loaded from a string or a
//! file path; every load runs the same structural checks.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{Answer, Dimension, Question};
use crate::domain::foundation::{AnswerId, QuestionId, ValidationError};

const BUILTIN_QUESTIONS: &str = include_str!("../../../data/questions.yaml");

static BUILTIN: Lazy<QuestionCatalog> = Lazy::new(|| {
    QuestionCatalog::from_yaml_str(BUILTIN_QUESTIONS)
        .expect("embedded question catalog must be valid")
});

/// Errors raised while loading a static catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid catalog entry: {0}")]
    Invalid(#[from] ValidationError),

    #[error("duplicate id in catalog: {0}")]
    DuplicateId(String),

    #[error("catalog contains no entries")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    estimated_minutes: Option<u32>,
    questions: Vec<Question>,
}

/// Ordered, immutable list of questions.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    version: Option<String>,
    estimated_minutes: Option<u32>,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The embedded travel questionnaire.
    pub fn builtin() -> &'static QuestionCatalog {
        &BUILTIN
    }

    /// Builds a catalog from already-constructed questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        Self::checked(None, None, questions)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(yaml)?;
        Self::checked(doc.version, doc.estimated_minutes, doc.questions)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    fn checked(
        version: Option<String>,
        estimated_minutes: Option<u32>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut question_ids = HashSet::new();
        let mut answer_ids = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !question_ids.insert(question.id.clone()) {
                return Err(CatalogError::DuplicateId(question.id.to_string()));
            }
            for answer in &question.answers {
                if !answer_ids.insert(answer.id.clone()) {
                    return Err(CatalogError::DuplicateId(answer.id.to_string()));
                }
            }
        }

        Ok(Self {
            version,
            estimated_minutes,
            questions,
        })
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn estimated_minutes(&self) -> Option<u32> {
        self.estimated_minutes
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn by_index(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn index_of(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    pub fn by_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.dimension == dimension)
    }

    /// Resolves a (question, answer) pair, reporting whichever id is unknown.
    pub fn find_answer(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> Result<(&Question, &Answer), ValidationError> {
        let question = self
            .get(question_id)
            .ok_or_else(|| ValidationError::unknown_reference("question", question_id.as_str()))?;
        let answer = question
            .answer(answer_id)
            .ok_or_else(|| ValidationError::unknown_reference("answer", answer_id.as_str()))?;
        Ok((question, answer))
    }
}
