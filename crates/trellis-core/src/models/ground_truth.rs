use serde::{Deserialize, Serialize};

use super::triple::{Schema, Triple};
use crate::question::QuestionType;

/// What the evaluator grades a ranked list against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    pub expected_answer: String,
    /// The source fact the question was generated from, when known.
    /// Without it, grading falls back to token overlap.
    pub reference_triple: Option<Triple>,
}

impl GroundTruth {
    pub fn new(expected_answer: impl Into<String>, reference_triple: Option<Triple>) -> Self {
        Self {
            expected_answer: expected_answer.into(),
            reference_triple,
        }
    }
}

/// One question/answer record from an evaluation dataset.
///
/// Records missing `question` or `answer` are skipped at load time;
/// everything else is optional and tolerated (`MalformedGroundTruth`
/// degrades to zero relevance, it never aborts a batch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
    /// Wire tag: "sub", "obj", "rel", or "type". Datasets also carry
    /// "unknown" and free-form values here.
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub triple: Option<Triple>,
    #[serde(default)]
    pub schema: Option<Schema>,
    #[serde(default)]
    pub source_text: String,
    /// Name of the dataset file this record was loaded from.
    #[serde(default)]
    pub source_file: String,
}

impl QaRecord {
    /// The declared question type, when the record carries a known tag.
    ///
    /// Unknown or missing tags return `None`; callers classify the
    /// question text instead.
    pub fn declared_type(&self) -> Option<QuestionType> {
        match self.question_type.as_deref() {
            Some("sub") => Some(QuestionType::Subject),
            Some("obj") => Some(QuestionType::Object),
            Some("rel") => Some(QuestionType::Relationship),
            Some("type") => Some(QuestionType::Type),
            _ => None,
        }
    }

    /// The ground truth this record defines.
    pub fn ground_truth(&self) -> GroundTruth {
        GroundTruth {
            expected_answer: self.answer.clone(),
            reference_triple: self.triple.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_from_dataset_json() {
        let json = r#"{
            "question": "Who is the leader of Belgium?",
            "answer": "Philippe of Belgium",
            "question_type": "sub",
            "triple": ["Belgium", "leader", "Philippe_of_Belgium"],
            "schema": ["Country", "leader", "Royalty"]
        }"#;
        let rec: QaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.declared_type(), Some(QuestionType::Subject));
        let gt = rec.ground_truth();
        assert_eq!(gt.expected_answer, "Philippe of Belgium");
        assert_eq!(
            gt.reference_triple,
            Some(Triple::new("Belgium", "leader", "Philippe_of_Belgium"))
        );
    }

    #[test]
    fn unknown_question_type_yields_none() {
        let json = r#"{"question": "q", "answer": "a", "question_type": "unknown"}"#;
        let rec: QaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.declared_type(), None);
        assert!(rec.triple.is_none());
        assert!(rec.schema.is_none());
    }
}
