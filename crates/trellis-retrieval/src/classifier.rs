//! Question type classification from surface patterns: keyword
//! short-circuits, phrase tables, prefix heuristics.

use trellis_core::QuestionType;

/// Phrase patterns mapped to question types, scanned in order.
const TYPE_PHRASES: &[(QuestionType, &[&str])] = &[
    (
        QuestionType::Subject,
        &[
            "who wrote",
            "who is the",
            "who founded",
            "who directed",
            "who created",
            "who leads",
            "what wrote",
            "what is the",
            "what founded",
            "what created",
        ],
    ),
    (
        QuestionType::Object,
        &[
            "what did",
            "where is",
            "what does",
            "what is the",
            "what country",
            "what organization",
            "what book",
            "what movie",
            "what company",
        ],
    ),
    (
        QuestionType::Relationship,
        &[
            "what is the relationship",
            "how is",
            "how are",
            "what connects",
            "what links",
            "relationship between",
        ],
    ),
    (
        QuestionType::Type,
        &[
            "what type of entity",
            "what kind of",
            "what category",
            "what type is",
            "what sort of",
            "entity type",
        ],
    ),
];

/// Classifies questions into the four answerable types.
pub struct QuestionClassifier {
    phrases: &'static [(QuestionType, &'static [&'static str])],
}

impl QuestionClassifier {
    pub fn new() -> Self {
        Self {
            phrases: TYPE_PHRASES,
        }
    }

    /// Use replacement phrase tables (scanned in the given order).
    pub fn with_phrases(phrases: &'static [(QuestionType, &'static [&'static str])]) -> Self {
        Self { phrases }
    }

    /// Classify a question.
    ///
    /// Priority: relationship/between keywords, then type/kind/category
    /// keywords, then the phrase tables in declaration order, then
    /// who/what-did/where-is prefixes. Anything else is Subject.
    pub fn classify(&self, question: &str) -> QuestionType {
        let q = question.to_lowercase();

        if q.contains("relationship") || q.contains("between") {
            return QuestionType::Relationship;
        }
        if q.contains("type") || q.contains("kind") || q.contains("category") {
            return QuestionType::Type;
        }

        for &(question_type, phrases) in self.phrases {
            if phrases.iter().any(|p| q.contains(p)) {
                return question_type;
            }
        }

        if q.starts_with("who ") {
            return QuestionType::Subject;
        }
        if q.starts_with("what did") || q.starts_with("where is") {
            return QuestionType::Object;
        }

        QuestionType::Subject
    }
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_canonical_questions() {
        let classifier = QuestionClassifier::new();
        assert_eq!(
            classifier.classify("Who wrote A Fistful of Dollars?"),
            QuestionType::Subject
        );
        assert_eq!(
            classifier.classify("What did John Doe write?"),
            QuestionType::Object
        );
        assert_eq!(
            classifier.classify("What is the relationship between John Doe and A Fistful of Dollars?"),
            QuestionType::Relationship
        );
        assert_eq!(
            classifier.classify("What type of entity is Belgium?"),
            QuestionType::Type
        );
    }

    #[test]
    fn relationship_keywords_win_over_type_keywords() {
        let classifier = QuestionClassifier::new();
        // Contains both "kind" and "between"; relationship is checked first.
        assert_eq!(
            classifier.classify("What kind of link is between Belgium and Philippe?"),
            QuestionType::Relationship
        );
    }

    #[test]
    fn type_keywords_win_over_phrase_tables() {
        let classifier = QuestionClassifier::new();
        // "who is the" would hit the Subject table, but "category" wins.
        assert_eq!(
            classifier.classify("Who is the category holder?"),
            QuestionType::Type
        );
    }

    #[test]
    fn phrase_tables_scan_in_declaration_order() {
        let classifier = QuestionClassifier::new();
        // "what is the" appears in both Subject and Object tables;
        // Subject comes first.
        assert_eq!(
            classifier.classify("What is the capital of Belgium?"),
            QuestionType::Subject
        );
    }

    #[test]
    fn prefix_heuristics_apply_when_no_phrase_matches() {
        let classifier = QuestionClassifier::new();
        assert_eq!(classifier.classify("Who runs Belgium?"), QuestionType::Subject);
        assert_eq!(
            classifier.classify("Where is Amsterdam Airport Schiphol?"),
            QuestionType::Object
        );
    }

    #[test]
    fn unmatched_questions_default_to_subject() {
        let classifier = QuestionClassifier::new();
        assert_eq!(classifier.classify("Tell me about Belgium."), QuestionType::Subject);
        assert_eq!(classifier.classify(""), QuestionType::Subject);
    }

    #[test]
    fn custom_tables_replace_the_defaults() {
        const CUSTOM: &[(QuestionType, &[&str])] =
            &[(QuestionType::Object, &["which place"])];
        let classifier = QuestionClassifier::with_phrases(CUSTOM);
        assert_eq!(
            classifier.classify("Which place is Schiphol in?"),
            QuestionType::Object
        );
        // Default Subject phrases are gone; prefix heuristics still hold.
        assert_eq!(classifier.classify("Who runs Belgium?"), QuestionType::Subject);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let classifier = QuestionClassifier::new();
        assert_eq!(
            classifier.classify("WHAT TYPE OF ENTITY IS BELGIUM?"),
            QuestionType::Type
        );
    }
}
