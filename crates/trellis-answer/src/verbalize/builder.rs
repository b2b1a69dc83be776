//! Reason/Knowledge chain construction, one shape per question type.

use trellis_core::models::{CandidateItem, ReasoningChain};
use trellis_core::question::QuestionType;

use super::templates;

/// Sentinel chain returned when retrieval produced nothing.
pub const NO_KNOWLEDGE: &str = "No relevant information found.";

/// Build the reasoning chain for a question type.
///
/// Empty input yields the sentinel chain; otherwise the chain always
/// carries at least one Knowledge line built from the candidates.
pub fn build_chain(question_type: QuestionType, candidates: &[CandidateItem]) -> ReasoningChain {
    if candidates.is_empty() {
        return ReasoningChain::single(NO_KNOWLEDGE);
    }
    match question_type {
        QuestionType::Subject => subject_chain(candidates),
        QuestionType::Object => object_chain(candidates),
        QuestionType::Relationship => relationship_chain(candidates),
        QuestionType::Type => type_chain(candidates),
    }
}

fn sentences(candidates: &[CandidateItem]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| templates::triple_sentence(&c.meta))
        .collect()
}

fn joined_sentences(candidates: &[CandidateItem], cap: usize) -> String {
    let all = sentences(candidates);
    all[..cap.min(all.len())].join(" ")
}

/// First-occurrence dedup; keeps the narrative deterministic.
fn distinct<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn subject_chain(candidates: &[CandidateItem]) -> ReasoningChain {
    let mut lines = Vec::new();
    lines.push(
        "Reason 1: This question is asking about the subject (who/what) that performs an action \
         or has a relationship."
            .to_string(),
    );
    lines.push(format!(
        "Knowledge 1: From the knowledge base: {}",
        joined_sentences(candidates, 3)
    ));

    let types = distinct(candidates.iter().map(|c| c.schema.subject_type.clone()));
    lines.push("Reason 2: I should identify the type of entity that could be the subject.".to_string());
    lines.push(format!(
        "Knowledge 2: The subject entities are of types: {}.",
        types.join(", ")
    ));

    lines.push(
        "Reason 3: Based on the question pattern and retrieved knowledge, I can identify the \
         subject entity."
            .to_string(),
    );
    ReasoningChain::new(lines)
}

fn object_chain(candidates: &[CandidateItem]) -> ReasoningChain {
    let mut lines = Vec::new();
    lines.push(
        "Reason 1: This question is asking about the object (what/who) that receives an action \
         or is in a relationship."
            .to_string(),
    );
    lines.push(format!(
        "Knowledge 1: From the knowledge base: {}",
        joined_sentences(candidates, 3)
    ));

    let types = distinct(candidates.iter().map(|c| c.schema.object_type.clone()));
    lines.push("Reason 2: I should identify the type of entity that could be the object.".to_string());
    lines.push(format!(
        "Knowledge 2: The object entities are of types: {}.",
        types.join(", ")
    ));

    lines.push(
        "Reason 3: Based on the question pattern and retrieved knowledge, I can identify the \
         object entity."
            .to_string(),
    );
    ReasoningChain::new(lines)
}

fn relationship_chain(candidates: &[CandidateItem]) -> ReasoningChain {
    let mut lines = Vec::new();
    lines.push(
        "Reason 1: This question is asking about the relationship or connection between two \
         entities."
            .to_string(),
    );
    lines.push(format!(
        "Knowledge 1: From the knowledge base: {}",
        joined_sentences(candidates, 3)
    ));

    let types = distinct(candidates.iter().map(|c| c.schema.relation_type.clone()));
    lines.push("Reason 2: I should consider the types of relationships involved.".to_string());
    lines.push(format!(
        "Knowledge 2: The relationship types include: {}.",
        types.join(", ")
    ));

    lines.push(
        "Reason 3: Based on the question and retrieved knowledge, I can identify the specific \
         relationship."
            .to_string(),
    );
    ReasoningChain::new(lines)
}

fn type_chain(candidates: &[CandidateItem]) -> ReasoningChain {
    let mut lines = Vec::new();
    lines.push("Reason 1: This question is asking about the type or category of an entity.".to_string());
    lines.push(format!(
        "Knowledge 1: From the knowledge base: {}",
        joined_sentences(candidates, 2)
    ));

    // "X is of type T" for both ends of every triple, deduped, capped.
    let type_statements = distinct(candidates.iter().flat_map(|c| {
        [
            format!("{} is of type {}", c.meta.sub_clean, c.schema.subject_type),
            format!("{} is of type {}", c.meta.obj_clean, c.schema.object_type),
        ]
    }));
    let capped = &type_statements[..type_statements.len().min(4)];
    lines.push(format!("Knowledge 2: Entity types: {}.", capped.join(". ")));

    let all_types = distinct(candidates.iter().flat_map(|c| {
        [
            c.schema.subject_type.clone(),
            c.schema.object_type.clone(),
        ]
    }));
    lines.push("Reason 2: I should identify the specific entity type being asked about.".to_string());
    lines.push(format!(
        "Knowledge 3: The available entity types are: {}.",
        all_types.join(", ")
    ));

    lines.push(
        "Reason 3: Based on the question context, I can determine which entity type is being \
         requested."
            .to_string(),
    );
    ReasoningChain::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::models::{Schema, Triple};

    fn mock_candidates() -> Vec<CandidateItem> {
        vec![
            CandidateItem::new(
                "t-1",
                Triple::new("John_Doe", "wrote", "A_Fistful_of_Dollars"),
                Schema::new("Person", "wrote", "Movie"),
                0.25,
                "doc-1",
            ),
            CandidateItem::new(
                "t-2",
                Triple::new("Belgium", "leader", "Philippe_of_Belgium"),
                Schema::new("Country", "leader", "Royalty"),
                0.31,
                "doc-2",
            ),
        ]
    }

    #[test]
    fn empty_candidates_yield_the_sentinel_chain() {
        let chain = build_chain(QuestionType::Subject, &[]);
        assert_eq!(chain.render(), NO_KNOWLEDGE);
    }

    #[test]
    fn subject_chain_has_the_fixed_shape() {
        let chain = build_chain(QuestionType::Subject, &mock_candidates());
        let lines = &chain.lines;

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Reason 1: This question is asking about the subject (who/what) that performs an \
             action or has a relationship."
        );
        assert_eq!(
            lines[1],
            "Knowledge 1: From the knowledge base: John Doe wrote A Fistful of Dollars. \
             Belgium is led by Philippe of Belgium."
        );
        assert_eq!(
            lines[3],
            "Knowledge 2: The subject entities are of types: Person, Country."
        );
        assert_eq!(
            lines[4],
            "Reason 3: Based on the question pattern and retrieved knowledge, I can identify \
             the subject entity."
        );
    }

    #[test]
    fn object_chain_collects_object_types() {
        let chain = build_chain(QuestionType::Object, &mock_candidates());
        assert!(chain
            .lines
            .contains(&"Knowledge 2: The object entities are of types: Movie, Royalty.".to_string()));
        assert!(chain.lines[0].contains("object (what/who)"));
    }

    #[test]
    fn relationship_chain_collects_relation_types() {
        let chain = build_chain(QuestionType::Relationship, &mock_candidates());
        assert!(chain
            .lines
            .contains(&"Knowledge 2: The relationship types include: wrote, leader.".to_string()));
    }

    #[test]
    fn type_chain_lists_entity_type_statements() {
        let chain = build_chain(QuestionType::Type, &mock_candidates());
        let lines = &chain.lines;

        assert_eq!(
            lines[2],
            "Knowledge 2: Entity types: John Doe is of type Person. A Fistful of Dollars is of \
             type Movie. Belgium is of type Country. Philippe of Belgium is of type Royalty."
        );
        assert_eq!(
            lines[4],
            "Knowledge 3: The available entity types are: Person, Movie, Country, Royalty."
        );
    }

    #[test]
    fn type_chain_caps_statements_at_four() {
        let mut candidates = mock_candidates();
        candidates.push(CandidateItem::new(
            "t-3",
            Triple::new("Agra_Airport", "runwayLength", "2743"),
            Schema::new("Airport", "runwayLength", "Number"),
            0.4,
            "doc-3",
        ));
        let chain = build_chain(QuestionType::Type, &candidates);
        let knowledge2 = chain
            .lines
            .iter()
            .find(|l| l.starts_with("Knowledge 2:"))
            .unwrap();

        // 6 statements reduced to the first 4.
        assert_eq!(knowledge2.matches(" is of type ").count(), 4);
        assert!(!knowledge2.contains("Agra Airport"));
    }

    #[test]
    fn knowledge_line_caps_at_three_sentences() {
        let mut candidates = mock_candidates();
        candidates.push(CandidateItem::new(
            "t-3",
            Triple::new("Agra_Airport", "runwayLength", "2743"),
            Schema::new("Airport", "runwayLength", "Number"),
            0.4,
            "doc-3",
        ));
        candidates.push(CandidateItem::new(
            "t-4",
            Triple::new("Belgium", "capital", "Brussels"),
            Schema::new("Country", "capital", "City"),
            0.5,
            "doc-4",
        ));

        let chain = build_chain(QuestionType::Subject, &candidates);
        let knowledge1 = &chain.lines[1];
        assert!(knowledge1.contains("2743 meters."));
        assert!(!knowledge1.contains("Brussels"));
    }

    #[test]
    fn duplicate_types_appear_once() {
        let candidates = vec![
            CandidateItem::new(
                "t-1",
                Triple::new("Belgium", "capital", "Brussels"),
                Schema::new("Country", "capital", "City"),
                0.2,
                "doc",
            ),
            CandidateItem::new(
                "t-2",
                Triple::new("France", "capital", "Paris"),
                Schema::new("Country", "capital", "City"),
                0.3,
                "doc",
            ),
        ];
        let chain = build_chain(QuestionType::Subject, &candidates);
        assert!(chain
            .lines
            .contains(&"Knowledge 2: The subject entities are of types: Country.".to_string()));
    }

    #[test]
    fn every_type_produces_a_nonempty_chain() {
        for qt in QuestionType::ALL {
            let chain = build_chain(qt, &mock_candidates());
            assert!(!chain.render().is_empty());
            assert!(chain.lines.iter().any(|l| l.starts_with("Knowledge 1:")));
        }
    }
}
