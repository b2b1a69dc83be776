//! Deterministic per-type answer extraction.
//!
//! Used whenever the LLM path is unavailable or fails. Each question
//! type scans the ranked candidates with its own keyword rules and
//! always lands on an answer; entity names come out with separators
//! already cleaned.

use trellis_core::models::CandidateItem;
use trellis_core::question::QuestionType;

/// Sentinel when no candidate carries an answer.
pub const NO_ANSWER: &str = "Information not available in the knowledge base.";

/// Relations naming a leadership fact.
const LEADERSHIP_RELATIONS: &[&str] = &[
    "leader",
    "president",
    "king",
    "queen",
    "prime_minister",
    "head_of_state",
    "ruler",
];

/// Question words signalling a location answer.
const LOCATION_CUES: &[&str] = &["where", "location", "located", "place"];

/// Relations naming a location fact.
const LOCATION_RELATIONS: &[&str] = &["location", "located_in", "country", "city", "region", "place"];

/// Extract an answer for the question type from ranked candidates.
pub fn extract(question: &str, question_type: QuestionType, candidates: &[CandidateItem]) -> String {
    if candidates.is_empty() {
        return NO_ANSWER.to_string();
    }
    let question_lower = question.to_lowercase();
    match question_type {
        QuestionType::Subject => extract_subject(&question_lower, candidates),
        QuestionType::Object => extract_object(&question_lower, candidates),
        QuestionType::Relationship => extract_relationship(&question_lower, candidates),
        QuestionType::Type => extract_type(&question_lower, candidates),
    }
}

/// Exact membership of the lowercased relation in a keyword set.
fn relation_in(relation: &str, set: &[&str]) -> bool {
    let rel = relation.to_lowercase();
    set.iter().any(|k| *k == rel)
}

/// Looser test: the lowercased relation contains one of the keywords.
fn relation_like(relation: &str, set: &[&str]) -> bool {
    let rel = relation.to_lowercase();
    set.iter().any(|k| rel.contains(k))
}

/// Either the raw or the cleaned entity name appears in the question.
fn mentioned(question_lower: &str, raw: &str, clean: &str) -> bool {
    question_lower.contains(&raw.to_lowercase()) || question_lower.contains(&clean.to_lowercase())
}

/// Runway facts make poor generic-object answers; skip them when
/// something better exists.
fn runway_related(c: &CandidateItem) -> bool {
    c.schema.object_type.to_lowercase().contains("runway")
        || c.triple.relation.to_lowercase().contains("runway")
}

fn extract_subject(question_lower: &str, candidates: &[CandidateItem]) -> String {
    if let Some(c) = candidates
        .iter()
        .find(|c| relation_in(&c.triple.relation, LEADERSHIP_RELATIONS))
    {
        return c.meta.obj_clean.clone();
    }
    if let Some(c) = candidates.iter().find(|c| {
        mentioned(question_lower, &c.triple.subject, &c.meta.sub_clean)
            && relation_like(&c.triple.relation, LEADERSHIP_RELATIONS)
    }) {
        return c.meta.obj_clean.clone();
    }
    candidates[0].meta.sub_clean.clone()
}

fn extract_object(question_lower: &str, candidates: &[CandidateItem]) -> String {
    let location_question = LOCATION_CUES.iter().any(|cue| question_lower.contains(cue));
    if location_question {
        if let Some(c) = candidates
            .iter()
            .find(|c| relation_in(&c.triple.relation, LOCATION_RELATIONS))
        {
            return c.meta.obj_clean.clone();
        }
    }
    if let Some(c) = candidates.iter().find(|c| {
        mentioned(question_lower, &c.triple.subject, &c.meta.sub_clean) && !runway_related(c)
    }) {
        return c.meta.obj_clean.clone();
    }
    if let Some(c) = candidates.iter().find(|c| !runway_related(c)) {
        return c.meta.obj_clean.clone();
    }
    candidates[0].meta.obj_clean.clone()
}

fn extract_relationship(question_lower: &str, candidates: &[CandidateItem]) -> String {
    if let Some(c) = candidates.iter().find(|c| {
        mentioned(question_lower, &c.triple.subject, &c.meta.sub_clean)
            && mentioned(question_lower, &c.triple.object, &c.meta.obj_clean)
    }) {
        return c.meta.rel_clean.clone();
    }
    candidates[0].meta.rel_clean.clone()
}

fn extract_type(question_lower: &str, candidates: &[CandidateItem]) -> String {
    if let Some(c) = candidates
        .iter()
        .find(|c| mentioned(question_lower, &c.triple.subject, &c.meta.sub_clean))
    {
        return c.schema.subject_type.clone();
    }
    if let Some(c) = candidates
        .iter()
        .find(|c| mentioned(question_lower, &c.triple.object, &c.meta.obj_clean))
    {
        return c.schema.object_type.clone();
    }
    candidates[0].schema.subject_type.clone()
}
