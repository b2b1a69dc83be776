//! Multi-signal relevance scorer (4 signals).
//!
//! Signals: entity match, relation match, type match, stage-1 semantic
//! similarity. Each is clamped to [0, 1] before weighting.

use std::collections::HashMap;

use trellis_core::models::{CandidateItem, CandidateMeta};

/// Relation categories and the query keywords that evidence them.
const RELATION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "leader",
        &["leader", "president", "king", "queen", "head", "chief"],
    ),
    (
        "location",
        &["location", "located", "place", "where", "country", "city"],
    ),
    ("capital", &["capital"]),
    ("type", &["type", "kind", "category"]),
    ("runway", &["runway", "strip"]),
    ("owner", &["owner", "owned", "belong"]),
];

/// Entity-type categories and the query keywords that evidence them.
const TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    ("country", &["country", "nation"]),
    ("airport", &["airport"]),
    ("city", &["city", "town"]),
    ("person", &["person", "people", "who"]),
    ("organization", &["organization", "company"]),
    ("location", &["location", "place", "where"]),
];

/// Weights for the 4 scoring signals.
#[derive(Debug, Clone)]
pub struct SignalWeights {
    pub entity_match: f64,
    pub relation_match: f64,
    pub type_match: f64,
    pub semantic_similarity: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            entity_match: 0.30,
            relation_match: 0.25,
            type_match: 0.20,
            semantic_similarity: 0.25,
        }
    }
}

/// Entity match: full cleaned names as substrings of the query, plus
/// per-token overlap for tokens longer than 3 characters.
pub fn entity_match(query_lower: &str, meta: &CandidateMeta) -> f64 {
    let mut score: f64 = 0.0;

    let sub_clean = meta.sub_clean.to_lowercase();
    if query_lower.contains(&sub_clean) {
        score += 0.5;
    }

    let obj_clean = meta.obj_clean.to_lowercase();
    if query_lower.contains(&obj_clean) {
        score += 0.5;
    }

    let query_words: Vec<&str> = query_lower.split_whitespace().collect();
    for word in sub_clean
        .split_whitespace()
        .chain(obj_clean.split_whitespace())
    {
        if word.chars().count() > 3 && query_words.contains(&word) {
            score += 0.1;
        }
    }

    score.min(1.0)
}

/// Relation match: each relation token found anywhere in the query,
/// plus category evidence (category name inside the cleaned relation
/// and any of its keywords inside the query).
pub fn relation_match(query_lower: &str, meta: &CandidateMeta) -> f64 {
    let mut score: f64 = 0.0;

    let rel_clean = meta.rel_clean.to_lowercase();
    for word in rel_clean.split_whitespace() {
        if query_lower.contains(word) {
            score += 0.4;
        }
    }

    for &(category, keywords) in RELATION_KEYWORDS {
        if rel_clean.contains(category) && keywords.iter().any(|kw| query_lower.contains(kw)) {
            score += 0.3;
        }
    }

    score.min(1.0)
}

/// Type match: each schema type found verbatim in the query, plus
/// category evidence, accumulated over subject and object types.
pub fn type_match(query_lower: &str, meta: &CandidateMeta) -> f64 {
    let mut score: f64 = 0.0;

    for entity_type in [meta.sub_type.to_lowercase(), meta.obj_type.to_lowercase()] {
        if query_lower.contains(&entity_type) {
            score += 0.4;
        }

        for &(type_name, keywords) in TYPE_KEYWORDS {
            if entity_type.contains(type_name) && keywords.iter().any(|kw| query_lower.contains(kw))
            {
                score += 0.2;
            }
        }
    }

    score.min(1.0)
}

/// Score every candidate with the 4 signals and sort descending.
///
/// The output is a permutation of the input with `rerank_score` and
/// `signal_breakdown` populated on every element.
pub fn score(
    query: &str,
    candidates: Vec<CandidateItem>,
    weights: &SignalWeights,
) -> Vec<CandidateItem> {
    let query_lower = query.to_lowercase();

    let mut scored: Vec<CandidateItem> = candidates
        .into_iter()
        .map(|mut c| {
            // Signal 1: entity names in the query.
            let f_entity = entity_match(&query_lower, &c.meta);

            // Signal 2: relation tokens and relation categories.
            let f_relation = relation_match(&query_lower, &c.meta);

            // Signal 3: schema types and type categories.
            let f_type = type_match(&query_lower, &c.meta);

            // Signal 4: stage-1 similarity (1 − distance).
            let f_semantic = c.stage1_score();

            let final_score = weights.entity_match * f_entity
                + weights.relation_match * f_relation
                + weights.type_match * f_type
                + weights.semantic_similarity * f_semantic;

            let mut breakdown = HashMap::new();
            breakdown.insert("entity_match".to_string(), f_entity);
            breakdown.insert("relation_match".to_string(), f_relation);
            breakdown.insert("type_match".to_string(), f_type);
            breakdown.insert("semantic_similarity".to_string(), f_semantic);

            c.rerank_score = Some(final_score);
            c.signal_breakdown = Some(breakdown);
            c
        })
        .collect();

    // Sort by rerank score descending.
    scored.sort_by(|a, b| {
        b.ranking_score()
            .partial_cmp(&a.ranking_score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}
