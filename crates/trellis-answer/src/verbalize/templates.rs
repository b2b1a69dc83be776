//! Relation phrase table and declarative sentence rendering.
//!
//! Placeholders are filled from the cleaned names carried on
//! [`CandidateMeta`], so underscores never leak into the narrative.

use trellis_core::models::CandidateMeta;

/// Relation identifiers mapped to natural-language phrases.
///
/// Keyed on the cleaned relation; identifiers here are camelCase or
/// single words, so cleaning never changes them.
const RELATION_PHRASES: &[(&str, &str)] = &[
    ("runwayLength", "has a runway length of"),
    ("runwayName", "has a runway named"),
    ("location", "is located in"),
    ("leader", "is led by"),
    ("capital", "has the capital"),
    ("population", "has a population of"),
    ("area", "has an area of"),
    ("founded", "was founded in"),
    ("wrote", "wrote"),
    ("directed", "directed"),
    ("created", "created"),
    ("owns", "owns"),
    ("memberOf", "is a member of"),
    ("partOf", "is part of"),
    ("hasType", "is of type"),
    ("jurisdiction", "has jurisdiction over"),
];

/// Schema types whose objects are plain quantities.
const NUMERIC_TYPES: &[&str] = &["number", "integer", "float"];

/// Look up the natural phrase for a relation.
pub fn relation_phrase(relation: &str) -> Option<&'static str> {
    RELATION_PHRASES
        .iter()
        .find(|(key, _)| *key == relation)
        .map(|(_, phrase)| *phrase)
}

/// Unit suffix for numeric objects, chosen by relation keyword.
fn unit_suffix(relation_lower: &str) -> Option<&'static str> {
    if relation_lower.contains("length") || relation_lower.contains("distance") {
        Some("meters")
    } else if relation_lower.contains("population") {
        Some("people")
    } else if relation_lower.contains("area") {
        Some("square kilometers")
    } else {
        None
    }
}

/// Render one candidate as a declarative sentence.
///
/// `"{subject} {phrase} {object}."`, with a unit appended when the
/// object's schema type is numeric and the relation names a measure.
pub fn triple_sentence(meta: &CandidateMeta) -> String {
    let phrase = match relation_phrase(&meta.rel_clean) {
        Some(p) => p.to_string(),
        None => format!("has the relation '{}' with", meta.rel_clean),
    };

    let obj_type_lower = meta.obj_type.to_lowercase();
    let numeric = NUMERIC_TYPES.iter().any(|t| *t == obj_type_lower);

    if numeric {
        if let Some(unit) = unit_suffix(&meta.rel_clean.to_lowercase()) {
            return format!("{} {} {} {}.", meta.sub_clean, phrase, meta.obj_clean, unit);
        }
    }
    format!("{} {} {}.", meta.sub_clean, phrase, meta.obj_clean)
}
