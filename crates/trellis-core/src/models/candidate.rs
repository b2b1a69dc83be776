use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::triple::{Schema, Triple};
use crate::text::clean_name;

/// Structured metadata attached to every indexed fact.
///
/// Mirrors what the vector store returns per hit: the raw triple fields,
/// the aligned types, cleaned display names, and pre-joined combination
/// strings used by the retrieval signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMeta {
    pub sub: String,
    pub rel: String,
    pub obj: String,
    pub sub_type: String,
    pub rel_type: String,
    pub obj_type: String,
    pub sub_clean: String,
    pub rel_clean: String,
    pub obj_clean: String,
    /// Cleaned subject and object joined: "{sub_clean} {obj_clean}".
    pub entities: String,
    /// "{sub_type} {rel_clean} {obj_type}".
    pub relation_context: String,
    /// "{sub_clean} {rel_clean} {obj_clean} {sub_type} {obj_type}".
    pub full_context: String,
}

impl CandidateMeta {
    /// Build the full metadata block from a triple and its schema.
    pub fn from_parts(triple: &Triple, schema: &Schema) -> Self {
        let sub_clean = clean_name(&triple.subject);
        let rel_clean = clean_name(&triple.relation);
        let obj_clean = clean_name(&triple.object);
        Self {
            entities: format!("{sub_clean} {obj_clean}"),
            relation_context: format!("{} {rel_clean} {}", schema.subject_type, schema.object_type),
            full_context: format!(
                "{sub_clean} {rel_clean} {obj_clean} {} {}",
                schema.subject_type, schema.object_type
            ),
            sub: triple.subject.clone(),
            rel: triple.relation.clone(),
            obj: triple.object.clone(),
            sub_type: schema.subject_type.clone(),
            rel_type: schema.relation_type.clone(),
            obj_type: schema.object_type.clone(),
            sub_clean,
            rel_clean,
            obj_clean,
        }
    }
}

/// One retrieved fact flowing through the pipeline.
///
/// Created by stage-1 retrieval with only `distance` populated;
/// the rescorer attaches `rerank_score` (and, for the multi-signal
/// strategy, `signal_breakdown`). Downstream components read it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateItem {
    pub id: String,
    pub triple: Triple,
    pub schema: Schema,
    /// Similarity distance from stage-1 vector search (lower is closer).
    pub distance: f64,
    /// The verbalized document that was embedded for this fact.
    pub document: String,
    pub meta: CandidateMeta,
    /// Populated by the rescorer; `None` before stage 2.
    #[serde(default)]
    pub rerank_score: Option<f64>,
    /// Per-signal sub-scores from the multi-signal strategy.
    #[serde(default)]
    pub signal_breakdown: Option<HashMap<String, f64>>,
}

impl CandidateItem {
    /// Build a stage-1 candidate; metadata is derived from the triple/schema.
    pub fn new(
        id: impl Into<String>,
        triple: Triple,
        schema: Schema,
        distance: f64,
        document: impl Into<String>,
    ) -> Self {
        let meta = CandidateMeta::from_parts(&triple, &schema);
        Self {
            id: id.into(),
            triple,
            schema,
            distance,
            document: document.into(),
            meta,
            rerank_score: None,
            signal_breakdown: None,
        }
    }

    /// Stage-1 similarity score: 1 − distance.
    pub fn stage1_score(&self) -> f64 {
        1.0 - self.distance
    }

    /// The score candidates are ordered by after rescoring.
    ///
    /// Falls back to the stage-1 score when rescoring has not run.
    pub fn ranking_score(&self) -> f64 {
        self.rerank_score.unwrap_or_else(|| self.stage1_score())
    }
}
