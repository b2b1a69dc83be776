//! Document rendering for indexing: one natural-language sentence per
//! triple, carrying both entity names and schema types so the
//! embedding sees the full context.

use trellis_core::models::{Schema, Triple};

/// A knowledge-base entry ready for indexing.
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    pub id: String,
    pub triple: Triple,
    pub schema: Schema,
}

impl KnowledgeEntry {
    pub fn new(id: impl Into<String>, triple: Triple, schema: Schema) -> Self {
        Self {
            id: id.into(),
            triple,
            schema,
        }
    }
}

/// Render the indexing sentence for a triple.
///
/// Entity names have separators converted to spaces; schema types are
/// kept verbatim.
pub fn render(triple: &Triple, schema: &Schema) -> String {
    format!(
        "An instance of a '{}' named '{}' has a relation '{}' with an instance of a '{}' which is '{}'.",
        schema.subject_type,
        triple.clean_subject(),
        triple.clean_relation(),
        schema.object_type,
        triple.clean_object(),
    )
}
