use serde::{Deserialize, Serialize};

use crate::text::clean_name;

/// A (subject, relation, object) fact from the knowledge graph.
///
/// Stored names may join words with `_`; use the `clean_*` accessors for
/// display. Serialized as a 3-element array to match the QA record format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Triple {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }

    /// Subject with `_` rendered as spaces.
    pub fn clean_subject(&self) -> String {
        clean_name(&self.subject)
    }

    /// Relation with `_` rendered as spaces.
    pub fn clean_relation(&self) -> String {
        clean_name(&self.relation)
    }

    /// Object with `_` rendered as spaces.
    pub fn clean_object(&self) -> String {
        clean_name(&self.object)
    }

    /// The three fields in positional order, for position-wise comparison.
    pub fn fields(&self) -> [&str; 3] {
        [&self.subject, &self.relation, &self.object]
    }
}

impl From<(String, String, String)> for Triple {
    fn from((subject, relation, object): (String, String, String)) -> Self {
        Self {
            subject,
            relation,
            object,
        }
    }
}

impl From<Triple> for (String, String, String) {
    fn from(t: Triple) -> Self {
        (t.subject, t.relation, t.object)
    }
}

/// The semantic types aligned with a [`Triple`]'s three positions.
///
/// Serialized as a 3-element array, like `Triple`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Schema {
    pub subject_type: String,
    pub relation_type: String,
    pub object_type: String,
}

impl Schema {
    pub fn new(
        subject_type: impl Into<String>,
        relation_type: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        Self {
            subject_type: subject_type.into(),
            relation_type: relation_type.into(),
            object_type: object_type.into(),
        }
    }

    /// A schema with all three types empty, for candidates missing type info.
    pub fn empty() -> Self {
        Self::new("", "", "")
    }
}

impl From<(String, String, String)> for Schema {
    fn from((subject_type, relation_type, object_type): (String, String, String)) -> Self {
        Self {
            subject_type,
            relation_type,
            object_type,
        }
    }
}

impl From<Schema> for (String, String, String) {
    fn from(s: Schema) -> Self {
        (s.subject_type, s.relation_type, s.object_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_serializes_as_array() {
        let t = Triple::new("Belgium", "leader", "Philippe_of_Belgium");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"["Belgium","leader","Philippe_of_Belgium"]"#);
    }

    #[test]
    fn triple_deserializes_from_array() {
        let t: Triple =
            serde_json::from_str(r#"["Amsterdam_Airport_Schiphol","location","Haarlemmermeer"]"#)
                .unwrap();
        assert_eq!(t.subject, "Amsterdam_Airport_Schiphol");
        assert_eq!(t.relation, "location");
        assert_eq!(t.object, "Haarlemmermeer");
    }

    #[test]
    fn clean_accessors_replace_underscores() {
        let t = Triple::new("Philippe_of_Belgium", "head_of_state", "Belgium");
        assert_eq!(t.clean_subject(), "Philippe of Belgium");
        assert_eq!(t.clean_relation(), "head of state");
        assert_eq!(t.clean_object(), "Belgium");
    }

    #[test]
    fn schema_roundtrips_through_array_form() {
        let s = Schema::new("Country", "leader", "Royalty");
        let json = serde_json::to_string(&s).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
