use serde::{Deserialize, Serialize};

/// The 4 semantic question categories over (subject, relation, object) facts.
///
/// Serialized with the short tags used by the QA record format
/// (`sub`, `obj`, `rel`, `type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// Asks for the subject of a fact ("Who wrote X?").
    #[serde(rename = "sub")]
    Subject,
    /// Asks for the object of a fact ("What did X write?").
    #[serde(rename = "obj")]
    Object,
    /// Asks for the relation between two entities.
    #[serde(rename = "rel")]
    Relationship,
    /// Asks for the semantic type of an entity.
    #[serde(rename = "type")]
    Type,
}

impl QuestionType {
    /// Total number of question types.
    pub const COUNT: usize = 4;

    /// All variants for iteration.
    pub const ALL: [QuestionType; 4] = [
        Self::Subject,
        Self::Object,
        Self::Relationship,
        Self::Type,
    ];

    /// Short wire tag as it appears in QA records.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Subject => "sub",
            Self::Object => "obj",
            Self::Relationship => "rel",
            Self::Type => "type",
        }
    }

    /// Parse a wire tag, defaulting to `Subject` for unknown tags.
    ///
    /// QA datasets in the wild carry `"unknown"` and free-form strings in
    /// this field; Subject is the safe default for answer extraction.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "sub" => Self::Subject,
            "obj" => Self::Object,
            "rel" => Self::Relationship,
            "type" => Self::Type,
            _ => Self::Subject,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Object => "object",
            Self::Relationship => "relationship",
            Self::Type => "type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip_for_all_variants() {
        for qt in QuestionType::ALL {
            assert_eq!(QuestionType::from_tag(qt.tag()), qt);
        }
    }

    #[test]
    fn unknown_tag_defaults_to_subject() {
        assert_eq!(QuestionType::from_tag("unknown"), QuestionType::Subject);
        assert_eq!(QuestionType::from_tag(""), QuestionType::Subject);
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&QuestionType::Relationship).unwrap();
        assert_eq!(json, "\"rel\"");
        let qt: QuestionType = serde_json::from_str("\"type\"").unwrap();
        assert_eq!(qt, QuestionType::Type);
    }
}
