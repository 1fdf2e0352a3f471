use serde::{Deserialize, Serialize};
use validator::Validate;
use vector_store::PointKey;

/// A single note indexed for semantic search.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NoteDocument {
    /// Optional custom identifier; defaults to the note's position in the request.
    #[serde(default)]
    pub id: Option<PointKey>,
    #[validate(length(min = 1))]
    pub title: String,
    /// Text that gets embedded.
    #[validate(length(min = 1))]
    pub content: String,
    /// High-level category, e.g. `component`, `school-note`, `doc`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for ingesting one or more notes.
#[derive(Debug, Deserialize, Validate)]
pub struct IngestNotesRequest {
    #[serde(default = "super::default_collection")]
    pub collection_name: String,
    #[validate(length(min = 1), nested)]
    pub notes: Vec<NoteDocument>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> IngestNotesRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn defaults_collection_and_accepts_minimal_note() {
        let req = parse(json!({"notes": [{"title": "A", "content": "x"}]}));
        assert_eq!(req.collection_name, "notes");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn nested_note_rules_are_reported_per_index() {
        let req = parse(json!({"notes": [
            {"title": "A", "content": "x"},
            {"title": "", "content": "y"}
        ]}));
        let errors = req.validate().unwrap_err();
        let details = serde_json::to_value(&errors).unwrap();
        assert!(details["notes"].to_string().contains("title"));
    }

    #[test]
    fn empty_note_list_fails_length_rule() {
        let req = parse(json!({"notes": []}));
        assert!(req.validate().unwrap_err().errors().contains_key("notes"));
    }
}
