use serde::{Deserialize, Serialize};
use serde_json::Value;
use vector_store::{PointKey, ScoredHit};

/// One semantic search result, reshaped from the stored note payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct SemanticSearchHit {
    pub id: PointKey,
    pub score: f32,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub tags: Vec<String>,
}

impl From<ScoredHit> for SemanticSearchHit {
    /// Missing title/content become `""`, missing tags `[]`.
    fn from(hit: ScoredHit) -> Self {
        let payload = hit.payload.unwrap_or_default();
        let text = |key: &str| payload.get(key).and_then(Value::as_str).map(str::to_string);

        let tags = payload
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: hit.id,
            score: hit.score,
            title: text("title").unwrap_or_default(),
            content: text("content").unwrap_or_default(),
            kind: text("type"),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let hit = SemanticSearchHit::from(ScoredHit {
            id: PointKey::Num(3),
            score: 0.9,
            payload: None,
        });
        assert_eq!(hit.title, "");
        assert_eq!(hit.content, "");
        assert!(hit.kind.is_none());
        assert!(hit.tags.is_empty());
    }

    #[test]
    fn payload_fields_are_copied() {
        let payload = json!({
            "title": "Quadratics",
            "content": "ax^2 + bx + c",
            "type": "school-note",
            "tags": ["math", "algebra"]
        });
        let hit = SemanticSearchHit::from(ScoredHit {
            id: PointKey::Text("n-1".into()),
            score: 0.5,
            payload: payload.as_object().cloned(),
        });
        assert_eq!(hit.title, "Quadratics");
        assert_eq!(hit.kind.as_deref(), Some("school-note"));
        assert_eq!(hit.tags, vec!["math", "algebra"]);

        let out = serde_json::to_value(&hit).unwrap();
        assert_eq!(out["type"], "school-note");
    }
}
