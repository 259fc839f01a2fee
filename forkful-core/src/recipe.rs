//! Generated recipe payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated recipe as the webhook returned it. `content` is the source of
/// truth - the raw unstructured text the parser works on. The metadata
/// fields are best-effort and may be absent; consumers fall back to derived
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Recipe {
    /// Build a recipe from whatever JSON the webhook put in its `recipe`
    /// field. No schema is enforced: a bare string becomes the content, an
    /// object is read field by field with numbers stringified, and anything
    /// else degrades to empty content, which parses to empty sections
    /// downstream.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(content) => Self {
                content: content.clone(),
                ..Self::default()
            },
            Value::Object(map) => Self {
                content: map
                    .get("content")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                title: field_string(map, "title"),
                cuisine: field_string(map, "cuisine"),
                skill: field_string(map, "skill"),
                serving: field_string(map, "serving"),
                time: field_string(map, "time"),
            },
            _ => Self::default(),
        }
    }

    /// Title to display: the recipe's own title, or one synthesized from the
    /// cuisine when the title is absent or empty.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => format!(
                "{} Culinary Creation",
                self.cuisine.as_deref().unwrap_or_default()
            ),
        }
    }
}

fn field_string(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
