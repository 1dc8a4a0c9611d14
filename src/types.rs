//! Shared record types used across the catalog pipeline.
//!
//! [`ContentRecord`] mirrors the bundled `prompts.json` schema and is only
//! ever read. [`DisplayRecord`] is the normalized, render-ready form produced
//! by [`crate::normalize`] and held by the [`crate::catalog::Catalog`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw content entry exactly as it appears in `prompts.json`.
///
/// Field names follow the bundled file (`type`, `pillClass`, `prompt`), with
/// aliases for the descriptive names (`category`, `styleCategory`,
/// `promptBody`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: u64,
    pub slug: String,
    /// Topical grouping. The sentinel `"prompt-template"` defers to `pill_class`.
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    /// Style category used for the pill colour, e.g. `"Design"`.
    #[serde(default, alias = "styleCategory")]
    pub pill_class: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub use_case: String,
    #[serde(rename = "prompt", alias = "promptBody", default)]
    pub prompt_body: String,
    #[serde(default)]
    pub how_to_use: HowToUse,
    #[serde(default)]
    pub pro_tips: Vec<String>,
    #[serde(default)]
    pub related_ids: Vec<u64>,
}

/// Usage instructions: either already split into steps, or one numbered block
/// of text such as `"1. Open\n2. Paste"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HowToUse {
    Steps(Vec<String>),
    Numbered(String),
}

impl Default for HowToUse {
    fn default() -> Self {
        HowToUse::Steps(Vec::new())
    }
}

/// Pill colour family derived from a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleClass {
    Blue,
    Green,
    Purple,
    Neutral,
}

impl StyleClass {
    /// Every variant, in the order the stylesheet declares them.
    pub const ALL: [StyleClass; 4] = [
        StyleClass::Blue,
        StyleClass::Green,
        StyleClass::Purple,
        StyleClass::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::Blue => "blue",
            StyleClass::Green => "green",
            StyleClass::Purple => "purple",
            StyleClass::Neutral => "neutral",
        }
    }

    /// CSS class applied to a card carrying this style.
    pub fn css_class(self) -> String {
        format!("card-pill-{}", self.as_str())
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized content entry, ready for display and lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Stringified raw id; the key of the by-id index.
    pub id: String,
    pub slug: String,
    /// Resolved category shown on the pill and used by the chip filter.
    pub category: String,
    pub style_class: StyleClass,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub use_case: String,
    pub prompt_body: String,
    /// Non-empty, trimmed steps in their original order.
    pub how_to_use: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pro_tips: Vec<String>,
    pub related_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_record_reads_bundled_field_names() {
        let json = r#"{
            "id": 3,
            "slug": "design-critique",
            "type": "prompt-template",
            "pillClass": "Design",
            "title": "Design Critique",
            "description": "Get structured feedback",
            "tags": ["ux", "review"],
            "useCase": "Before a review",
            "prompt": "Act as a senior designer...",
            "howToUse": "1. Paste\n2. Attach",
            "relatedIds": [1, 2]
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.category, "prompt-template");
        assert_eq!(record.pill_class, "Design");
        assert_eq!(record.prompt_body, "Act as a senior designer...");
        assert_eq!(record.how_to_use, HowToUse::Numbered("1. Paste\n2. Attach".into()));
        assert_eq!(record.related_ids, vec![1, 2]);
        assert!(record.pro_tips.is_empty());
    }

    #[test]
    fn content_record_accepts_descriptive_aliases() {
        let json = r#"{
            "id": 1,
            "slug": "a",
            "category": "Research",
            "styleCategory": "Research",
            "title": "A",
            "promptBody": "body",
            "howToUse": ["one", "two"]
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, "Research");
        assert_eq!(record.pill_class, "Research");
        assert_eq!(record.prompt_body, "body");
        assert_eq!(
            record.how_to_use,
            HowToUse::Steps(vec!["one".into(), "two".into()])
        );
    }

    #[test]
    fn missing_how_to_use_is_empty_steps() {
        let json = r#"{"id": 1, "slug": "a", "type": "Other", "title": "A"}"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.how_to_use, HowToUse::Steps(vec![]));
    }

    #[test]
    fn style_class_serializes_lowercase() {
        let json = serde_json::to_string(&StyleClass::Purple).unwrap();
        assert_eq!(json, r#""purple""#);
        assert_eq!(StyleClass::Neutral.css_class(), "card-pill-neutral");
    }
}
