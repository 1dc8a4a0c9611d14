//! Raw-to-display record normalization.
//!
//! Turns each [`ContentRecord`] into a [`DisplayRecord`]:
//!
//! - ids (own and related) become strings
//! - `"prompt-template"` records take their category from the style field
//! - the category maps to a [`StyleClass`] through a fixed table
//! - a numbered `howToUse` block is split into steps
//!
//! Nothing here fails. Malformed numbering yields fewer or irregular steps.

use crate::types::{ContentRecord, DisplayRecord, HowToUse, StyleClass};
use regex::Regex;
use std::sync::LazyLock;

/// Raw category value that defers to the record's style category.
pub const TEMPLATE_SENTINEL: &str = "prompt-template";

/// Category used when a template record has no style category.
pub const FALLBACK_CATEGORY: &str = "Other";

static STEP_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\d+\.\s*").expect("step boundary pattern is valid"));
static STEP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("step marker pattern is valid"));

/// Normalize one raw record.
pub fn normalize(raw: &ContentRecord) -> DisplayRecord {
    let category = resolve_category(&raw.category, &raw.pill_class);

    DisplayRecord {
        id: raw.id.to_string(),
        slug: raw.slug.clone(),
        style_class: style_class_for(&category),
        category,
        title: raw.title.clone(),
        description: raw.description.clone(),
        tags: raw.tags.clone(),
        use_case: raw.use_case.clone(),
        prompt_body: raw.prompt_body.clone(),
        how_to_use: match &raw.how_to_use {
            HowToUse::Steps(steps) => steps.clone(),
            HowToUse::Numbered(text) => split_numbered_steps(text),
        },
        pro_tips: raw.pro_tips.clone(),
        related_ids: raw.related_ids.iter().map(u64::to_string).collect(),
    }
}

/// Normalize a whole collection, preserving order.
pub fn normalize_all(raw: &[ContentRecord]) -> Vec<DisplayRecord> {
    raw.iter().map(normalize).collect()
}

/// Resolve the displayed category of a record.
pub fn resolve_category(category: &str, pill_class: &str) -> String {
    if category != TEMPLATE_SENTINEL {
        return category.to_string();
    }
    if pill_class.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        pill_class.to_string()
    }
}

/// Map a category to its pill colour. Unknown categories are neutral.
pub fn style_class_for(category: &str) -> StyleClass {
    match category {
        "Design" => StyleClass::Blue,
        "Strategy" | "Career" | "Research" => StyleClass::Green,
        "Philosophy" => StyleClass::Purple,
        _ => StyleClass::Neutral,
    }
}

/// Split a numbered block like `"1. Open\n2. Paste"` into `["Open", "Paste"]`.
///
/// Splits on a newline followed by `N.`, strips a leading `N.` left on the
/// first piece, trims, and drops empty pieces.
pub fn split_numbered_steps(text: &str) -> Vec<String> {
    STEP_BOUNDARY
        .split(text)
        .map(|piece| STEP_MARKER.replace(piece, "").trim().to_string())
        .filter(|step| !step.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::raw_record;

    #[test]
    fn numbered_steps_split_in_order() {
        let steps = split_numbered_steps("1. Open the tool\n2. Paste the prompt\n3. Review output");
        assert_eq!(steps, vec!["Open the tool", "Paste the prompt", "Review output"]);
    }

    #[test]
    fn numbered_steps_tolerate_missing_space_and_blank_pieces() {
        let steps = split_numbered_steps("1.Open\n2.   \n3.Close  ");
        assert_eq!(steps, vec!["Open", "Close"]);
    }

    #[test]
    fn unnumbered_text_is_a_single_step() {
        assert_eq!(split_numbered_steps("  just do it  "), vec!["just do it"]);
    }

    #[test]
    fn malformed_numbering_degrades_without_error() {
        // A numbered line that is not preceded by a newline stays in its piece.
        let steps = split_numbered_steps("1. First 2. Second\n3. Third");
        assert_eq!(steps, vec!["First 2. Second", "Third"]);
        assert!(split_numbered_steps("").is_empty());
    }

    #[test]
    fn style_table() {
        assert_eq!(style_class_for("Design"), StyleClass::Blue);
        assert_eq!(style_class_for("Strategy"), StyleClass::Green);
        assert_eq!(style_class_for("Career"), StyleClass::Green);
        assert_eq!(style_class_for("Research"), StyleClass::Green);
        assert_eq!(style_class_for("Philosophy"), StyleClass::Purple);
        assert_eq!(style_class_for("Other"), StyleClass::Neutral);
        assert_eq!(style_class_for("design"), StyleClass::Neutral);
        assert_eq!(style_class_for("Cooking"), StyleClass::Neutral);
    }

    #[test]
    fn template_takes_style_category() {
        let mut raw = raw_record(7, "critique", TEMPLATE_SENTINEL);
        raw.pill_class = "Philosophy".into();
        let record = normalize(&raw);
        assert_eq!(record.category, "Philosophy");
        assert_eq!(record.style_class, StyleClass::Purple);
    }

    #[test]
    fn template_without_style_category_falls_back_to_other() {
        let raw = raw_record(7, "critique", TEMPLATE_SENTINEL);
        let record = normalize(&raw);
        assert_eq!(record.category, "Other");
        assert_eq!(record.style_class, StyleClass::Neutral);
    }

    #[test]
    fn non_template_category_passes_through() {
        let raw = raw_record(1, "roadmap", "Strategy");
        let record = normalize(&raw);
        assert_eq!(record.category, "Strategy");
        assert_eq!(record.style_class, StyleClass::Green);
    }

    #[test]
    fn style_class_follows_resolved_category_not_style_field() {
        let mut raw = raw_record(1, "roadmap", "Strategy");
        raw.pill_class = "Design".into();
        let record = normalize(&raw);
        assert_eq!(record.category, "Strategy");
        assert_eq!(record.style_class, StyleClass::Green);
    }

    #[test]
    fn ids_become_strings() {
        let mut raw = raw_record(12, "x", "Design");
        raw.related_ids = vec![3, 40];
        let record = normalize(&raw);
        assert_eq!(record.id, "12");
        assert_eq!(record.related_ids, vec!["3", "40"]);
    }

    #[test]
    fn step_sequences_pass_through_unchanged() {
        let mut raw = raw_record(1, "x", "Design");
        raw.how_to_use = HowToUse::Steps(vec!["  keep  ".into(), "".into()]);
        let record = normalize(&raw);
        assert_eq!(record.how_to_use, vec!["  keep  ", ""]);
    }

    #[test]
    fn normalize_all_preserves_order() {
        let raws = vec![raw_record(2, "b", "Design"), raw_record(1, "a", "Career")];
        let slugs: Vec<_> = normalize_all(&raws).into_iter().map(|r| r.slug).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }
}
