//! Category and free-text filtering over the shuffled collection.
//!
//! Filtering never reorders: matches come back in catalog order. The chip
//! list offers "All" plus at most [`MAX_CATEGORY_CHIPS`] categories; records in
//! overflow categories stay reachable through "All" and text search.

use crate::types::DisplayRecord;

/// Chip value that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Maximum number of category chips, not counting "All".
pub const MAX_CATEGORY_CHIPS: usize = 7;

/// A category selection plus a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryQuery {
    pub category: String,
    pub text: String,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            text: String::new(),
        }
    }
}

impl GalleryQuery {
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }

    /// Whether a record passes both the category and the text filter.
    pub fn matches(&self, record: &DisplayRecord) -> bool {
        matches_category(record, &self.category) && matches_text(record, &self.text)
    }
}

/// Exact, case-sensitive category match, or the "All" sentinel.
pub fn matches_category(record: &DisplayRecord, category: &str) -> bool {
    category == ALL_CATEGORIES || record.category == category
}

/// Case-insensitive substring match on title, description, category or any tag.
///
/// A query that is empty after trimming matches everything.
pub fn matches_text(record: &DisplayRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(&needle);
    hit(&record.title)
        || hit(&record.description)
        || hit(&record.category)
        || record.tags.iter().any(|tag| hit(tag))
}

/// Records matching `query`, in the order given.
pub fn filter_records<'a>(
    records: &'a [DisplayRecord],
    query: &GalleryQuery,
) -> Vec<&'a DisplayRecord> {
    records.iter().filter(|r| query.matches(r)).collect()
}

/// "All" followed by the first [`MAX_CATEGORY_CHIPS`] distinct categories,
/// in first-occurrence order.
pub fn category_chips(records: &[DisplayRecord]) -> Vec<String> {
    let mut chips = vec![ALL_CATEGORIES.to_string()];
    for record in records {
        if chips.len() > MAX_CATEGORY_CHIPS {
            break;
        }
        if !chips[1..].contains(&record.category) {
            chips.push(record.category.clone());
        }
    }
    chips
}

/// Result count label shown above the card grid.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 prompt".to_string()
    } else {
        format!("{count} prompts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::display_record;

    fn sample() -> Vec<DisplayRecord> {
        let mut a = display_record("1", "a", "Design");
        a.tags = vec!["x".into()];
        let mut b = display_record("2", "b", "Career");
        b.tags = vec!["y".into()];
        vec![a, b]
    }

    fn slugs(records: &[&DisplayRecord]) -> Vec<String> {
        records.iter().map(|r| r.slug.clone()).collect()
    }

    #[test]
    fn category_filter_selects_exact_category() {
        let records = sample();
        let hits = filter_records(&records, &GalleryQuery::new("Design", ""));
        assert_eq!(slugs(&hits), vec!["a"]);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let records = sample();
        assert!(filter_records(&records, &GalleryQuery::new("design", "")).is_empty());
    }

    #[test]
    fn text_query_matches_tags() {
        let records = sample();
        let hits = filter_records(&records, &GalleryQuery::new(ALL_CATEGORIES, "y"));
        assert_eq!(slugs(&hits), vec!["b"]);
    }

    #[test]
    fn empty_query_with_all_returns_everything_in_order() {
        let records = sample();
        let hits = filter_records(&records, &GalleryQuery::default());
        assert_eq!(slugs(&hits), vec!["a", "b"]);
    }

    #[test]
    fn text_query_is_trimmed_and_case_insensitive() {
        let mut records = sample();
        records[1].title = "Salary Negotiation Coach".into();
        let hits = filter_records(&records, &GalleryQuery::new(ALL_CATEGORIES, "  NEGOTIATION "));
        assert_eq!(slugs(&hits), vec!["b"]);
    }

    #[test]
    fn text_query_matches_description_and_category() {
        let mut records = sample();
        records[0].description = "Audit a checkout flow".into();
        let by_desc = filter_records(&records, &GalleryQuery::new(ALL_CATEGORIES, "checkout"));
        assert_eq!(slugs(&by_desc), vec!["a"]);
        let by_category = filter_records(&records, &GalleryQuery::new(ALL_CATEGORIES, "caree"));
        assert_eq!(slugs(&by_category), vec!["b"]);
    }

    #[test]
    fn both_filters_must_match() {
        let records = sample();
        let hits = filter_records(&records, &GalleryQuery::new("Design", "y"));
        assert!(hits.is_empty());
    }

    #[test]
    fn whitespace_query_matches_everything() {
        let records = sample();
        assert_eq!(filter_records(&records, &GalleryQuery::new(ALL_CATEGORIES, "   ")).len(), 2);
    }

    #[test]
    fn chips_follow_first_occurrence_order() {
        let records = vec![
            display_record("1", "a", "Career"),
            display_record("2", "b", "Design"),
            display_record("3", "c", "Career"),
            display_record("4", "d", "Research"),
        ];
        assert_eq!(category_chips(&records), vec!["All", "Career", "Design", "Research"]);
    }

    #[test]
    fn chips_are_capped_at_seven_categories() {
        let records: Vec<_> = (0..9)
            .map(|i| display_record(&i.to_string(), &format!("s{i}"), &format!("Cat{i}")))
            .collect();
        let chips = category_chips(&records);
        assert_eq!(chips.len(), 8);
        assert_eq!(chips[0], "All");
        assert_eq!(chips[1..], ["Cat0", "Cat1", "Cat2", "Cat3", "Cat4", "Cat5", "Cat6"]);

        // Overflow categories are still searchable.
        let hits = filter_records(&records, &GalleryQuery::new(ALL_CATEGORIES, "cat8"));
        assert_eq!(slugs(&hits), vec!["s8"]);
    }

    #[test]
    fn chips_for_empty_collection() {
        assert_eq!(category_chips(&[]), vec!["All"]);
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 prompts");
        assert_eq!(count_label(1), "1 prompt");
        assert_eq!(count_label(12), "12 prompts");
    }
}
