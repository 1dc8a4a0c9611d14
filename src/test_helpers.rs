//! Shared test utilities for the promptfolio test suite.
//!
//! Record builders keep tests focused on the one field they care about, and
//! [`setup_fixtures`] gives each test an isolated copy of `fixtures/content/`.

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::Catalog;
use crate::types::{ContentRecord, DisplayRecord, HowToUse, StyleClass};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

// =========================================================================
// Record builders
// =========================================================================

/// A raw record with only identity and category set.
pub fn raw_record(id: u64, slug: &str, category: &str) -> ContentRecord {
    ContentRecord {
        id,
        slug: slug.to_string(),
        category: category.to_string(),
        pill_class: String::new(),
        title: format!("Prompt {id}"),
        description: String::new(),
        tags: vec![],
        use_case: String::new(),
        prompt_body: String::new(),
        how_to_use: HowToUse::default(),
        pro_tips: vec![],
        related_ids: vec![],
    }
}

/// A display record with only identity and category set.
pub fn display_record(id: &str, slug: &str, category: &str) -> DisplayRecord {
    DisplayRecord {
        id: id.to_string(),
        slug: slug.to_string(),
        category: category.to_string(),
        style_class: StyleClass::Neutral,
        title: format!("Prompt {id}"),
        description: String::new(),
        tags: vec![],
        use_case: String::new(),
        prompt_body: String::new(),
        how_to_use: vec![],
        pro_tips: vec![],
        related_ids: vec![],
    }
}

// =========================================================================
// Catalog lookups — panics with a clear message on miss
// =========================================================================

/// Find a record by slug. Panics if not found.
pub fn find_record<'a>(catalog: &'a Catalog, slug: &str) -> &'a DisplayRecord {
    catalog.get_by_slug(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = catalog.records().iter().map(|r| r.slug.as_str()).collect();
        panic!("record '{slug}' not found. Available: {slugs:?}")
    })
}
