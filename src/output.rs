//! CLI output formatting.
//!
//! Every entity follows the same two-level pattern:
//!
//! 1. **Header line**: 1-based positional index + title (+ category)
//! 2. **Context lines**: indented `Slug:`, `Tags:`, steps, etc.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! 001 Portfolio Review [Career]
//!     Slug: portfolio-review
//!     Tags: portfolio, storytelling
//! 002 Salary Negotiation Coach [Career]
//!     Slug: salary-negotiation
//!     Tags: negotiation
//!
//! 2 prompts
//! ```
//!
//! ## Generate
//!
//! ```text
//! Gallery → index.html
//! Filter Career (2 prompts) → filter/career/index.html
//! 001 Portfolio Review → prompts/portfolio-review/index.html
//! Not found → 404.html
//! Data → prompts.json
//!
//! Generated 1 gallery, 7 filter pages, 10 prompt pages
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::catalog::Catalog;
use crate::filter::{self, GalleryQuery};
use crate::generate::{GeneratedPage, PageKind};
use crate::types::DisplayRecord;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

fn record_header(index: usize, record: &DisplayRecord) -> String {
    format!("{} {} [{}]", format_index(index), record.title, record.category)
}

// ============================================================================
// list
// ============================================================================

/// Format the filtered gallery view.
pub fn format_list_output(records: &[&DisplayRecord], query: &GalleryQuery) -> Vec<String> {
    let mut lines = Vec::new();
    let text = query.text.trim();
    if query.category != filter::ALL_CATEGORIES || !text.is_empty() {
        let mut header = format!("Category: {}", query.category);
        if !text.is_empty() {
            header.push_str(&format!(", search: \"{text}\""));
        }
        lines.push(header);
    }

    if records.is_empty() {
        lines.push("No cards match your search.".to_string());
    }
    for (i, record) in records.iter().enumerate() {
        lines.push(record_header(i + 1, record));
        lines.push(format!("{}Slug: {}", indent(1), record.slug));
        if !record.description.is_empty() {
            lines.push(format!("{}{}", indent(1), truncate_desc(&record.description, 72)));
        }
        if !record.tags.is_empty() {
            lines.push(format!("{}Tags: {}", indent(1), record.tags.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push(filter::count_label(records.len()));
    lines
}

pub fn print_list_output(records: &[&DisplayRecord], query: &GalleryQuery) {
    for line in format_list_output(records, query) {
        println!("{}", line);
    }
}

// ============================================================================
// show
// ============================================================================

/// Format one record with its resolved related records.
pub fn format_show_output(record: &DisplayRecord, related: &[&DisplayRecord]) -> Vec<String> {
    let mut lines = vec![
        format!("{} [{}]", record.title, record.category),
        format!("{}Id: {}", indent(1), record.id),
        format!("{}Slug: {}", indent(1), record.slug),
        format!("{}Style: {}", indent(1), record.style_class),
    ];
    if !record.tags.is_empty() {
        lines.push(format!("{}Tags: {}", indent(1), record.tags.join(", ")));
    }

    if !record.use_case.is_empty() {
        lines.push(String::new());
        lines.push("Use case".to_string());
        lines.push(format!("{}{}", indent(1), record.use_case));
    }

    lines.push(String::new());
    lines.push("Prompt".to_string());
    for line in record.prompt_body.lines() {
        lines.push(format!("{}{}", indent(1), line));
    }

    if !record.how_to_use.is_empty() {
        lines.push(String::new());
        lines.push("How to use".to_string());
        for (i, step) in record.how_to_use.iter().enumerate() {
            lines.push(format!("{}{}. {}", indent(1), i + 1, step));
        }
    }

    if !record.pro_tips.is_empty() {
        lines.push(String::new());
        lines.push("Pro tips".to_string());
        for tip in &record.pro_tips {
            lines.push(format!("{}- {}", indent(1), tip));
        }
    }

    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related".to_string());
        for (i, other) in related.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), record_header(i + 1, other)));
            lines.push(format!("{}Slug: {}", indent(2), other.slug));
        }
    }
    lines
}

pub fn print_show_output(record: &DisplayRecord, related: &[&DisplayRecord]) {
    for line in format_show_output(record, related) {
        println!("{}", line);
    }
}

// ============================================================================
// filters
// ============================================================================

/// Format the chip list with per-chip record counts.
pub fn format_filters_output(catalog: &Catalog) -> Vec<String> {
    catalog
        .category_chips()
        .iter()
        .map(|chip| {
            let count = catalog.filter(&GalleryQuery::new(chip.as_str(), "")).len();
            format!("{} ({})", chip, filter::count_label(count))
        })
        .collect()
}

pub fn print_filters_output(catalog: &Catalog) {
    for line in format_filters_output(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Summarize a loaded catalog: record count, chips, and stale related ids.
pub fn format_check_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![
        filter::count_label(catalog.len()),
        format!("Filters: {}", catalog.category_chips().join(", ")),
    ];
    for record in catalog.records() {
        let stale: Vec<&str> = record
            .related_ids
            .iter()
            .filter(|id| catalog.get_by_id(id).is_none())
            .map(String::as_str)
            .collect();
        if !stale.is_empty() {
            lines.push(format!(
                "{}{}: unknown related ids {}",
                indent(1),
                record.slug,
                stale.join(", ")
            ));
        }
    }
    lines
}

pub fn print_check_output(catalog: &Catalog) {
    for line in format_check_output(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the list of generated files.
pub fn format_generate_output(pages: &[GeneratedPage]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut prompts = 0;
    let mut filters = 0;
    let mut galleries = 0;

    for page in pages {
        let path = page.path.display();
        match &page.kind {
            PageKind::Gallery => {
                galleries += 1;
                lines.push(format!("Gallery → {path}"));
            }
            PageKind::Filter { chip, count } => {
                filters += 1;
                lines.push(format!("Filter {chip} ({}) → {path}", filter::count_label(*count)));
            }
            PageKind::Prompt { title } => {
                prompts += 1;
                lines.push(format!("{} {title} → {path}", format_index(prompts)));
            }
            PageKind::NotFound => lines.push(format!("Not found → {path}")),
            PageKind::Data => lines.push(format!("Data → {path}")),
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {galleries} gallery, {filters} filter pages, {prompts} prompt pages"
    ));
    lines
}

pub fn print_generate_output(pages: &[GeneratedPage]) {
    for line in format_generate_output(pages) {
        println!("{}", line);
    }
}
