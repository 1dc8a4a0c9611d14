//! HTML site generation.
//!
//! Renders the prompt gallery from a built [`Catalog`].
//!
//! ## Generated Pages
//!
//! - **Gallery** (`/index.html`): search box, category chips, every card in
//!   catalog order
//! - **Filter pages** (`/filter/{chip}/index.html`): the gallery with one chip
//!   selected, pre-filtered at build time
//! - **Prompt pages** (`/prompts/{slug}/index.html`): use case, prompt body,
//!   steps, tips, tags and related prompts
//! - **Not found** (`/404.html`): shown for unknown prompt URLs
//! - **Data export** (`/prompts.json`): the catalog in display order
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── prompts.json
//! ├── filter/
//! │   ├── design/index.html
//! │   └── ...
//! └── prompts/
//!     ├── design-critique/index.html
//!     └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time and inlined into every page:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/search.js`: live text search over the rendered cards
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! all interpolation is escaped.

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::filter::{self, ALL_CATEGORIES, GalleryQuery};
use crate::types::DisplayRecord;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a page is, for CLI reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Gallery,
    Filter { chip: String, count: usize },
    Prompt { title: String },
    NotFound,
    Data,
}

/// One file written by [`generate`], relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub kind: PageKind,
    pub path: PathBuf,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const SEARCH_JS: &str = include_str!("../static/search.js");

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("chip slug pattern is valid"));

/// Render the whole site into `output_dir`.
pub fn generate(
    catalog: &Catalog,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let mut written = Vec::new();

    fs::create_dir_all(output_dir)?;

    let chips = ChipLinks::new(catalog.category_chips());
    let index = render_gallery(catalog, config, &chips, &GalleryQuery::default(), &css);
    written.push(write_page(output_dir, "index.html", index, PageKind::Gallery)?);

    for (chip, slug) in chips.iter() {
        let query = GalleryQuery::new(chip, "");
        let count = catalog.filter(&query).len();
        let html = render_gallery(catalog, config, &chips, &query, &css);
        let rel = format!("filter/{slug}/index.html");
        written.push(write_page(
            output_dir,
            &rel,
            html,
            PageKind::Filter {
                chip: chip.to_string(),
                count,
            },
        )?);
    }

    for record in catalog.records() {
        let related = catalog.related(record);
        let html = render_prompt_page(record, &related, config, &css);
        let rel = format!("prompts/{}/index.html", record.slug);
        written.push(write_page(
            output_dir,
            &rel,
            html,
            PageKind::Prompt {
                title: record.title.clone(),
            },
        )?);
    }

    let not_found = render_not_found(config, &css);
    written.push(write_page(output_dir, "404.html", not_found, PageKind::NotFound)?);

    let json = serde_json::to_string_pretty(catalog.records())?;
    fs::write(output_dir.join("prompts.json"), json)?;
    written.push(GeneratedPage {
        kind: PageKind::Data,
        path: PathBuf::from("prompts.json"),
    });

    tracing::info!(pages = written.len(), output = %output_dir.display(), "site generated");
    Ok(written)
}

fn write_page(
    output_dir: &Path,
    rel: &str,
    markup: Markup,
    kind: PageKind,
) -> Result<GeneratedPage, GenerateError> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    tracing::debug!(path = %path.display(), "wrote page");
    Ok(GeneratedPage {
        kind,
        path: PathBuf::from(rel),
    })
}

/// URL segment for a category chip: `"Design Ops"` → `"design-ops"`.
pub fn chip_slug(chip: &str) -> String {
    let lower = chip.to_lowercase();
    let slug = NON_ALNUM.replace_all(lower.trim(), "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "category".to_string()
    } else {
        slug.to_string()
    }
}

/// Filter-page segments for the category chips.
///
/// Segments are assigned in chip order; a chip whose [`chip_slug`] is
/// already taken gets `-2`, `-3`, ... so no two chips share a page.
#[derive(Debug, Default)]
pub struct ChipLinks {
    order: Vec<(String, String)>,
    by_chip: HashMap<String, usize>,
}

impl ChipLinks {
    pub fn new(chips: &[String]) -> Self {
        let mut links = ChipLinks::default();
        let mut taken = HashSet::new();
        for chip in chips {
            if chip == ALL_CATEGORIES || links.by_chip.contains_key(chip) {
                continue;
            }
            let base = chip_slug(chip);
            let mut slug = base.clone();
            let mut n = 2;
            while !taken.insert(slug.clone()) {
                slug = format!("{base}-{n}");
                n += 1;
            }
            links.by_chip.insert(chip.clone(), links.order.len());
            links.order.push((chip.clone(), slug));
        }
        links
    }

    /// Filter-page segment of `chip`; `None` for "All" and unknown labels.
    pub fn slug(&self, chip: &str) -> Option<&str> {
        self.by_chip.get(chip).map(|&i| self.order[i].1.as_str())
    }

    /// Link target of a chip. "All" (and anything without a page) points
    /// back at the gallery.
    pub fn href(&self, chip: &str) -> String {
        match self.slug(chip) {
            Some(slug) => format!("/filter/{slug}/"),
            None => "/".to_string(),
        }
    }

    /// `(chip, segment)` pairs in chip order, "All" excluded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|(chip, slug)| (chip.as_str(), slug.as_str()))
    }
}

fn prompt_href(record: &DisplayRecord) -> String {
    format!("/prompts/{}/", record.slug)
}

/// Lower-cased searchable text of a card, one field per line.
fn search_text(record: &DisplayRecord) -> String {
    let mut fields = vec![
        record.title.to_lowercase(),
        record.description.to_lowercase(),
        record.category.to_lowercase(),
    ];
    fields.extend(record.tags.iter().map(|t| t.to_lowercase()));
    fields.join("\n")
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the header: brand link plus configured links
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        nav.site-header aria-label="Main navigation" {
            a.nav-brand href="/" { (config.site.title) }
            div.nav-links {
                @for link in &config.links {
                    @if link.external {
                        a.nav-link href=(link.url) target="_blank" rel="noopener noreferrer" { (link.label) }
                    } @else {
                        a.nav-link href=(link.url) { (link.label) }
                    }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            div.footer-info {
                @if !config.site.author.is_empty() {
                    div { (config.site.author) " ©" }
                }
                @if !config.site.email.is_empty() {
                    div { a href={ "mailto:" (config.site.email) } { (config.site.email) } }
                }
            }
            @if !config.site.tagline.is_empty() {
                p.footer-tagline { (config.site.tagline) }
            }
        }
    }
}

/// Renders one gallery card
fn render_card(record: &DisplayRecord) -> Markup {
    let label = format!("{} - Read more", record.title);
    html! {
        a class={ "card-link " (record.style_class.css_class()) }
            href=(prompt_href(record))
            aria-label=(label)
            data-search=(search_text(record)) {
            div.card-inner {
                div.card-header {
                    span.card-pill { (record.category) }
                }
                h3.card-title { (record.title) }
                p.card-desc { (record.description) }
                div.card-tags {
                    @for tag in &record.tags {
                        span { (tag) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the gallery with `query` applied
fn render_gallery(
    catalog: &Catalog,
    config: &SiteConfig,
    chips: &ChipLinks,
    query: &GalleryQuery,
    css: &str,
) -> Markup {
    let cards = catalog.filter(query);
    let gallery = &config.gallery;
    let page_title = if query.category == ALL_CATEGORIES {
        config.site.title.clone()
    } else {
        format!("{} - {}", query.category, config.site.title)
    };

    let content = html! {
        (site_header(config))
        main.content-section id="prompts" {
            h2.prompts-section-title { (gallery.heading) }
            @if !gallery.subtitle.is_empty() {
                p.prompts-section-subtitle { (gallery.subtitle) }
            }
            div.search-filter-wrap {
                form.search-input-wrap role="search" action=(chips.href(&query.category)) method="get" {
                    input.search-input type="text" name="q"
                        placeholder=(gallery.search_placeholder)
                        value=(query.text)
                        aria-label="Search cards";
                }
                div.filter-chips-row {
                    div.filter-chips {
                        @for chip in catalog.category_chips() {
                            @let active = *chip == query.category;
                            a.filter-chip.filter-chip-active[active] href=(chips.href(chip)) { (chip) }
                        }
                    }
                    div.prompts-results-count { (filter::count_label(cards.len())) }
                }
            }
            div.cards-grid {
                p.cards-empty hidden[!cards.is_empty()] { "No cards match your search." }
                @for card in &cards {
                    (render_card(card))
                }
            }
        }
        (site_footer(config))
        script { (PreEscaped(SEARCH_JS)) }
    };

    base_document(&page_title, css, content)
}

/// Renders a prompt detail page
fn render_prompt_page(
    record: &DisplayRecord,
    related: &[&DisplayRecord],
    config: &SiteConfig,
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(config))
        main.prompt-view {
            a.prompt-view-back href="/#prompts" { "← Back to prompts" }
            h1.prompt-view-title { (record.title) }

            section.prompt-view-section {
                h2.prompt-view-heading { "Use Case" }
                p.prompt-view-text { (record.use_case) }
            }

            section.prompt-view-section {
                h2.prompt-view-heading { "Prompt" }
                pre.prompt-view-code { (record.prompt_body) }
            }

            section.prompt-view-section {
                h2.prompt-view-heading { "How to use" }
                ol.prompt-view-steps {
                    @for step in &record.how_to_use {
                        li.prompt-view-step { (step) }
                    }
                }
            }

            @if !record.pro_tips.is_empty() {
                section.prompt-view-section {
                    h3.prompt-view-subheading { "Pro Tips" }
                    ul.prompt-view-tips {
                        @for tip in &record.pro_tips {
                            li.prompt-view-tip { (tip) }
                        }
                    }
                }
            }

            section.prompt-view-section {
                h2.prompt-view-heading { "Tags" }
                div.prompt-view-tags {
                    @for tag in &record.tags {
                        span.prompt-view-tag { (tag) }
                    }
                }
            }

            @if !related.is_empty() {
                section.prompt-view-section {
                    h2.prompt-view-heading { "Related Prompts" }
                    ul.prompt-view-related {
                        @for other in related {
                            li {
                                a.prompt-view-related-link href=(prompt_href(other)) { (other.title) }
                                span.prompt-view-related-desc { (other.description) }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(config))
    };

    let page_title = format!("{} - {}", record.title, config.site.title);
    base_document(&page_title, css, content)
}

/// Renders the not-found page
fn render_not_found(config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(config))
        main.prompt-view.prompt-view-error {
            p { "Prompt not found." }
            a.prompt-view-back href="/#prompts" { "← Back to prompts" }
        }
    };
    base_document(&format!("Not found - {}", config.site.title), css, content)
}

// ============================================================================
// Tests
// ============================================================================
