//! Content loading and validation.
//!
//! Reads the content directory once: `config.toml` (optional) and the prompt
//! data file named by `gallery.data_file` (default `prompts.json`).
//!
//! ```text
//! content/
//! ├── config.toml      # Site configuration (optional)
//! └── prompts.json     # Ordered array of prompt records
//! ```
//!
//! ## Validation
//!
//! The data file is trusted but checked once here, so nothing downstream
//! re-validates:
//! - ids are unique
//! - slugs are unique and made of `A-Z a-z 0-9 . _ ~ -`, never `.` or `..`
//!
//! Soft problems (unknown categories, odd step numbering, stale related ids)
//! are not errors; they are handled by [`crate::normalize`] and
//! [`crate::catalog`].

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::types::ContentRecord;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {path}: {0}", path = .1.display())]
    Io(#[source] std::io::Error, PathBuf),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid prompt data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate prompt id {0}")]
    DuplicateId(u64),
    #[error("Duplicate prompt slug '{0}'")]
    DuplicateSlug(String),
    #[error("Prompt {id} has an invalid slug '{slug}'")]
    InvalidSlug { id: u64, slug: String },
}

/// Everything read from the content directory.
#[derive(Debug)]
pub struct Content {
    pub config: SiteConfig,
    pub data_path: PathBuf,
    pub records: Vec<ContentRecord>,
}

impl Content {
    /// Build the display catalog from the loaded records.
    pub fn catalog(&self) -> Catalog {
        Catalog::from_raw(&self.records)
    }
}

/// Load config and prompt records from a content directory.
pub fn load(source: &Path) -> Result<Content, LoadError> {
    let config = config::load_config(source)?;
    let data_path = source.join(&config.gallery.data_file);
    let json =
        fs::read_to_string(&data_path).map_err(|e| LoadError::Io(e, data_path.clone()))?;
    let records = parse_records(&json)?;
    tracing::info!(path = %data_path.display(), records = records.len(), "loaded prompt data");
    Ok(Content {
        config,
        data_path,
        records,
    })
}

/// Parse and validate a JSON array of raw records.
pub fn parse_records(json: &str) -> Result<Vec<ContentRecord>, LoadError> {
    let records: Vec<ContentRecord> = serde_json::from_str(json)?;
    validate_records(&records)?;
    Ok(records)
}

/// Check id and slug uniqueness and slug shape.
pub fn validate_records(records: &[ContentRecord]) -> Result<(), LoadError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for record in records {
        if !is_valid_slug(&record.slug) {
            return Err(LoadError::InvalidSlug {
                id: record.id,
                slug: record.slug.clone(),
            });
        }
        if !ids.insert(record.id) {
            return Err(LoadError::DuplicateId(record.id));
        }
        if !slugs.insert(record.slug.as_str()) {
            return Err(LoadError::DuplicateSlug(record.slug.clone()));
        }
    }
    Ok(())
}

static SLUG_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("slug pattern is valid"));

/// Slugs become a single URL path segment: unreserved characters only, and
/// never a dot-only segment such as `.` or `..`.
fn is_valid_slug(slug: &str) -> bool {
    SLUG_SHAPE.is_match(slug) && !slug.chars().all(|c| c == '.')
}
