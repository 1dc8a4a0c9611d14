//! The immutable prompt catalog.
//!
//! A [`Catalog`] is built once from raw records: normalize, shuffle with
//! [`CATALOG_SEED`], then index by slug and by id. After construction it is
//! read-only and handed around by reference; every lookup and filter reads
//! from the same shuffled order.
//!
//! ```text
//! Vec<ContentRecord> → normalize → seeded_shuffle(42) → Catalog
//!                                                       ├── records (display order)
//!                                                       ├── by_slug
//!                                                       ├── by_id
//!                                                       └── category_chips
//! ```

use crate::filter::{self, GalleryQuery};
use crate::normalize;
use crate::shuffle::{self, CATALOG_SEED};
use crate::types::{ContentRecord, DisplayRecord};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<DisplayRecord>,
    by_slug: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    category_chips: Vec<String>,
}

impl Catalog {
    /// Build the catalog with the published seed.
    pub fn from_raw(raw: &[ContentRecord]) -> Self {
        Self::with_seed(raw, CATALOG_SEED)
    }

    /// Build the catalog with an explicit seed.
    pub fn with_seed(raw: &[ContentRecord], seed: u64) -> Self {
        let mut records = normalize::normalize_all(raw);
        shuffle::shuffle_in_place(&mut records, seed);
        Self::from_display_order(records)
    }

    /// Index records that are already in display order.
    pub fn from_display_order(records: Vec<DisplayRecord>) -> Self {
        let by_slug = records
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.slug.clone(), idx))
            .collect();
        let by_id = records
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.id.clone(), idx))
            .collect();
        let category_chips = filter::category_chips(&records);
        tracing::debug!(
            records = records.len(),
            chips = category_chips.len(),
            "catalog built"
        );
        Self {
            records,
            by_slug,
            by_id,
            category_chips,
        }
    }

    /// All records in display order.
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&DisplayRecord> {
        self.by_slug.get(slug).map(|&idx| &self.records[idx])
    }

    pub fn get_by_id(&self, id: &str) -> Option<&DisplayRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// "All" plus up to seven categories, in display order of first appearance.
    pub fn category_chips(&self) -> &[String] {
        &self.category_chips
    }

    /// Records passing `query`, in display order.
    pub fn filter(&self, query: &GalleryQuery) -> Vec<&DisplayRecord> {
        filter::filter_records(&self.records, query)
    }

    /// Resolve a record's related ids, skipping any that do not exist.
    pub fn related(&self, record: &DisplayRecord) -> Vec<&DisplayRecord> {
        record
            .related_ids
            .iter()
            .filter_map(|id| {
                let found = self.get_by_id(id);
                if found.is_none() {
                    tracing::debug!(slug = %record.slug, related_id = %id, "skipping unknown related id");
                }
                found
            })
            .collect()
    }
}
