//! # promptfolio
//!
//! A deterministic prompt gallery for a portfolio site. A bundled
//! `prompts.json` becomes an immutable [`catalog::Catalog`]: normalized,
//! shuffled into a fixed display order, indexed by slug and id, and
//! filterable by category and free text. The same catalog drives a static
//! site and a small CLI.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load        content/  →  Vec<ContentRecord>   (config + validated JSON)
//! 2. Normalize   records   →  Vec<DisplayRecord>   (string ids, categories, steps)
//! 3. Shuffle     seed 42   →  display order        (LCG Fisher-Yates)
//! 4. Index       order     →  Catalog              (by slug, by id, chips)
//! 5. Generate    Catalog   →  dist/                (HTML pages + prompts.json)
//! ```
//!
//! Stages 2-4 are pure and never fail; every source problem is caught once
//! in stage 1.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Reads config and prompt data, rejects duplicate or malformed keys |
//! | [`normalize`] | Raw record → display record |
//! | [`shuffle`] | Seeded LCG and Fisher-Yates shuffle |
//! | [`filter`] | Category/text matching, chip list, count labels |
//! | [`catalog`] | The immutable shuffled collection and its lookup indices |
//! | [`generate`] | Maud-rendered static pages |
//! | [`config`] | `config.toml` loading, merging, validation, CSS variables |
//! | [`types`] | `ContentRecord`, `DisplayRecord`, `StyleClass` |
//! | [`output`] | CLI output formatting |
//!
//! # Display Order Is a Contract
//!
//! Cards appear in a shuffled order that is identical on every build and
//! every platform. The order depends only on the number of records, their
//! order in `prompts.json`, and [`shuffle::CATALOG_SEED`]. Changing any of
//! the three reorders the published gallery.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod generate;
pub mod load;
pub mod normalize;
pub mod output;
pub mod shuffle;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
