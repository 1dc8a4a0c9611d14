//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top, so a config
//! file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! author = ""
//! tagline = ""
//! email = ""
//!
//! [gallery]
//! heading = "A.I. Prompts I Am Using"
//! subtitle = ""
//! search_placeholder = "Search prompts..."
//! data_file = "prompts.json"   # Relative to the content directory
//!
//! [[links]]
//! label = "Contact"
//! url = "/contact/"
//! external = false
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! link = "#333333"
//! pill_blue = "#dbeafe"
//! pill_green = "#dcfce7"
//! pill_purple = "#ede9fe"
//! pill_neutral = "#f4f4f5"
//!
//! [colors.dark]
//! # same keys as [colors.light]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::StyleClass;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity shown in the header and footer.
    pub site: SiteInfo,
    /// Prompt gallery settings.
    pub gallery: GalleryConfig,
    /// Header navigation links, in display order.
    pub links: Vec<NavLink>,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.gallery.data_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.data_file must not be empty".into(),
            ));
        }
        for (idx, link) in self.links.iter().enumerate() {
            if link.label.trim().is_empty() || link.url.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "links[{idx}] needs both a label and a url"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub email: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),
            tagline: String::new(),
            email: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Section heading above the card grid.
    pub heading: String,
    /// Optional paragraph under the heading.
    pub subtitle: String,
    /// Placeholder text of the search box.
    pub search_placeholder: String,
    /// Prompt data file, relative to the content directory.
    pub data_file: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            heading: "A.I. Prompts I Am Using".to_string(),
            subtitle: String::new(),
            search_placeholder: "Search prompts...".to_string(),
            data_file: "prompts.json".to_string(),
        }
    }
}

/// A header navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub url: String,
    /// Open in a new tab with `rel="noopener noreferrer"`.
    #[serde(default)]
    pub external: bool,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Descriptions, tags, result count.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub pill_blue: String,
    pub pill_green: String,
    pub pill_purple: String,
    pub pill_neutral: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#333333".to_string(),
            pill_blue: "#dbeafe".to_string(),
            pill_green: "#dcfce7".to_string(),
            pill_purple: "#ede9fe".to_string(),
            pill_neutral: "#f4f4f5".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#cccccc".to_string(),
            pill_blue: "#1e3a5f".to_string(),
            pill_green: "#14532d".to_string(),
            pill_purple: "#3b0764".to_string(),
            pill_neutral: "#27272a".to_string(),
        }
    }

    /// Pill background for a style class.
    pub fn pill(&self, class: StyleClass) -> &str {
        match class {
            StyleClass::Blue => &self.pill_blue,
            StyleClass::Green => &self.pill_green,
            StyleClass::Purple => &self.pill_purple,
            StyleClass::Neutral => &self.pill_neutral,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value (arrays included)
/// replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `config.toml` from a directory as a raw TOML value, if present.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# promptfolio configuration
# =========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity (header brand and footer)
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
author = ""
tagline = ""
email = ""

# ---------------------------------------------------------------------------
# Prompt gallery
# ---------------------------------------------------------------------------
[gallery]
heading = "A.I. Prompts I Am Using"
subtitle = ""
search_placeholder = "Search prompts..."
# Prompt data, relative to the content directory.
data_file = "prompts.json"

# ---------------------------------------------------------------------------
# Header links (repeat the block for each link, in display order)
# ---------------------------------------------------------------------------
# [[links]]
# label = "Resume"
# url = "/resume.pdf"
# external = true

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"
border = "#e0e0e0"
link = "#333333"
pill_blue = "#dbeafe"
pill_green = "#dcfce7"
pill_purple = "#ede9fe"
pill_neutral = "#f4f4f5"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
link = "#cccccc"
pill_blue = "#1e3a5f"
pill_green = "#14532d"
pill_purple = "#3b0764"
pill_neutral = "#27272a"
"##
}

fn scheme_css(scheme: &ColorScheme, indent: &str) -> String {
    let mut lines = vec![
        format!("{indent}--color-bg: {};", scheme.background),
        format!("{indent}--color-text: {};", scheme.text),
        format!("{indent}--color-text-muted: {};", scheme.text_muted),
        format!("{indent}--color-border: {};", scheme.border),
        format!("{indent}--color-link: {};", scheme.link),
    ];
    for class in StyleClass::ALL {
        lines.push(format!("{indent}--pill-{}: {};", class, scheme.pill(class)));
    }
    lines.join("\n")
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{light}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{dark}\n    }}\n}}",
        light = scheme_css(&colors.light, "    "),
        dark = scheme_css(&colors.dark, "        "),
    )
}
