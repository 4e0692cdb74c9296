//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` from the content
//! root. Stock defaults are the base layer; the user's file only needs the
//! values it wants to override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! name = "Studio"
//! title = "Studio - Product Design Portfolio"
//! description = "Product design portfolio"
//! url = "https://example.com"
//!
//! [author]
//! name = "Your Name"
//! email = "hello@example.com"
//! phone = ""
//! location = ""
//!
//! [[social]]
//! platform = "LinkedIn"
//! url = "https://linkedin.com/in/example"
//! username = "example"
//!
//! [[navigation]]
//! id = "home"            # Must be a known page id
//! label = "Home"
//! href = "/"
//!
//! [theme.colors]
//! primary = "#111827"
//! accent = "#2563eb"
//!
//! [theme.fonts]
//! sans = "Inter, system-ui, sans-serif"
//!
//! [carousel]
//! autoplay = true
//! interval_ms = 6000     # Time between automatic slides
//! settle_ms = 300        # Input ignored this long after a slide change
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! # Only override the accent color
//! [theme.colors]
//! accent = "#0e7490"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Note that specifying any
//! `[[navigation]]` or `[[social]]` entry replaces the whole list; arrays
//! are values, not merge points.

use crate::cycle::CarouselOptions;
use crate::route;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Short site name, used as the header brand.
    pub name: String,
    /// Full site title.
    pub title: String,
    /// Site description for metadata fallbacks.
    pub description: String,
    /// Canonical site URL.
    pub url: String,
    /// Author and contact details.
    pub author: AuthorConfig,
    /// Social links, in display order.
    pub social: Vec<SocialLink>,
    /// Navigation entries, in display order.
    pub navigation: Vec<NavEntry>,
    /// Theme tokens rendered into CSS custom properties.
    pub theme: ThemeConfig,
    /// Carousel timing.
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Studio".to_string(),
            title: "Studio - Product Design Portfolio".to_string(),
            description: "Product design portfolio".to_string(),
            url: "https://example.com".to_string(),
            author: AuthorConfig::default(),
            social: Vec::new(),
            navigation: default_navigation(),
            theme: ThemeConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values after merging.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("name must not be empty".into()));
        }
        if self.navigation.is_empty() {
            return Err(ConfigError::Validation(
                "navigation must not be empty".into(),
            ));
        }
        let mut seen = BTreeSet::new();
        for entry in &self.navigation {
            if !route::NAV_PAGE_IDS.contains(&entry.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "unknown navigation id '{}' (known: {})",
                    entry.id,
                    route::NAV_PAGE_IDS.join(", ")
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate navigation id '{}'",
                    entry.id
                )));
            }
        }
        if self.theme.colors.primary.trim().is_empty() || self.theme.colors.accent.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "theme.colors values must not be empty".into(),
            ));
        }
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval_ms must be greater than zero".into(),
            ));
        }
        if self.carousel.settle_ms == 0 || self.carousel.settle_ms >= self.carousel.interval_ms {
            return Err(ConfigError::Validation(
                "carousel.settle_ms must be nonzero and smaller than interval_ms".into(),
            ));
        }
        Ok(())
    }
}

/// Author and contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            email: "hello@example.com".to_string(),
            phone: String::new(),
            location: String::new(),
        }
    }
}

/// A social profile link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub username: String,
}

/// One navigation entry. `id` must name a known page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub href: String,
}

fn default_navigation() -> Vec<NavEntry> {
    let labels = [
        ("home", "Home"),
        ("portfolio", "Work"),
        ("case-studies", "Case Studies"),
        ("about", "About"),
        ("contact", "Contact"),
    ];
    labels
        .into_iter()
        .map(|(id, label)| NavEntry {
            id: id.to_string(),
            label: label.to_string(),
            href: route::Page::resolve(id, None).href(),
        })
        .collect()
}

/// Theme tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub colors: ColorConfig,
    pub fonts: FontConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Primary brand color (headings, buttons).
    pub primary: String,
    /// Accent color (links, highlights).
    pub accent: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#111827".to_string(),
            accent: "#2563eb".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub sans: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            sans: "Inter, system-ui, sans-serif".to_string(),
        }
    }
}

/// Carousel timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Advance automatically on the home-page carousel.
    pub autoplay: bool,
    /// Milliseconds between automatic slides.
    pub interval_ms: u64,
    /// Milliseconds during which input is ignored after a slide change.
    pub settle_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: 6000,
            settle_ms: 300,
        }
    }
}

impl CarouselConfig {
    /// Bridge to the runtime carousel options.
    pub fn options(&self) -> CarouselOptions {
        CarouselOptions {
            autoplay: self.autoplay,
            interval: Duration::from_millis(self.interval_ms),
            settle: Duration::from_millis(self.settle_ms),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
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

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio-gen Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Note: listing any [[navigation]] or [[social]] entry replaces the whole
# default list.

# Site identity
name = "Studio"
title = "Studio - Product Design Portfolio"
description = "Product design portfolio"
url = "https://example.com"

# ---------------------------------------------------------------------------
# Author and contact details (shown on the contact page)
# ---------------------------------------------------------------------------
[author]
name = "Your Name"
email = "hello@example.com"
phone = ""
location = ""

# ---------------------------------------------------------------------------
# Social links - repeat the block per profile
# ---------------------------------------------------------------------------
# [[social]]
# platform = "LinkedIn"
# url = "https://linkedin.com/in/example"
# username = "example"

# ---------------------------------------------------------------------------
# Navigation - repeat the block per entry, in display order.
# id must be one of: home, about, portfolio, case-studies, contact
# ---------------------------------------------------------------------------
[[navigation]]
id = "home"
label = "Home"
href = "/"

[[navigation]]
id = "portfolio"
label = "Work"
href = "/portfolio/"

[[navigation]]
id = "case-studies"
label = "Case Studies"
href = "/case-studies/"

[[navigation]]
id = "about"
label = "About"
href = "/about/"

[[navigation]]
id = "contact"
label = "Contact"
href = "/contact/"

# ---------------------------------------------------------------------------
# Theme tokens, rendered as CSS custom properties
# ---------------------------------------------------------------------------
[theme.colors]
primary = "#111827"
accent = "#2563eb"

[theme.fonts]
sans = "Inter, system-ui, sans-serif"

# ---------------------------------------------------------------------------
# Home-page carousel timing
# ---------------------------------------------------------------------------
[carousel]
autoplay = true
interval_ms = 6000    # Time between automatic slides
settle_ms = 300       # Input ignored this long after a slide change
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-accent: {accent};
    --font-sans: {sans};
}}"#,
        primary = theme.colors.primary,
        accent = theme.colors.accent,
        sans = theme.fonts.sans,
    )
}
