//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root and is sparse: stock defaults are overridden only by the
//! keys it sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [posts]
//! words_per_minute = 200            # Reading speed for computed reading times
//! brief_max_chars = 160             # Cap on body-derived briefs
//! external_id_prefix = "freecodecamp-"  # Namespace for feed post ids
//! placeholder_title = "Untitled"    # Title for posts that have none
//!
//! [images]
//! optimized_host_suffixes = [".r2.dev", ".r2.cloudflarestorage.com"]
//! asset_subdomains = ["assets", "images"]
//! resize_path_prefixes = ["/cdn-cgi/image/"]
//! legacy_cdn_hosts = ["cdn.hashnode.com"]
//!
//! [pagination]
//! posts_per_page = 12
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only change the reading speed
//! [posts]
//! words_per_minute = 250
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Post normalization settings.
    pub posts: PostsConfig,
    /// Image origin lists for the URL classifier.
    pub images: ImagesConfig,
    /// Blog index pagination.
    pub pagination: PaginationConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "posts.words_per_minute must be greater than 0".into(),
            ));
        }
        if self.posts.brief_max_chars == 0 {
            return Err(ConfigError::Validation(
                "posts.brief_max_chars must be greater than 0".into(),
            ));
        }
        if self.posts.external_id_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "posts.external_id_prefix must not be empty".into(),
            ));
        }
        if self.pagination.posts_per_page == 0 {
            return Err(ConfigError::Validation(
                "pagination.posts_per_page must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Post normalization settings shared by both normalizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostsConfig {
    /// Reading speed used when a post has no explicit reading time.
    pub words_per_minute: u32,
    /// Maximum length, in characters, of a brief taken from the body.
    pub brief_max_chars: usize,
    /// Prepended to feed entry ids so they never collide with local ids.
    pub external_id_prefix: String,
    /// Title used when the source has none.
    pub placeholder_title: String,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            brief_max_chars: 160,
            external_id_prefix: "freecodecamp-".to_string(),
            placeholder_title: "Untitled".to_string(),
        }
    }
}

/// Origins known to the image URL classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Object-storage host suffixes whose images are already optimized.
    pub optimized_host_suffixes: Vec<String>,
    /// First host labels that mark a custom asset subdomain (`assets.example.com`).
    pub asset_subdomains: Vec<String>,
    /// Path prefixes served by the image-resizing edge service.
    pub resize_path_prefixes: Vec<String>,
    /// Legacy content-CDN hosts that upstream normalization should have rewritten.
    pub legacy_cdn_hosts: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            optimized_host_suffixes: vec![
                ".r2.dev".to_string(),
                ".r2.cloudflarestorage.com".to_string(),
            ],
            asset_subdomains: vec!["assets".to_string(), "images".to_string()],
            resize_path_prefixes: vec!["/cdn-cgi/image/".to_string()],
            legacy_cdn_hosts: vec!["cdn.hashnode.com".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub posts_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { posts_per_page: 12 }
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
/// - Non-table values in overlay replace base values entirely, so an
///   overlay list replaces the stock list rather than extending it.
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
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), "loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content root (next to your markdown posts).
# Only the keys you set override the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Post normalization
# ---------------------------------------------------------------------------
[posts]
# Reading speed used to compute reading time when a post doesn't set one.
words_per_minute = 200

# Maximum characters of a brief taken from the first body line.
brief_max_chars = 160

# Prefix for feed post ids, keeps them distinct from local post ids.
external_id_prefix = "freecodecamp-"

# Title shown for posts that don't have one.
placeholder_title = "Untitled"

# ---------------------------------------------------------------------------
# Image URL classification
# ---------------------------------------------------------------------------
[images]
# Object-storage hosts serving already-optimized images.
optimized_host_suffixes = [".r2.dev", ".r2.cloudflarestorage.com"]

# Custom asset subdomains (first host label), e.g. assets.example.com.
asset_subdomains = ["assets", "images"]

# Path prefixes handled by the image-resizing edge service.
resize_path_prefixes = ["/cdn-cgi/image/"]

# Legacy CDN hosts. Images from these pass through with a warning.
legacy_cdn_hosts = ["cdn.hashnode.com"]

# ---------------------------------------------------------------------------
# Blog index
# ---------------------------------------------------------------------------
[pagination]
posts_per_page = 12
"##
}
