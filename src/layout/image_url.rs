//! Cover image URL classification.
//!
//! Resizing happens in an external edge service, so this module never rewrites
//! a URL. It decides whether a URL is usable at all and reports origins that
//! upstream normalization should already have migrated:
//!
//! | Origin | Result | Diagnostic |
//! |---|---|---|
//! | empty / malformed | `None` | error |
//! | optimized object storage or asset subdomain | unchanged | — |
//! | image-resizing path prefix | unchanged | — |
//! | legacy content CDN | unchanged | warning |
//! | anything else | unchanged | — |
//!
//! Classification is plain string and host matching; no regexes, no I/O.

use super::ImageDimensions;
use crate::config::ImagesConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Requested output format. Carried for interface stability; the edge
/// service negotiates the actual format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Webp,
    Avif,
    #[default]
    Auto,
}

/// Where a well-formed image URL points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    OptimizedStorage,
    ResizePath,
    LegacyCdn,
    Other,
}

impl ImageOrigin {
    pub fn label(self) -> &'static str {
        match self {
            ImageOrigin::OptimizedStorage => "optimized storage",
            ImageOrigin::ResizePath => "image-resizing path",
            ImageOrigin::LegacyCdn => "legacy CDN",
            ImageOrigin::Other => "other",
        }
    }
}

/// Classifies cover image URLs against a set of known origins.
pub struct ImageUrlClassifier<'a> {
    origins: &'a ImagesConfig,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> ImageUrlClassifier<'a> {
    pub fn new(origins: &'a ImagesConfig, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            origins,
            diagnostics,
        }
    }

    /// Classify a URL. Returns `None` when it is empty or malformed.
    ///
    /// Root-relative URLs (`/cdn-cgi/image/...`) are classified by path only.
    pub fn classify(&self, url: &str) -> Option<ImageOrigin> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        if url.starts_with('/') && !url.starts_with("//") {
            return Some(if self.is_resize_path(url) {
                ImageOrigin::ResizePath
            } else {
                ImageOrigin::Other
            });
        }

        let parsed = if url.starts_with("//") {
            Url::parse(&format!("https:{url}"))
        } else {
            Url::parse(url)
        }
        .ok()?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let host = parsed.host_str()?;

        if self.is_optimized_host(host) {
            Some(ImageOrigin::OptimizedStorage)
        } else if self.is_resize_path(parsed.path()) {
            Some(ImageOrigin::ResizePath)
        } else if self.is_legacy_host(host) {
            Some(ImageOrigin::LegacyCdn)
        } else {
            Some(ImageOrigin::Other)
        }
    }

    /// Pass a cover image URL through, or reject it.
    ///
    /// `dimensions` and `format` do not change the result; the edge service
    /// resizes from the URL alone.
    pub fn transform(
        &self,
        source: Option<&str>,
        _dimensions: &ImageDimensions,
        _format: ImageFormat,
    ) -> Option<String> {
        let Some(source) = source else {
            self.diagnostics.error("missing image URL", "");
            return None;
        };

        let Some(origin) = self.classify(source) else {
            self.diagnostics.error("invalid image URL", source);
            return None;
        };

        let url = source.trim();
        if origin == ImageOrigin::LegacyCdn {
            self.diagnostics.warn(
                "legacy CDN image URL reached the classifier; expected it to be migrated upstream",
                url,
            );
        }
        Some(url.to_string())
    }

    fn is_optimized_host(&self, host: &str) -> bool {
        if self
            .origins
            .optimized_host_suffixes
            .iter()
            .any(|suffix| host.ends_with(suffix.as_str()))
        {
            return true;
        }
        let mut labels = host.split('.');
        let first = labels.next().unwrap_or_default();
        labels.count() >= 2 && self.origins.asset_subdomains.iter().any(|s| s == first)
    }

    fn is_resize_path(&self, path: &str) -> bool {
        self.origins
            .resize_path_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    fn is_legacy_host(&self, host: &str) -> bool {
        self.origins.legacy_cdn_hosts.iter().any(|legacy| {
            host == legacy
                || host
                    .strip_suffix(legacy.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}

static STOCK_ORIGINS: LazyLock<ImagesConfig> = LazyLock::new(ImagesConfig::default);

/// Classify with the stock origin lists, reporting through `tracing`.
pub fn transform_image_url(
    source: Option<&str>,
    dimensions: &ImageDimensions,
    format: ImageFormat,
) -> Option<String> {
    ImageUrlClassifier::new(&STOCK_ORIGINS, &TracingDiagnostics).transform(source, dimensions, format)
}
