//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://golfspaescapes.com"   # Absolute origin used in sitemap URLs
//! name = "GolfSpaEscapes"              # Shown in the startup banner
//! admin_page = "admin/publish.html"    # Publishing UI under the public dir
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Public site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Production origin, without trailing slash once normalized.
    pub url: String,

    /// Display name.
    pub name: String,

    /// Path of the admin publishing page, relative to the public root.
    pub admin_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://golfspaescapes.com".to_string(),
            name: "GolfSpaEscapes".to_string(),
            admin_page: "admin/publish.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// Site origin with any trailing slash removed.
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| ConfigError::Validation(format!("site.url `{}`: {e}", self.url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "site.url `{}` must use http or https",
                self.url
            )));
        }
        Ok(())
    }
}
