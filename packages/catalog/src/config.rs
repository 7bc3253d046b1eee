//! # Front-end configuration: `libris.toml`
//!
//! Read once at startup by the web app (embedded at build time) and handed to
//! the UI through context. Every field has a default, so a missing or empty
//! file is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [list]
//! page_size = 10
//! search_debounce_ms = 500
//! recommended_count = 4
//!
//! [notifications]
//! ttl_ms = 5000
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`LibraryConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Where the library REST service lives. |
//! | [`ListConfig`] | Page size, search debounce and the member dashboard's recommendation count. |
//! | [`NotificationConfig`] | How long a toast stays on screen. |

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `libris.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the library REST service, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows per page on paginated screens. 0 is treated as 1.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Quiet period before a search box value is applied.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Books shown under "Recommended" on the member dashboard.
    #[serde(default = "default_recommended_count")]
    pub recommended_count: usize,
}

fn default_page_size() -> usize {
    10
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_recommended_count() -> usize {
    4
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
            recommended_count: default_recommended_count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

fn default_ttl_ms() -> u64 {
    5000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
        }
    }
}

impl LibraryConfig {
    /// Builder method to point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "libris.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse, falling back to defaults when the document is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid {}: {e}; using defaults", Self::filename());
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Page size with the zero case folded to 1.
    pub fn page_size(&self) -> usize {
        self.list.page_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = LibraryConfig::from_toml("").unwrap();
        assert_eq!(config, LibraryConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.list.search_debounce_ms, 500);
        assert_eq!(config.list.recommended_count, 4);
        assert_eq!(config.notifications.ttl_ms, 5000);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = LibraryConfig::from_toml(
            r#"
            [api]
            base_url = "https://library.example.org"

            [list]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://library.example.org");
        assert_eq!(config.list.page_size, 25);
        assert_eq!(config.list.search_debounce_ms, 500);
        assert_eq!(config.notifications.ttl_ms, 5000);
    }

    #[test]
    fn test_malformed_document_falls_back() {
        let config = LibraryConfig::from_toml_or_default("[list]\npage_size = \"ten\"");
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_zero_page_size_folds_to_one() {
        let config = LibraryConfig::from_toml("[list]\npage_size = 0").unwrap();
        assert_eq!(config.page_size(), 1);
    }

    #[test]
    fn test_roundtrip() {
        let config = LibraryConfig::default().with_base_url("http://10.0.0.2:9000");
        let text = config.to_toml().unwrap();
        assert_eq!(LibraryConfig::from_toml(&text).unwrap(), config);
    }
}
