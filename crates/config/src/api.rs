//! Employee endpoint configuration.
//!
//! This module provides the [`ApiConfig`] type which locates the REST
//! collection the application lists employees from and posts new
//! employees to.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default server base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default collection name, used both as the URL path segment and as the
/// key of the embedded list in the listing response.
pub const DEFAULT_COLLECTION: &str = "users";

/// Location of the employee collection.
///
/// # Examples
///
/// ```
/// use roster_config::ApiConfig;
///
/// let api = ApiConfig::default();
/// assert_eq!(api.collection_url(), "http://localhost:8080/users");
///
/// let api = ApiConfig::new("https://hr.example.com/api/", "staff");
/// assert_eq!(api.collection_url(), "https://hr.example.com/api/staff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host, port and optional path prefix of the server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the employee collection.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
        }
    }
}

impl ApiConfig {
    /// Creates an endpoint configuration from a base URL and collection name.
    #[must_use]
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: collection.into(),
        }
    }

    /// Returns the collection URL, joining base and collection with exactly
    /// one `/`.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection
        )
    }

    /// Validates the endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base URL is not an
    /// `http://` or `https://` URL, and [`ConfigError::InvalidCollection`] if
    /// the collection name is empty or contains a `/`.
    pub fn validate(&self) -> Result<()> {
        let has_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| self.base_url.starts_with(scheme));
        let has_host = self
            .base_url
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.trim_matches('/').is_empty());
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }

        if self.collection.is_empty() || self.collection.contains('/') {
            return Err(ConfigError::InvalidCollection(self.collection.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "http://localhost:8080");
        assert_eq!(api.collection, "users");
        assert!(api.validate().is_ok());
    }

    #[test]
    fn collection_url_trims_trailing_slashes() {
        let api = ApiConfig::new("http://localhost:8080//", "users");
        assert_eq!(api.collection_url(), "http://localhost:8080/users");
    }

    #[test]
    fn validate_rejects_missing_scheme() {
        let api = ApiConfig::new("http//localhost:8080", "users");
        assert!(matches!(
            api.validate(),
            Err(ConfigError::InvalidBaseUrl(url)) if url == "http//localhost:8080"
        ));
    }

    #[test]
    fn validate_rejects_missing_host() {
        let api = ApiConfig::new("https://", "users");
        assert!(api.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_collection() {
        assert!(ApiConfig::new(DEFAULT_BASE_URL, "").validate().is_err());
        assert!(ApiConfig::new(DEFAULT_BASE_URL, "a/b").validate().is_err());
    }

    #[test]
    fn deserialize_with_defaults() {
        let api: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(api, ApiConfig::default());

        let api: ApiConfig = serde_json::from_str(r#"{"collection": "staff"}"#).unwrap();
        assert_eq!(api.base_url, DEFAULT_BASE_URL);
        assert_eq!(api.collection, "staff");
    }
}
