//! Explorer configuration: where the data source lives and how to reach it.

use thiserror::Error;
use url::form_urlencoded;

use super::platform;

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no data source URL configured (expected `{0}`)")]
    MissingDatasourceUrl(&'static str),
}

/// Everything the explorer needs to know about the backend. Built once at
/// launch and handed to the session and the API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Data-source root, always ending in `/`.
    pub datasource_url: String,
    /// Collection endpoint for metadata items (add/update/delete).
    pub metadata_url: String,
    /// Quality-level endpoint feeding the badge.
    pub rating_url: String,
    /// Name of the cookie holding the CSRF token.
    pub csrf_cookie: String,
    /// Parameter names suggested in the query builder.
    pub suggested_params: Vec<String>,
}

impl ExplorerConfig {
    pub fn new(datasource_url: impl Into<String>) -> Self {
        let datasource_url = with_trailing_slash(datasource_url.into());
        Self {
            metadata_url: format!("{datasource_url}metadata/"),
            rating_url: format!("{datasource_url}quality/"),
            datasource_url,
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            suggested_params: Vec::new(),
        }
    }

    /// Read configuration from the host page (web) or environment (native).
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(platform::config_value)?;
        Ok(config.resolved_against(platform::page_origin().as_deref()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let datasource_url = non_empty("datasource-url")
            .ok_or(ConfigError::MissingDatasourceUrl("datasource-url"))?;
        let mut config = Self::new(datasource_url.trim());

        if let Some(url) = non_empty("metadata-url") {
            config.metadata_url = with_trailing_slash(url.trim().to_string());
        }
        if let Some(url) = non_empty("rating-url") {
            config.rating_url = url.trim().to_string();
        }
        if let Some(name) = non_empty("csrf-cookie") {
            config.csrf_cookie = name.trim().to_string();
        }
        if let Some(raw) = non_empty("query-params") {
            config.suggested_params = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    /// Prefix root-relative URLs (`/api/...`) with `origin`; the HTTP client
    /// only accepts absolute URLs.
    pub fn resolved_against(mut self, origin: Option<&str>) -> Self {
        if let Some(origin) = origin {
            let origin = origin.trim_end_matches('/');
            for url in [
                &mut self.datasource_url,
                &mut self.metadata_url,
                &mut self.rating_url,
            ] {
                if url.starts_with('/') {
                    *url = format!("{origin}{url}");
                }
            }
        }
        self
    }

    /// URL of a single metadata item under the metadata collection.
    pub fn metadata_item_url(&self, key: &str) -> String {
        format!("{}{key}/", self.metadata_url)
    }

    /// PUT target for changing one value of a field. A field may hold several
    /// values, so the value being replaced travels as `?previous=`.
    pub fn metadata_update_url(&self, key: &str, previous: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("previous", previous)
            .finish();
        format!("{}?{query}", self.metadata_item_url(key))
    }

    /// DELETE target. Items are identified by the `{field, value}` body, not
    /// the path.
    pub fn metadata_delete_url(&self) -> &str {
        &self.metadata_url
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
