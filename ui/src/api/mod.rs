//! HTTP access to the catalog REST API.

mod csrf;
pub use csrf::{cookie_value, CSRF_HEADER};

mod response;
pub use response::{
    Envelope, Listing, ListingData, MetadataEntry, MetadataRecord, QueryResult, RawResponse,
};

use dioxus::logger::tracing::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use thiserror::Error;

use crate::core::config::ExplorerConfig;
use crate::core::platform;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    #[error("Invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("No element with id `{0}` on the page")]
    ElementMissing(String),
}

/// Issues requests against the catalog API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    csrf_cookie: String,
    csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            client: Client::new(),
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_token: None,
        }
    }

    /// Use a fixed token instead of reading the cookie jar.
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.csrf_token.clone().or_else(|| {
            platform::document_cookies().and_then(|cookies| cookie_value(&cookies, &self.csrf_cookie))
        })
    }

    /// GET returning JSON when the response declares it, text otherwise.
    pub async fn fetch_json_or_text(&self, url: &str) -> Result<QueryResult, RequestError> {
        self.get(url).await?.into_query_result()
    }

    /// GET an enveloped listing (`metadata/`, `datasets/`).
    pub async fn fetch_listing(&self, url: &str) -> Result<Listing, RequestError> {
        self.get(url).await?.into_listing()
    }

    pub async fn fetch_quality(&self, url: &str) -> Result<u32, RequestError> {
        self.get(url).await?.into_quality()
    }

    pub async fn fetch_internal_metadata(&self, url: &str) -> Result<Vec<Vec<String>>, RequestError> {
        self.get(url).await?.into_internal_metadata()
    }

    pub async fn fetch_metadata_records(&self, url: &str) -> Result<Vec<MetadataRecord>, RequestError> {
        self.get(url).await?.into_metadata_records()
    }

    pub async fn post_metadata(
        &self,
        url: &str,
        entry: &MetadataEntry,
    ) -> Result<Option<MetadataRecord>, RequestError> {
        let record: Option<MetadataRecord> =
            self.mutate(Method::POST, url, entry).await?.into_mutation()?;
        Ok(record.map(MetadataRecord::normalised))
    }

    pub async fn update_metadata(
        &self,
        url: &str,
        entry: &MetadataEntry,
    ) -> Result<Option<MetadataRecord>, RequestError> {
        let record: Option<MetadataRecord> =
            self.mutate(Method::PUT, url, entry).await?.into_mutation()?;
        Ok(record.map(MetadataRecord::normalised))
    }

    pub async fn delete_metadata(&self, url: &str, entry: &MetadataEntry) -> Result<(), RequestError> {
        self.mutate(Method::DELETE, url, entry)
            .await?
            .into_mutation::<Value>()
            .map(|_| ())
    }

    async fn get(&self, url: &str) -> Result<RawResponse, RequestError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        read_response(response).await
    }

    async fn mutate(
        &self,
        method: Method,
        url: &str,
        entry: &MetadataEntry,
    ) -> Result<RawResponse, RequestError> {
        debug!(%method, %url, field = %entry.field, "metadata mutation");
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(entry);

        match self.csrf_token() {
            Some(token) => request = request.header(CSRF_HEADER, token),
            None => warn!(cookie = %self.csrf_cookie, "no CSRF token available; sending without one"),
        }

        read_response(request.send().await?).await
    }
}

async fn read_response(response: Response) -> Result<RawResponse, RequestError> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().await?;

    Ok(RawResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        content_type,
        body,
    })
}
