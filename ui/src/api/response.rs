//! Interpretation of backend responses.
//!
//! Everything here is pure: the client turns an HTTP exchange into a
//! [`RawResponse`] and the conversions below decide what it means.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::RequestError;
use crate::core::format::{cell_text, pretty_json};

/// Status, content type and body of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }

    fn status_error(&self) -> RequestError {
        let status_text = if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            self.status_text.clone()
        };
        RequestError::HttpStatus {
            status: self.status,
            status_text,
        }
    }

    fn ensure_success(&self) -> Result<(), RequestError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.status_error())
        }
    }

    /// Data endpoint: JSON when declared as such, raw text otherwise.
    pub fn into_query_result(self) -> Result<QueryResult, RequestError> {
        self.ensure_success()?;
        if self.is_json() {
            Ok(QueryResult::Json(serde_json::from_str(&self.body)?))
        } else {
            Ok(QueryResult::Text(self.body))
        }
    }

    /// `{status, data, message}` envelope. Error envelopes are often sent
    /// with a 4xx status, so the body is read before the status is checked.
    pub fn into_listing(self) -> Result<Listing, RequestError> {
        match serde_json::from_str::<Envelope<Value>>(&self.body) {
            Ok(envelope) => Ok(Listing::from_envelope(envelope)),
            Err(_) if !self.is_success() => Err(self.status_error()),
            Err(err) => Err(err.into()),
        }
    }

    /// `{quality: n}` from the rating endpoint.
    pub fn into_quality(self) -> Result<u32, RequestError> {
        #[derive(Deserialize)]
        struct QualityLevel {
            quality: u32,
        }

        self.ensure_success()?;
        let level: QualityLevel = serde_json::from_str(&self.body)?;
        Ok(level.quality)
    }

    /// `{metadata_items: [{field: {name}, value}]}` served at the data-source
    /// root, as `[field name, value]` rows.
    pub fn into_internal_metadata(self) -> Result<Vec<Vec<String>>, RequestError> {
        #[derive(Deserialize)]
        struct InternalMetadata {
            metadata_items: Vec<Item>,
        }
        #[derive(Deserialize)]
        struct Item {
            field: Field,
            value: Value,
        }
        #[derive(Deserialize)]
        struct Field {
            name: String,
        }

        self.ensure_success()?;
        let metadata: InternalMetadata = serde_json::from_str(&self.body)?;
        Ok(metadata
            .metadata_items
            .into_iter()
            .map(|item| vec![item.field.name, cell_text(&item.value)])
            .collect())
    }

    /// Metadata items, either a bare array or wrapped in an envelope.
    pub fn into_metadata_records(self) -> Result<Vec<MetadataRecord>, RequestError> {
        self.ensure_success()?;
        let value: Value = serde_json::from_str(&self.body)?;
        let records: Vec<MetadataRecord> = if value.get("status").is_some() {
            serde_json::from_value::<Envelope<Vec<MetadataRecord>>>(value)?
                .into_result()?
                .unwrap_or_default()
        } else {
            serde_json::from_value(value)?
        };
        Ok(records.into_iter().map(MetadataRecord::normalised).collect())
    }

    /// Result of a POST/PUT/DELETE. An empty 2xx body (e.g. `204 No Content`)
    /// is a success without payload.
    pub fn into_mutation<T: DeserializeOwned>(self) -> Result<Option<T>, RequestError> {
        self.ensure_success()?;
        if self.body.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(&self.body)?;
        if value.get("status").is_some() {
            serde_json::from_value::<Envelope<T>>(value)?.into_result()
        } else {
            Ok(Some(serde_json::from_value(value)?))
        }
    }
}

/// `{status, data, message}` wrapper used by the catalog API.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn into_result(self) -> Result<Option<T>, RequestError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(RequestError::Rejected(
                self.message.unwrap_or_else(|| self.status.clone()),
            ))
        }
    }
}

/// Response of the data endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Json(Value),
    Text(String),
}

impl QueryResult {
    pub fn display_text(&self) -> String {
        match self {
            Self::Json(value) => pretty_json(value),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Payload of a successful listing. Backends send either shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingData {
    Sequence(Vec<Value>),
    Mapping(Vec<(String, Value)>),
}

impl ListingData {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Mapping(map.into_iter().collect()),
            Value::Null => Self::Sequence(Vec::new()),
            scalar => Self::Sequence(vec![scalar]),
        }
    }

    /// One row per item; mappings render as `[key, value]`.
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            Self::Sequence(items) => items.iter().map(|item| vec![cell_text(item)]).collect(),
            Self::Mapping(entries) => entries
                .iter()
                .map(|(key, value)| vec![key.clone(), cell_text(value)])
                .collect(),
        }
    }

    /// Item names: sequence items as text, mapping keys.
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::Sequence(items) => items.iter().map(cell_text).collect(),
            Self::Mapping(entries) => entries.iter().map(|(key, _)| key.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Items(ListingData),
    Message(String),
    Empty,
}

impl Listing {
    pub fn from_envelope(envelope: Envelope<Value>) -> Self {
        if envelope.is_success() {
            let data = envelope.data.unwrap_or(Value::Null);
            return Self::Items(ListingData::from_value(data));
        }
        match envelope.message {
            Some(message) if !message.is_empty() => Self::Message(message),
            _ => Self::Empty,
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            Self::Items(data) => data.rows(),
            Self::Message(message) => vec![vec![message.clone()]],
            Self::Empty => Vec::new(),
        }
    }
}

/// Body of metadata mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    pub field: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A stored metadata item as echoed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetadataRecord {
    pub field: String,
    #[serde(default)]
    pub field_short: String,
    pub value: String,
}

impl MetadataRecord {
    /// Records without a short field name fall back to the full name.
    pub fn normalised(mut self) -> Self {
        if self.field_short.is_empty() {
            self.field_short = self.field.clone();
        }
        self
    }
}
