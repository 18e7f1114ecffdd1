//! Rows of the metadata editing table and how mutations change them.
//!
//! Failure handling differs per operation and mirrors what the catalog
//! frontend has always done: a failed update reverts the row to its
//! last-known value, while failed adds and deletes leave the table as it was
//! and only surface the error.

use dioxus::logger::tracing::warn;

use crate::api::{MetadataEntry, MetadataRecord, RequestError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    /// Stable handle; `row_id` changes with the value.
    pub key: u64,
    pub field: String,
    pub field_short: String,
    pub value: String,
}

impl MetadataRow {
    pub fn row_id(&self) -> String {
        format!("metadata-row-{}-{}", self.field_short, self.value)
    }

    pub fn delete_button_id(&self) -> String {
        format!("btn-{}-{}", self.field, self.value)
    }

    /// Body identifying this row in update/delete requests.
    pub fn entry(&self) -> MetadataEntry {
        MetadataEntry::new(self.field_short.clone(), self.value.clone())
    }
}

/// An update already applied locally, awaiting the backend's verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub key: u64,
    pub previous: String,
    pub entry: MetadataEntry,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataEditor {
    rows: Vec<MetadataRow>,
    next_key: u64,
    last_error: Option<String>,
}

impl MetadataEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[MetadataRow] {
        &self.rows
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn push(&mut self, record: MetadataRecord) {
        let record = record.normalised();
        self.rows.push(MetadataRow {
            key: self.next_key,
            field: record.field,
            field_short: record.field_short,
            value: record.value,
        });
        self.next_key += 1;
    }

    fn fail(&mut self, action: &str, err: RequestError) {
        warn!(%err, action, "metadata mutation failed");
        self.last_error = Some(err.to_string());
    }

    pub fn load(&mut self, result: Result<Vec<MetadataRecord>, RequestError>) {
        match result {
            Ok(records) => {
                self.rows.clear();
                for record in records {
                    self.push(record);
                }
                self.last_error = None;
            }
            Err(err) => self.fail("load", err),
        }
    }

    /// Append the created item. Failures do not touch the table.
    pub fn apply_created(&mut self, result: Result<Option<MetadataRecord>, RequestError>) -> bool {
        match result {
            Ok(Some(record)) => {
                self.push(record);
                self.last_error = None;
                true
            }
            Ok(None) => {
                warn!("metadata item created but not echoed back; table left unchanged");
                false
            }
            Err(err) => {
                self.fail("create", err);
                false
            }
        }
    }

    /// Optimistically set a row's value. `None` when the row is gone or the
    /// value is unchanged.
    pub fn begin_update(&mut self, key: u64, value: impl Into<String>) -> Option<PendingUpdate> {
        let value = value.into();
        let row = self.rows.iter_mut().find(|row| row.key == key)?;
        if row.value == value {
            return None;
        }

        let previous = std::mem::replace(&mut row.value, value);
        Some(PendingUpdate {
            key,
            previous,
            entry: row.entry(),
        })
    }

    /// Confirm an update, or revert the row to its previous value.
    pub fn apply_updated(
        &mut self,
        pending: PendingUpdate,
        result: Result<Option<MetadataRecord>, RequestError>,
    ) {
        let Some(row) = self.rows.iter_mut().find(|row| row.key == pending.key) else {
            return;
        };

        match result {
            Ok(record) => {
                if let Some(record) = record {
                    row.value = record.value;
                }
                self.last_error = None;
            }
            Err(err) => {
                row.value = pending.previous;
                self.fail("update", err);
            }
        }
    }

    pub fn delete_entry(&self, key: u64) -> Option<MetadataEntry> {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map(MetadataRow::entry)
    }

    /// Remove the row once the backend confirms; keep it otherwise.
    pub fn apply_deleted(&mut self, key: u64, result: Result<(), RequestError>) -> bool {
        match result {
            Ok(()) => {
                let before = self.rows.len();
                self.rows.retain(|row| row.key != key);
                self.last_error = None;
                self.rows.len() != before
            }
            Err(err) => {
                self.fail("delete", err);
                false
            }
        }
    }
}
