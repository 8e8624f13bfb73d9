//! JSON document store rooted at the data directory.

use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{io_error, write_json_atomic, MESSAGES_FILENAME, SITE_DATA_FILENAME};
use crate::errors::AppError;
use crate::models::{sort_newest_first, MessageRecord};

/// Reads and writes the JSON documents under one directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a document in this store.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Location of the backup copy kept for a document.
    pub fn backup_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.bak", name))
    }

    /// Load and parse a document. Returns `Ok(None)` when the file does not exist.
    pub async fn load_document<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, AppError> {
        let path = self.path(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error("read", &path, e)),
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            tracing::error!("Failed to parse {}: {}", path.display(), e);
            AppError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Back up the current version of a document, then atomically replace it.
    ///
    /// The backup is best effort: if copying fails the save still goes ahead.
    pub async fn save_document<T: Serialize + ?Sized>(
        &self,
        name: &str,
        payload: &T,
    ) -> Result<(), AppError> {
        let path = self.path(name);
        self.backup(name, &path).await;
        write_json_atomic(&path, payload).await?;
        tracing::debug!("Saved {}", path.display());
        Ok(())
    }

    async fn backup(&self, name: &str, path: &Path) {
        match tokio::fs::try_exists(path).await {
            Ok(true) => {
                let backup_path = self.backup_path(name);
                if let Err(e) = tokio::fs::copy(path, &backup_path).await {
                    tracing::warn!(
                        "Failed to back up {} to {}: {}",
                        path.display(),
                        backup_path.display(),
                        e
                    );
                }
            }
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to check {} before backup: {}", path.display(), e),
        }
    }

    // ==================== SITE DOCUMENT ====================

    /// Load the raw site document exactly as stored.
    pub async fn load_site_data(&self) -> Result<Option<Value>, AppError> {
        self.load_document(SITE_DATA_FILENAME).await
    }

    pub async fn save_site_data(&self, document: &Value) -> Result<(), AppError> {
        self.save_document(SITE_DATA_FILENAME, document).await
    }

    // ==================== MESSAGES ====================

    /// Load the stored message records as raw JSON, in append order.
    ///
    /// A missing or unreadable file, or one that is not a JSON array, yields an
    /// empty collection. Individual records are not checked here, so a record
    /// that does not match [`MessageRecord`] survives the next append untouched.
    pub async fn load_raw_messages(&self) -> Vec<Value> {
        match self.load_document::<Value>(MESSAGES_FILENAME).await {
            Ok(Some(Value::Array(records))) => records,
            Ok(Some(_)) => {
                tracing::warn!("{} is not a JSON array; treating it as empty", MESSAGES_FILENAME);
                Vec::new()
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Treating message collection as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Load the message collection in append order, skipping records that do
    /// not decode.
    pub async fn load_messages(&self) -> Vec<MessageRecord> {
        self.load_raw_messages()
            .await
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value(raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping message record {}: {}", index, e);
                    None
                }
            })
            .collect()
    }

    /// List messages, newest first.
    pub async fn list_messages(&self) -> Vec<MessageRecord> {
        let mut messages = self.load_messages().await;
        sort_newest_first(&mut messages);
        messages
    }

    /// Append one message and rewrite the collection.
    ///
    /// This is a plain read-modify-write: two concurrent appends can lose one record.
    pub async fn append_message(&self, record: MessageRecord) -> Result<MessageRecord, AppError> {
        let mut records = self.load_raw_messages().await;
        let value = serde_json::to_value(&record)
            .map_err(|e| AppError::Internal(format!("Failed to encode message: {}", e)))?;
        records.push(value);
        write_json_atomic(&self.path(MESSAGES_FILENAME), &records).await?;
        Ok(record)
    }
}
