//! Mapping store implementations.
//!
//! The store is an external collaborator with a small key-value contract:
//! `get` returns a JSON document or nothing, `put` writes one and is guarded
//! by an administrative token compared against a configured secret. The core
//! only ever needs this contract; [`FileStore`] is the shipped implementation
//! and [`MemoryStore`] backs the tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;
use serde_json::Value;

use crate::error_handling::StoreError;

/// Key-value store holding JSON documents.
pub trait MappingStore: Send + Sync {
    /// Reads the document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Writes `value` under `key`.
    ///
    /// The write is rejected with [`StoreError::Unauthorized`] unless `token`
    /// matches the store's configured administrative secret.
    fn put(&self, key: &str, value: &Value, token: &str) -> Result<(), StoreError>;
}

/// File-backed store: one JSON object on disk, keyed by store key.
pub struct FileStore {
    path: PathBuf,
    admin_secret: Option<String>,
}

impl FileStore {
    /// Creates a store over `path`.
    ///
    /// `admin_secret` is the configured write secret; when `None`, every
    /// write is rejected. Reads are never guarded.
    pub fn new(path: impl Into<PathBuf>, admin_secret: Option<String>) -> Self {
        Self {
            path: path.into(),
            admin_secret,
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<Value>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        let doc = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Malformed(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(doc))
    }

    fn check_token(&self, token: &str) -> Result<(), StoreError> {
        match &self.admin_secret {
            Some(secret) if !secret.is_empty() && secret == token => Ok(()),
            _ => Err(StoreError::Unauthorized),
        }
    }
}

impl MappingStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .read_document()?
            .and_then(|doc| doc.get(key).cloned()))
    }

    fn put(&self, key: &str, value: &Value, token: &str) -> Result<(), StoreError> {
        self.check_token(token)?;

        // A corrupt document should not brick the store for authorized
        // writers; start over and keep the new value.
        let mut doc = match self.read_document() {
            Ok(Some(Value::Object(map))) => map,
            Ok(Some(_)) | Ok(None) => serde_json::Map::new(),
            Err(e) => {
                warn!("replacing unreadable store document: {}", e);
                serde_json::Map::new()
            }
        };
        doc.insert(key.to_string(), value.clone());

        let serialized = serde_json::to_string_pretty(&Value::Object(doc))
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        std::fs::write(&self.path, serialized)
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

/// In-memory store used by tests and embedders.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, Value>>,
    admin_secret: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store with the given write secret.
    pub fn new(admin_secret: Option<String>) -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            admin_secret,
        }
    }

    /// Creates a store pre-seeded with a document, bypassing the write guard.
    pub fn with_document(key: &str, value: Value, admin_secret: Option<String>) -> Self {
        let store = Self::new(admin_secret);
        store
            .documents
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value);
        store
    }
}

impl MappingStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .documents
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".into()))?
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: &Value, token: &str) -> Result<(), StoreError> {
        match &self.admin_secret {
            Some(secret) if !secret.is_empty() && secret == token => {}
            _ => return Err(StoreError::Unauthorized),
        }
        self.documents
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".into()))?
            .insert(key.to_string(), value.clone());
        Ok(())
    }
}
