//! Whole-file JSON record store.
//!
//! Each collection is one JSON array-of-objects file under the data
//! directory (`users.json`, `products.json`, ...). Every service operation
//! follows the same pipeline: load the full collection into memory, mutate
//! it, and save the whole collection back.
//!
//! # Consistency
//!
//! There is no locking, versioning, or compare-and-swap. Two concurrent
//! writers to the same collection race and the second save silently
//! overwrites the first (last writer wins). Each individual save is atomic
//! at the file level: the new content is written to a temp file and renamed
//! into place, so readers never observe a partial write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use dresshaus_core::{Order, OtpRecord, Product, User, UserCart};

/// A persistable record type, tied to its collection file name.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection name; the file on disk is `<COLLECTION>.json`.
    const COLLECTION: &'static str;
}

impl Record for User {
    const COLLECTION: &'static str = "users";
}

impl Record for OtpRecord {
    const COLLECTION: &'static str = "otps";
}

impl Record for UserCart {
    const COLLECTION: &'static str = "carts";
}

impl Record for Product {
    const COLLECTION: &'static str = "products";
}

impl Record for Order {
    const COLLECTION: &'static str = "orders";
}

/// Errors from saving a collection.
///
/// Loading never errors: a missing or corrupt file reads as an empty
/// collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Collection could not be serialized.
    #[error("failed to serialize {collection} collection: {source}")]
    Serialize {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Collection file could not be written or renamed into place.
    #[error("failed to write {collection} collection: {source}")]
    Write {
        collection: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Flat-file JSON persistence for all collections.
///
/// Cheap to construct; holds only the data directory path. Injected into
/// services through [`crate::state::AppState`] so a different storage
/// backend can replace it without touching service logic.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir)
    }

    /// Path of a collection file.
    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    /// Load a full collection.
    ///
    /// A missing or unparseable file yields an empty collection; a corrupt
    /// file is logged and treated as empty rather than surfaced to callers.
    #[must_use]
    pub fn load<T: Record>(&self) -> Vec<T> {
        let path = self.collection_path(T::COLLECTION);
        let Ok(data) = fs::read_to_string(&path) else {
            return Vec::new();
        };

        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    collection = T::COLLECTION,
                    path = %path.display(),
                    error = %e,
                    "collection file is corrupt, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Save a full collection, replacing the previous file content.
    ///
    /// Serializes pretty-printed UTF-8 JSON, writes it to a sibling temp
    /// file, and renames it over the collection file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the file write fails.
    pub fn save<T: Record>(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serialize {
            collection: T::COLLECTION,
            source,
        })?;

        let path = self.collection_path(T::COLLECTION);
        write_atomic(&path, &json).map_err(|source| StoreError::Write {
            collection: T::COLLECTION,
            source,
        })
    }
}

/// Write `content` to `path` via temp file + rename.
fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)
}
