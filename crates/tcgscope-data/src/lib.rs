//! Dataset file I/O for the store catalog.
//!
//! The collection lives in a single JSON array file. Loads validate id
//! uniqueness; saves go through a temp file and a rename so a maintenance
//! pass either persists completely or not at all.

use std::fs;
use std::path::Path;

use tcgscope_core::Store;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate store id {id} in {path}")]
    DuplicateId { id: u32, path: String },
}

/// Load the store collection from `path`.
///
/// # Errors
///
/// Returns `DataError` when the file cannot be read, is not valid dataset
/// JSON, or contains a duplicate store id.
pub fn load_stores(path: &Path) -> Result<Vec<Store>, DataError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: display.clone(),
        source,
    })?;
    let stores: Vec<Store> = serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: display.clone(),
        source,
    })?;

    let mut seen = std::collections::HashSet::new();
    for store in &stores {
        if !seen.insert(store.id) {
            return Err(DataError::DuplicateId {
                id: store.id,
                path: display,
            });
        }
    }

    tracing::debug!(path = %path.display(), count = stores.len(), "loaded store collection");
    Ok(stores)
}

/// Persist the store collection to `path` atomically.
///
/// Writes pretty-printed JSON plus a trailing newline to a sibling temp
/// file, then renames it over the target.
///
/// # Errors
///
/// Returns `DataError` when serialization or either filesystem step fails.
pub fn save_stores(path: &Path, stores: &[Store]) -> Result<(), DataError> {
    let display = path.display().to_string();
    let mut body = serde_json::to_string_pretty(stores).map_err(|source| DataError::Parse {
        path: display.clone(),
        source,
    })?;
    body.push('\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(|source| DataError::Write {
        path: tmp.display().to_string(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| DataError::Write {
        path: display,
        source,
    })?;

    tracing::debug!(path = %path.display(), count = stores.len(), "saved store collection");
    Ok(())
}

/// The next free store id: one past the current maximum, so ids are never
/// reused.
#[must_use]
pub fn next_id(stores: &[Store]) -> u32 {
    stores.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}
