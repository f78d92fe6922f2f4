//! Storage boundary: named JSON blobs, one per collection.
//!
//! Backends only need whole-blob get/set by key; serialization and every
//! domain rule live above this seam, so the store technology is swappable.

use crate::errors::AppResult;
use std::collections::HashMap;

pub const KEY_USERS: &str = "users";
pub const KEY_SETTINGS: &str = "settings";
pub const KEY_RECORDS: &str = "records";

pub trait BlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Volatile store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
