//! In-memory provider fakes shared by the application-layer tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::ports::outbound::{RandomProvider, StorageProvider};

/// In-memory [`StorageProvider`].
#[derive(Clone, Default)]
pub struct MemoryStorage {
    map: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Write a raw key, bypassing the session store. Lets tests set up
    /// corrupt states the store itself would never produce.
    pub fn put(&self, key: &str, value: &str) {
        self.map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.map.lock().unwrap().get(key).cloned()
    }
}

impl StorageProvider for MemoryStorage {
    fn save(&self, key: &str, value: &str) {
        self.put(key, value);
    }

    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn remove(&self, key: &str) {
        self.map.lock().unwrap().remove(key);
    }
}

/// [`RandomProvider`] returning a fixed id.
#[derive(Clone)]
pub struct FixedRandom {
    id: String,
}

impl FixedRandom {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl RandomProvider for FixedRandom {
    fn alphanumeric_id(&self, _len: usize) -> String {
        self.id.clone()
    }
}
