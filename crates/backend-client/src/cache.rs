//! Time-boxed response cache
//!
//! Entries are keyed by request identity and live for a fixed TTL. There
//! is no size bound and no eviction beyond expiry; mutating operations
//! invalidate the affected keys explicitly.

use std::collections::HashMap;
use std::time::{Duration, Instant};

struct Entry {
    value: serde_json::Value,
    expires_at: Instant,
}

pub struct TtlCache {
    entries: HashMap<String, Entry>,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Fetch a live entry, dropping it if it has expired
    pub fn get(&mut self, key: &str) -> Option<serde_json::Value> {
        self.get_at(key, Instant::now())
    }

    /// Store a response under `key` for one TTL from now
    pub fn insert(&mut self, key: &str, value: serde_json::Value) {
        self.insert_at(key, value, Instant::now());
    }

    /// Drop an entry regardless of its remaining lifetime
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn get_at(&mut self, key: &str, now: Instant) -> Option<serde_json::Value> {
        match self.entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert_at(&mut self, key: &str, value: serde_json::Value, now: Instant) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }
}
