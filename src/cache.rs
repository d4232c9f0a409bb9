//! In-memory cache for list responses.
//! Entries expire on their own and are dropped by prefix when a list changes.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;

/// Cache entry with expiration
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Vec<u8>,
    pub stored_at: DateTime<Utc>,
    pub expiry: Duration,
}

impl CacheEntry {
    pub fn new(data: Vec<u8>, expiry: Duration) -> Self {
        Self {
            data,
            stored_at: Utc::now(),
            expiry,
        }
    }

    pub fn is_expired(&self) -> bool {
        let age = Utc::now().signed_duration_since(self.stored_at);
        age.to_std().unwrap_or(Duration::ZERO) > self.expiry
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimpleCache {
    entries: HashMap<String, CacheEntry>,
}

impl SimpleCache {
    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key).filter(|entry| !entry.is_expired())
    }

    pub fn put(&mut self, key: String, entry: CacheEntry) {
        self.clean_expired();
        self.entries.insert(key, entry);
    }

    /// Removes every entry whose key starts with `prefix`, returning how many went.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn clean_expired(&mut self) {
        self.entries.retain(|_, entry| !entry.is_expired());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_prefix_only_drops_matching_keys() {
        let mut cache = SimpleCache::default();
        let hour = Duration::from_secs(3600);
        cache.put("api:search3:v1:a".into(), CacheEntry::new(vec![1], hour));
        cache.put("api:search3:v1:b".into(), CacheEntry::new(vec![2], hour));
        cache.put("api:getAlbumList2:v1:a".into(), CacheEntry::new(vec![3], hour));

        assert_eq!(cache.remove_prefix("api:search3:v1:"), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("api:getAlbumList2:v1:a").is_some());
    }

    #[test]
    fn expired_entries_are_invisible() {
        let mut cache = SimpleCache::default();
        cache.put("k".into(), CacheEntry::new(vec![1], Duration::ZERO));
        std::thread::sleep(Duration::from_millis(2));
        assert!(cache.get("k").is_none());
        cache.clean_expired();
        assert_eq!(cache.len(), 0);
    }
}
