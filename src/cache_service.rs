use crate::cache::{CacheEntry, SimpleCache};
use crate::db::AdminSettings;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct RuntimeCacheConfig {
    enabled: bool,
    cache_expiry_hours: u32,
}

impl Default for RuntimeCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_expiry_hours: 1,
        }
    }
}

static CACHE: Lazy<Mutex<SimpleCache>> = Lazy::new(|| Mutex::new(SimpleCache::default()));
static CACHE_CONFIG: Lazy<Mutex<RuntimeCacheConfig>> =
    Lazy::new(|| Mutex::new(RuntimeCacheConfig::default()));

fn effective_expiry_hours(override_hours: Option<u32>) -> u32 {
    let config = CACHE_CONFIG.lock().unwrap_or_else(|e| e.into_inner());
    override_hours
        .unwrap_or(config.cache_expiry_hours)
        .clamp(1, 24)
}

fn can_cache() -> bool {
    let config = CACHE_CONFIG.lock().unwrap_or_else(|e| e.into_inner());
    config.enabled
}

pub fn apply_settings(settings: &AdminSettings) {
    let mut config = CACHE_CONFIG.lock().unwrap_or_else(|e| e.into_inner());
    config.enabled = settings.cache_expiry_hours > 0;
    if config.enabled {
        config.cache_expiry_hours = settings.cache_expiry_hours.clamp(1, 24);
    } else {
        clear_all();
    }
}

pub fn get_json<T>(key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    if !can_cache() {
        return None;
    }

    let cache = CACHE.lock().unwrap_or_else(|e| e.into_inner());
    let bytes = cache.get(key)?.data.clone();
    drop(cache);
    serde_json::from_slice::<T>(&bytes).ok()
}

pub fn put_json<T>(key: impl Into<String>, value: &T, expiry_hours: Option<u32>) -> bool
where
    T: Serialize,
{
    if !can_cache() {
        return false;
    }

    let Ok(bytes) = serde_json::to_vec(value) else {
        return false;
    };
    let expiry = Duration::from_secs(effective_expiry_hours(expiry_hours) as u64 * 3600);

    let mut cache = CACHE.lock().unwrap_or_else(|e| e.into_inner());
    cache.put(key.into(), CacheEntry::new(bytes, expiry));
    true
}

pub fn remove_by_prefix(prefix: &str) -> usize {
    let mut cache = CACHE.lock().unwrap_or_else(|e| e.into_inner());
    let removed = cache.remove_prefix(prefix);
    debug!(prefix, removed, "invalidated cached lists");
    removed
}

pub fn clear_all() {
    let mut cache = CACHE.lock().unwrap_or_else(|e| e.into_inner());
    cache.clear();
}
