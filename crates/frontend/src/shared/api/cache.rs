use std::collections::HashMap;

/// Default entry lifetime: 5 minutes.
pub const DEFAULT_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    expires_at: f64,
}

/// In-memory TTL cache for API responses, keyed by `METHOD:path`.
///
/// Expiry is the only eviction policy. Entries disappear when a read or a
/// sweep observes them past their deadline, or when a mutating call
/// invalidates their resource family by key prefix. The map is memory
/// resident only; nothing survives a page reload.
///
/// Time is passed explicitly to the `*_at` methods as absolute epoch
/// milliseconds; the plain variants read the platform clock.
#[derive(Debug, Default)]
pub struct ApiCache {
    entries: HashMap<String, CacheEntry>,
}

impl ApiCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Conventional cache key for a request.
    pub fn key(method: &str, path: &str) -> String {
        format!("{method}:{path}")
    }

    pub fn get(&mut self, key: &str) -> Option<serde_json::Value> {
        self.get_at(key, now_ms())
    }

    /// Returns the live value for `key`, removing it if expired.
    pub fn get_at(&mut self, key: &str, now_ms: f64) -> Option<serde_json::Value> {
        match self.entries.get(key) {
            Some(entry) if now_ms <= entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&mut self, key: impl Into<String>, value: serde_json::Value, ttl_ms: Option<f64>) {
        self.put_at(key, value, ttl_ms, now_ms());
    }

    pub fn put_at(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
        ttl_ms: Option<f64>,
        now_ms: f64,
    ) {
        let ttl = ttl_ms.unwrap_or(DEFAULT_TTL_MS);
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                expires_at: now_ms + ttl,
            },
        );
    }

    pub fn has(&self, key: &str) -> bool {
        self.has_at(key, now_ms())
    }

    pub fn has_at(&self, key: &str, now_ms: f64) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| now_ms <= entry.expires_at)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops every entry past its deadline; returns how many were removed.
    pub fn clear_expired_at(&mut self, now_ms: f64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| now_ms <= entry.expires_at);
        before - self.entries.len()
    }

    /// Drops every entry whose key starts with `prefix`; returns how many
    /// were removed. Used for coarse per-resource-family invalidation.
    pub fn invalidate_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Current time as epoch milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}
