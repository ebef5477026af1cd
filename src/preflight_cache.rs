use crate::util::normalize_lower;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Instant;

// Expired entries are swept once the table reaches this size; individual
// lookups drop their own expired entry regardless.
const PURGE_THRESHOLD: usize = 256;

/// Process-local table of already-negotiated preflight tuples.
///
/// Purely an optimization: a miss, an expired entry, or a recorded denial all
/// fall back to full evaluation, never to a default-allow. Keys are the
/// (origin, method, header-set) triple, normalized so that spelling and token
/// order do not fragment the table.
#[derive(Debug, Default)]
pub struct PreflightCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone)]
struct CacheKey {
    origin: String,
    method: String,
    headers: Vec<String>,
}

impl CacheKey {
    fn new(origin: &str, method: &str, header_names: &[String]) -> Self {
        let mut headers: Vec<String> = header_names
            .iter()
            .map(|name| normalize_lower(name))
            .collect();
        headers.sort();
        headers.dedup();

        Self {
            origin: normalize_lower(origin),
            method: normalize_lower(method),
            headers,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    approved: bool,
    expires_at: Instant,
}

impl PreflightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded outcome for the triple, or `None` when absent or
    /// expired. Expired entries are removed on the way out.
    pub fn lookup(&self, origin: &str, method: &str, header_names: &[String]) -> Option<bool> {
        let key = CacheKey::new(origin, method, header_names);
        let mut entries = self.entries.lock();
        match entries.get(&key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.approved),
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    pub fn record(
        &self,
        origin: &str,
        method: &str,
        header_names: &[String],
        approved: bool,
        expires_at: Instant,
    ) {
        let key = CacheKey::new(origin, method, header_names);
        let mut entries = self.entries.lock();
        if entries.len() >= PURGE_THRESHOLD {
            let now = Instant::now();
            entries.retain(|_, entry| entry.expires_at > now);
        }
        entries.insert(key, CacheEntry {
            approved,
            expires_at,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "preflight_cache_test.rs"]
mod preflight_cache_test;
