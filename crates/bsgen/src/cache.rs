//! Cache collaborator interface.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The generator never evicts or expires anything; retention policy belongs
//! entirely to the `CssCache` implementation supplied by the embedding
//! application.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::CacheError;
use crate::theme::Theme;

/// Storage for compiled CSS, keyed by theme fingerprint.
///
/// Both operations may complete immediately or suspend; the theme is passed
/// along so implementations can index on caller-defined extra fields.
#[async_trait]
pub trait CssCache: Send + Sync {
    /// Look up CSS for `id`. `Ok(None)` (or an empty string) is a miss.
    async fn get(&self, id: &str, theme: &Theme) -> Result<Option<String>, CacheError>;

    /// Store `css` under `id`.
    async fn set(&self, id: &str, css: &str, theme: &Theme) -> Result<(), CacheError>;
}

/// Cache that never holds anything. Used when no cache is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl CssCache for NoopCache {
    async fn get(&self, _id: &str, _theme: &Theme) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _id: &str, _css: &str, _theme: &Theme) -> Result<(), CacheError> {
        Ok(())
    }
}

/// Process-local cache backed by a `HashMap`.
///
/// Entries live until the cache is dropped or [`MemoryCache::clear`] is
/// called. A panic while the lock is held cannot leave the map half
/// written, so a poisoned lock is recovered rather than reported; the
/// inherent helpers and the `CssCache` impl behave the same way.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch an entry without going through the async interface.
    pub fn peek(&self, id: &str) -> Option<String> {
        self.lock().get(id).cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CssCache for MemoryCache {
    async fn get(&self, id: &str, _theme: &Theme) -> Result<Option<String>, CacheError> {
        Ok(self.peek(id))
    }

    async fn set(&self, id: &str, css: &str, _theme: &Theme) -> Result<(), CacheError> {
        self.lock().insert(id.to_string(), css.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollster::block_on;

    #[test]
    fn test_noop_cache_always_misses() {
        let cache = NoopCache;
        let theme = Theme::new();
        block_on(cache.set("id", "body{}", &theme)).unwrap();
        assert_eq!(block_on(cache.get("id", &theme)).unwrap(), None);
    }

    #[test]
    fn test_memory_cache_round_trip() {
        let cache = MemoryCache::new();
        let theme = Theme::new();
        assert!(cache.is_empty());

        block_on(cache.set("a", "body{color:red}", &theme)).unwrap();
        assert_eq!(
            block_on(cache.get("a", &theme)).unwrap().as_deref(),
            Some("body{color:red}")
        );
        assert_eq!(block_on(cache.get("b", &theme)).unwrap(), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek("a").as_deref(), Some("body{color:red}"));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_memory_cache_overwrites() {
        let cache = MemoryCache::new();
        let theme = Theme::new();
        block_on(cache.set("a", "old", &theme)).unwrap();
        block_on(cache.set("a", "new", &theme)).unwrap();
        assert_eq!(cache.peek("a").as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_memory_cache_survives_poisoned_lock() {
        let cache = MemoryCache::new();
        let theme = Theme::new();
        block_on(cache.set("a", "body{}", &theme)).unwrap();

        let poisoned: std::thread::Result<()> =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let _guard = cache.entries.lock().unwrap();
                panic!("poison the lock");
            }));
        assert!(poisoned.is_err());
        assert!(cache.entries.is_poisoned());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek("a").as_deref(), Some("body{}"));
        assert_eq!(block_on(cache.get("a", &theme)).unwrap().as_deref(), Some("body{}"));
        block_on(cache.set("b", "p{}", &theme)).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
