use eh_core::ApiEnvelope;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::RwLock;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_ENTRIES_PER_TAG: usize = 1024;

#[derive(Debug, Clone)]
struct CachedEnvelope {
    envelope: ApiEnvelope,
    expires_at: Instant,
}

impl CachedEnvelope {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Tagged cache of GET envelopes.
///
/// Entries live under a tag and a key; `revalidate_tag` drops every entry
/// under the tag so the next read goes back to the backend. Entries also
/// expire after `ttl`, and each tag holds at most `max_per_tag` of them.
#[derive(Debug, Clone)]
pub struct RevalidationCache {
    entries: Arc<RwLock<HashMap<String, HashMap<String, CachedEnvelope>>>>,
    ttl: Duration,
    max_per_tag: usize,
}

impl Default for RevalidationCache {
    fn default() -> Self {
        Self::with_limits(DEFAULT_CACHE_TTL, DEFAULT_MAX_ENTRIES_PER_TAG)
    }
}

impl RevalidationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: Duration, max_per_tag: usize) -> Self {
        Self {
            entries: Arc::default(),
            ttl,
            max_per_tag: max_per_tag.max(1),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh entry under `tag` and `key`; expired entries are never returned
    pub async fn get(&self, tag: &str, key: &str) -> Option<ApiEnvelope> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries
            .get(tag)
            .and_then(|by_key| by_key.get(key))
            .filter(|cached| cached.is_fresh(now))
            .map(|cached| cached.envelope.clone())
    }

    /// Store `envelope`, first purging expired entries of `tag` and, when
    /// the tag is full, evicting the entry closest to expiry
    pub async fn insert(&self, tag: &str, key: &str, envelope: ApiEnvelope) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let by_key = entries.entry(tag.to_string()).or_default();

        by_key.retain(|_, cached| cached.is_fresh(now));
        if by_key.len() >= self.max_per_tag && !by_key.contains_key(key) {
            let oldest = by_key
                .iter()
                .min_by_key(|(_, cached)| cached.expires_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                debug!("Cache tag '{}' full, evicting one entry", tag);
                by_key.remove(&oldest);
            }
        }

        by_key.insert(
            key.to_string(),
            CachedEnvelope {
                envelope,
                expires_at: now + self.ttl,
            },
        );
    }

    /// Drop everything cached under `tag`, returning how many entries went
    pub async fn revalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self.entries.write().await;
        let removed = entries.remove(tag).map(|by_key| by_key.len()).unwrap_or(0);
        debug!("Revalidated tag '{}' ({} entries)", tag, removed);
        removed
    }

    /// Stored entries, expired ones not yet purged included
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().map(HashMap::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
