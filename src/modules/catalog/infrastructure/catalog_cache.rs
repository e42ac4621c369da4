use crate::modules::catalog::domain::AnimeSummary;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Cached entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<AnimeSummary>,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() >= ttl
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Aggregated catalog results keyed by endpoint, each valid for `ttl`
#[derive(Debug)]
pub struct CatalogCache {
    entries: DashMap<String, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
    ttl: Duration,
}

impl CatalogCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            ttl,
        }
    }

    /// Fresh data for `key`. Expired entries are evicted and count as misses.
    pub fn get(&self, key: &str) -> Option<Vec<AnimeSummary>> {
        let fresh = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => Some(entry.data.clone()),
            Some(_) => {
                debug!("Catalog cache entry '{}' expired", key);
                None
            }
            None => None,
        };

        match fresh {
            Some(data) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(data)
            }
            None => {
                // The read guard above must be dropped before removing
                self.entries
                    .remove_if(key, |_, entry| entry.is_expired(self.ttl));
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: &str, data: Vec<AnimeSummary>) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                data,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64) -> AnimeSummary {
        AnimeSummary {
            jikan_id: id,
            title: format!("Anime {}", id),
            rating: None,
            picture: None,
            description: "No summary available.".to_string(),
            anime_type: None,
            slug: format!("anime-{}", id),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_before_ttl_miss_after() {
        let cache = CatalogCache::new(Duration::from_secs(3600));
        cache.insert("anime", vec![summary(1)]);

        assert_eq!(cache.get("anime").map(|d| d.len()), Some(1));

        tokio::time::advance(Duration::from_secs(3600)).await;
        assert!(cache.get("anime").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries_count, 0);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_unknown_key_and_clear() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        assert!(cache.get("seasons/now").is_none());

        cache.insert("anime", vec![summary(1), summary(2)]);
        assert_eq!(cache.stats().entries_count, 1);

        cache.clear();
        assert!(cache.get("anime").is_none());
        assert_eq!(cache.stats().hit_rate(), 0.0);
    }
}
