/// Rendered-page cache backed by Redis
///
/// Stores the serialized body of a route's response under a key derived
/// from the route alone: one shared entry serves every viewer and every
/// page during the TTL window. Write paths never invalidate entries; only
/// TTL expiry or an explicit [`PageCache::clear`] refreshes a page. That
/// staleness window is a deliberate tradeoff for read-heavy pages.
use redis::{aio::ConnectionManager, AsyncCommands};
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

/// Page cache manager using Redis
#[derive(Clone)]
pub struct PageCache {
    redis: ConnectionManager,
    ttl: Duration,
}

impl PageCache {
    pub fn new(redis: ConnectionManager, ttl_secs: u64) -> Self {
        Self {
            redis,
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    fn page_key(route: &str) -> String {
        format!("page:v1:{}", route)
    }

    /// Fetch a cached page body for a route.
    pub async fn get(&self, route: &str) -> Result<Option<String>> {
        let key = Self::page_key(route);
        let mut conn = self.redis.clone();

        let cached: Option<String> = conn.get(&key).await?;
        match &cached {
            Some(_) => debug!("Page cache HIT for {}", route),
            None => debug!("Page cache MISS for {}", route),
        }

        Ok(cached)
    }

    /// Store a rendered page body with the fixed TTL.
    pub async fn put(&self, route: &str, body: &str) -> Result<()> {
        let key = Self::page_key(route);
        let mut conn = self.redis.clone();

        conn.set_ex::<_, _, ()>(&key, body, self.ttl.as_secs()).await?;

        debug!("Page cache WRITE for {} with TTL {:?}", route, self.ttl);
        Ok(())
    }

    /// Drop one route's entry.
    pub async fn invalidate(&self, route: &str) -> Result<()> {
        let key = Self::page_key(route);
        let mut conn = self.redis.clone();
        conn.del::<_, ()>(&key).await?;

        debug!("Page cache INVALIDATE for {}", route);
        Ok(())
    }

    /// Drop every cached page. This is the only non-TTL refresh path.
    pub async fn clear(&self) -> Result<()> {
        let mut conn = self.redis.clone();

        let mut keys: Vec<String> = Vec::new();
        {
            let mut iter = conn.scan_match::<_, String>("page:v1:*").await?;
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
        }

        if !keys.is_empty() {
            let mut del_conn = self.redis.clone();
            del_conn.del::<_, ()>(keys).await?;
        }

        debug!("Page cache CLEAR");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_format() {
        let key = PageCache::page_key("/api/v1/posts");
        assert_eq!(key, "page:v1:/api/v1/posts");
    }
}
