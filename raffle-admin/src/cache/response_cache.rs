use std::{collections::HashMap, hash::Hash};
use tokio::sync::Mutex;

///
/// Request deduplication cache owned by a single service.
///
/// There is no eviction and no expiry. Services clear
/// the cache whenever they mutate the cached entity.
///
pub struct ResponseCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> ResponseCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().await.get(key).cloned()
    }

    pub async fn insert(&self, key: K, value: V) {
        self.entries.lock().await.insert(key, value);
    }

    pub async fn invalidate(&self, key: &K) -> Option<V> {
        self.entries.lock().await.remove(key)
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        let removed_entries = entries.len();
        entries.clear();

        tracing::trace!(removed_entries, "cache cleared");
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl<K, V> Default for ResponseCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn get_after_insert() {
        let cache = ResponseCache::new();

        cache.insert(1_i64, "raffle".to_string()).await;

        assert_eq!(cache.get(&1).await.as_deref(), Some("raffle"));
        assert_eq!(cache.get(&2).await, None);
    }

    #[tokio::test]
    async fn invalidate_removes_only_key() {
        let cache = ResponseCache::new();
        cache.insert(1_i64, 10).await;
        cache.insert(2_i64, 20).await;

        let removed = cache.invalidate(&1).await;

        assert_eq!(removed, Some(10));
        assert_eq!(cache.get(&1).await, None);
        assert_eq!(cache.get(&2).await, Some(20));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let cache = ResponseCache::new();
        cache.insert("a".to_string(), 1).await;
        cache.insert("b".to_string(), 2).await;

        cache.clear().await;

        assert!(cache.is_empty().await);
    }
}
