use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;

/// Capacity-bounded concurrent cache. When full, an arbitrary entry makes
/// room for the new one; the bound is what matters, not the eviction order.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V>
where
    K: Eq + Hash,
{
    entries: Arc<DashMap<K, V>>,
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: K, value: V) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            let victim = self.entries.iter().next().map(|entry| entry.key().clone());
            if let Some(victim) = victim {
                self.entries.remove(&victim);
            }
        }

        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_values() {
        let cache = BoundedCache::new(4);
        cache.insert("ham", "prosciutto");
        assert_eq!(cache.get(&"ham"), Some("prosciutto"));
        assert_eq!(cache.get(&"figs"), None);
    }

    #[test]
    fn never_grows_past_capacity() {
        let cache = BoundedCache::new(3);
        for i in 0..100 {
            cache.insert(i, i);
        }
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn overwriting_a_key_does_not_evict() {
        let cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(3));
        assert_eq!(cache.get(&"b"), Some(2));
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let cache = BoundedCache::new(0);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.len(), 1);
    }
}
