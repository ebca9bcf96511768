//! Sharded LRU map keyed by raw input strings.

use std::hash::BuildHasher;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

/// A bounded LRU map split into independently locked shards.
///
/// The shard is picked by hashing the key, so a given key always lives in
/// the same shard. LRU order is strict within a shard only.
pub(crate) struct ShardedLru<V> {
    shards: Box<[Mutex<LruCache<Box<str>, V>>]>,
    hasher: ahash::RandomState,
}

impl<V: Clone> ShardedLru<V> {
    /// `capacity` is divided as evenly as possible over `shards`; the shard
    /// count is clamped so that every shard holds at least one entry.
    pub(crate) fn new(capacity: usize, shards: usize) -> Self {
        let capacity = capacity.max(1);
        let shards = shards.clamp(1, capacity);
        let base = capacity / shards;
        let extra = capacity % shards;

        let shards = (0..shards)
            .map(|i| {
                let cap = base + usize::from(i < extra);
                let cap = NonZeroUsize::new(cap).unwrap_or(NonZeroUsize::MIN);
                Mutex::new(LruCache::new(cap))
            })
            .collect();

        Self {
            shards,
            hasher: ahash::RandomState::new(),
        }
    }

    fn shard(&self, key: &str) -> &Mutex<LruCache<Box<str>, V>> {
        let hash = BuildHasher::hash_one(&self.hasher, key);
        // Shard count is at most the capacity, and any usize fits in u64.
        #[allow(clippy::cast_possible_truncation)]
        let index = (hash % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    /// Clone out the value for `key`, marking it most recently used.
    pub(crate) fn get(&self, key: &str) -> Option<V> {
        self.shard(key).lock().get(key).cloned()
    }

    /// Insert or replace `key`. Returns true if another entry was evicted to
    /// make room.
    pub(crate) fn insert(&self, key: &str, value: V) -> bool {
        let mut shard = self.shard(key).lock();
        match shard.push(Box::from(key), value) {
            Some((old_key, _)) => &*old_key != key,
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().cap().get()).sum()
    }

    pub(crate) fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub(crate) fn clear(&self) {
        for shard in self.shards.iter() {
            shard.lock().clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_split() {
        let lru: ShardedLru<u32> = ShardedLru::new(10, 4);
        assert_eq!(lru.shard_count(), 4);
        assert_eq!(lru.capacity(), 10);

        let clamped: ShardedLru<u32> = ShardedLru::new(3, 16);
        assert_eq!(clamped.shard_count(), 3);
        assert_eq!(clamped.capacity(), 3);

        let zero: ShardedLru<u32> = ShardedLru::new(0, 0);
        assert_eq!(zero.capacity(), 1);
    }

    #[test]
    fn test_get_and_replace() {
        let lru = ShardedLru::new(4, 2);
        assert!(!lru.insert("a", 1));
        assert_eq!(lru.get("a"), Some(1));
        assert!(!lru.insert("a", 2));
        assert_eq!(lru.get("a"), Some(2));
        assert_eq!(lru.len(), 1);
        assert_eq!(lru.get("b"), None);
    }

    #[test]
    fn test_strict_lru_with_one_shard() {
        let lru = ShardedLru::new(2, 1);
        lru.insert("a", 1);
        lru.insert("b", 2);
        // Touch "a" so "b" becomes least recently used.
        assert_eq!(lru.get("a"), Some(1));
        assert!(lru.insert("c", 3));
        assert_eq!(lru.get("b"), None);
        assert_eq!(lru.get("a"), Some(1));
        assert_eq!(lru.get("c"), Some(3));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let lru = ShardedLru::new(8, 4);
        for i in 0..100 {
            lru.insert(&format!("key{i}"), i);
        }
        assert!(lru.len() <= 8);
    }

    #[test]
    fn test_clear() {
        let lru = ShardedLru::new(4, 2);
        lru.insert("a", 1);
        lru.clear();
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.get("a"), None);
    }
}
