//! Fast hash map and hash set type aliases.
//!
//! Type aliases for [`FxHashMap`] and [`FxHashSet`] from the `rustc-hash`
//! crate. The Fx hash algorithm is markedly faster than the standard
//! library's SipHash for the short string keys this tool hashes on its hot
//! path (normalized extensions), at the cost of denial-of-service
//! resistance - which internal accumulators don't need.
//!
//! # Examples
//!
//! ```
//! use dv_core::FxHashMap;
//!
//! let mut map: FxHashMap<String, u64> = FxHashMap::default();
//! map.insert("txt".to_owned(), 42);
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_hash_map_operations() {
        let mut map: FxHashMap<&str, u64> = FxHashMap::default();
        map.insert("txt", 1);
        map.insert("jpg", 2);
        assert_eq!(map.get("txt"), Some(&1));
        assert_eq!(map.get("jpg"), Some(&2));
        assert_eq!(map.get("png"), None);
    }

    #[test]
    fn test_fx_hash_set_operations() {
        let mut set: FxHashSet<&str> = FxHashSet::default();
        set.insert("txt");
        assert!(set.contains("txt"));
        assert!(!set.contains("jpg"));
    }
}
