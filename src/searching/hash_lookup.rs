use std::collections::HashMap;
use std::hash::Hash;

pub fn hash_lookup<'a, K: Hash + Eq, V>(map: &'a HashMap<K, V>, key: &K) -> Option<&'a V> {
    map.get(key)
}

/// Build an index from value to first position, then answer lookups in O(1).
pub fn index_positions<T: Hash + Eq + Clone>(arr: &[T]) -> HashMap<T, usize> {
    let mut index = HashMap::with_capacity(arr.len());
    for (i, v) in arr.iter().enumerate() {
        index.entry(v.clone()).or_insert(i);
    }
    index
}
