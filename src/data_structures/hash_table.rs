//! Open-addressing hash table with linear probing.
//!
//! Variables:
//!   buckets  : Vec<Slot<K,V>>  — slot array, length C (capacity)
//!   occupied : usize           — number of live entries
//!   C        : usize           — capacity, always power of 2
//!
//! Equations:
//!   h(k)         = k.hash() mod C                      (home slot)
//!   probe(h, i)  = (h + i) mod C                       (linear probe step i)
//!   load_factor  = occupied / C
//!   resize when load_factor > 0.7: C' = 2*C, rehash live entries
//!
//!   insert(k,v): probe from h(k) until empty slot,       O(1) amortised
//!   get(k):      probe from h(k) until k found or Empty,  O(1) amortised
//!   remove(k):   mark slot Tombstone so probe chains stay intact

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

enum Slot<K, V> {
    Empty,
    Tombstone,
    Live(K, V),
}

pub struct HashTable<K: Hash + Eq, V> {
    buckets: Vec<Slot<K, V>>,
    occupied: usize,
    tombstones: usize,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(16);
        buckets.resize_with(16, || Slot::Empty);
        Self {
            buckets,
            occupied: 0,
            tombstones: 0,
        }
    }

    fn home_slot(&self, key: &K) -> usize {
        let mut h = DefaultHasher::new();
        key.hash(&mut h);
        (h.finish() as usize) & (self.buckets.len() - 1)
    }

    pub fn insert(&mut self, key: K, val: V) {
        // tombstones count against the load factor so probe chains
        // always terminate at an Empty slot
        if (self.occupied + self.tombstones) * 10 >= self.buckets.len() * 7 {
            self.resize();
        }
        let mask = self.buckets.len() - 1;
        let mut i = self.home_slot(&key);
        let mut first_tombstone = None;
        loop {
            match &self.buckets[i] {
                Slot::Empty => {
                    let target = if let Some(t) = first_tombstone {
                        self.tombstones -= 1;
                        t
                    } else {
                        i
                    };
                    self.buckets[target] = Slot::Live(key, val);
                    self.occupied += 1;
                    return;
                }
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(i);
                    }
                    i = (i + 1) & mask;
                }
                Slot::Live(k, _) if *k == key => {
                    self.buckets[i] = Slot::Live(key, val);
                    return;
                }
                Slot::Live(..) => {
                    i = (i + 1) & mask;
                }
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mask = self.buckets.len() - 1;
        let mut i = self.home_slot(key);
        loop {
            match &self.buckets[i] {
                Slot::Empty => return None,
                Slot::Live(k, v) if k == key => return Some(v),
                _ => i = (i + 1) & mask,
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> bool {
        let mask = self.buckets.len() - 1;
        let mut i = self.home_slot(key);
        loop {
            match &self.buckets[i] {
                Slot::Empty => return false,
                Slot::Live(k, _) if k == key => {
                    self.buckets[i] = Slot::Tombstone;
                    self.occupied -= 1;
                    self.tombstones += 1;
                    return true;
                }
                _ => i = (i + 1) & mask,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    fn resize(&mut self) {
        let new_cap = self.buckets.len() * 2;
        let mut new_buckets: Vec<Slot<K, V>> = Vec::with_capacity(new_cap);
        new_buckets.resize_with(new_cap, || Slot::Empty);

        for slot in self.buckets.drain(..) {
            if let Slot::Live(k, v) = slot {
                let mut h = DefaultHasher::new();
                k.hash(&mut h);
                let mut i = (h.finish() as usize) & (new_cap - 1);
                while matches!(new_buckets[i], Slot::Live(..)) {
                    i = (i + 1) & (new_cap - 1);
                }
                new_buckets[i] = Slot::Live(k, v);
            }
        }
        self.buckets = new_buckets;
        self.tombstones = 0;
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::HashTable;

    #[test]
    fn insert_get_remove() {
        let mut t = HashTable::new();
        t.insert("a", 1);
        t.insert("b", 2);
        assert_eq!(t.get(&"a"), Some(&1));
        assert_eq!(t.get(&"b"), Some(&2));
        assert!(t.remove(&"a"));
        assert!(!t.remove(&"a"));
        assert_eq!(t.get(&"a"), None);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        let mut t = HashTable::new();
        t.insert(1, "x");
        t.insert(1, "y");
        assert_eq!(t.get(&1), Some(&"y"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut t = HashTable::new();
        for i in 0..100 {
            t.insert(i, i * 10);
        }
        assert_eq!(t.len(), 100);
        for i in 0..100 {
            assert_eq!(t.get(&i), Some(&(i * 10)));
        }
    }

    #[test]
    fn probe_chain_survives_removal() {
        // fill enough that collisions are certain, then punch holes
        let mut t = HashTable::new();
        for i in 0..10 {
            t.insert(i, i);
        }
        for i in (0..10).step_by(2) {
            assert!(t.remove(&i));
        }
        for i in (1..10).step_by(2) {
            assert_eq!(t.get(&i), Some(&i));
        }
    }
}
