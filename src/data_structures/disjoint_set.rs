//! Disjoint-set (union-find) with path compression and union by rank.
//!
//! Variables:
//!   parent[i] : usize — parent pointer, parent[root] == root
//!   rank[i]   : u8    — upper bound on tree height at i
//!
//! Equations:
//!   find(x):      follow parents to root, compress path on the way
//!   union(x, y):  attach lower-rank root under higher-rank root
//!   find is idempotent after compression: find(find(x)) == find(x)
//!
//!   Amortised complexity: O(alpha(n)) per operation.

pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // halve the path: point x at its grandparent
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns false if x and y were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        let (hi, lo) = if self.rank[rx] >= self.rank[ry] {
            (rx, ry)
        } else {
            (ry, rx)
        };
        self.parent[lo] = hi;
        if self.rank[hi] == self.rank[lo] {
            self.rank[hi] += 1;
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn union_merges_components() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.component_count(), 5);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(!ds.union(1, 0)); // already joined
        assert_eq!(ds.component_count(), 3);
        assert!(ds.connected(0, 1));
        assert!(!ds.connected(1, 2));
        assert!(ds.union(1, 2));
        assert!(ds.connected(0, 3));
    }

    #[test]
    fn find_is_idempotent() {
        let mut ds = DisjointSet::new(8);
        for i in 0..7 {
            ds.union(i, i + 1);
        }
        let root = ds.find(0);
        for i in 0..8 {
            let r = ds.find(i);
            assert_eq!(r, root);
            assert_eq!(ds.find(r), root);
        }
    }
}
