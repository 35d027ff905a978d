//! Fenwick tree (binary indexed tree) for prefix sums.
//!
//! Variables:
//!   tree : Vec<i64>  — 1-indexed, tree[i] covers (i - lowbit(i), i]
//!
//! Equations:
//!   lowbit(i)    = i & i.wrapping_neg()
//!   add(i, d):   walk i += lowbit(i), add d to each node      O(log N)
//!   prefix(i):   walk i -= lowbit(i), sum the nodes           O(log N)
//!   range(l, r) = prefix(r) - prefix(l)

pub struct Fenwick {
    tree: Vec<i64>,
}

impl Fenwick {
    pub fn new(n: usize) -> Self {
        Self {
            tree: vec![0; n + 1],
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `delta` at 0-based position i.
    pub fn add(&mut self, i: usize, delta: i64) {
        let mut i = i + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += i & i.wrapping_neg();
        }
    }

    /// Sum of elements in [0, i) (0-based, exclusive end).
    pub fn prefix_sum(&self, i: usize) -> i64 {
        let mut i = i.min(self.len());
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        sum
    }

    /// Sum of elements in [l, r).
    pub fn range_sum(&self, l: usize, r: usize) -> i64 {
        if l >= r {
            return 0;
        }
        self.prefix_sum(r) - self.prefix_sum(l)
    }
}

#[cfg(test)]
mod tests {
    use super::Fenwick;

    #[test]
    fn prefix_and_range_sums() {
        let mut f = Fenwick::new(5);
        for (i, v) in [1, 2, 3, 4, 5].into_iter().enumerate() {
            f.add(i, v);
        }
        assert_eq!(f.prefix_sum(0), 0);
        assert_eq!(f.prefix_sum(3), 6);
        assert_eq!(f.prefix_sum(5), 15);
        assert_eq!(f.range_sum(1, 4), 9);
        assert_eq!(f.range_sum(2, 2), 0);
    }

    #[test]
    fn updates_accumulate() {
        let mut f = Fenwick::new(3);
        f.add(1, 10);
        f.add(1, -4);
        assert_eq!(f.range_sum(1, 2), 6);
        assert_eq!(f.prefix_sum(3), 6);
    }
}
