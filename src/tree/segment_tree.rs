//! Segment tree for range sums with point updates — iterative, bottom-up.
//!
//! Variables:
//!   n    : usize     — number of leaves
//!   tree : Vec<i64>  — length 2n; leaves at [n, 2n), internal at [1, n)
//!
//! Equations:
//!   tree[i] = tree[2i] + tree[2i + 1]   for i in [1, n)
//!   update(i, x): set leaf n+i, recompute ancestors    O(log n)
//!   query(l, r):  fold the O(log n) canonical segments covering [l, r)

pub struct SegmentTree {
    n: usize,
    tree: Vec<i64>,
}

impl SegmentTree {
    pub fn from_slice(values: &[i64]) -> Self {
        let n = values.len();
        let mut tree = vec![0; 2 * n];
        tree[n..].copy_from_slice(values);
        for i in (1..n).rev() {
            tree[i] = tree[2 * i] + tree[2 * i + 1];
        }
        Self { n, tree }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Set position i to `value`.
    pub fn update(&mut self, i: usize, value: i64) {
        let mut i = i + self.n;
        self.tree[i] = value;
        while i > 1 {
            i /= 2;
            self.tree[i] = self.tree[2 * i] + self.tree[2 * i + 1];
        }
    }

    /// Sum over [l, r).
    pub fn query(&self, l: usize, r: usize) -> i64 {
        let (mut l, mut r) = (l + self.n, r + self.n);
        let mut sum = 0;
        while l < r {
            if l % 2 == 1 {
                sum += self.tree[l];
                l += 1;
            }
            if r % 2 == 1 {
                r -= 1;
                sum += self.tree[r];
            }
            l /= 2;
            r /= 2;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentTree;

    #[test]
    fn range_sums_match_naive() {
        let values = [5, -2, 7, 0, 3, 1];
        let t = SegmentTree::from_slice(&values);
        for l in 0..values.len() {
            for r in l..=values.len() {
                let naive: i64 = values[l..r].iter().sum();
                assert_eq!(t.query(l, r), naive, "range [{l}, {r})");
            }
        }
    }

    #[test]
    fn point_update_changes_sums() {
        let mut t = SegmentTree::from_slice(&[1, 2, 3, 4]);
        assert_eq!(t.query(0, 4), 10);
        t.update(2, 10);
        assert_eq!(t.query(0, 4), 17);
        assert_eq!(t.query(2, 3), 10);
        assert_eq!(t.query(0, 2), 3);
    }
}
