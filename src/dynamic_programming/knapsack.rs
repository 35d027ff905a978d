//! 0/1 knapsack by capacity tabulation.
//!
//! Variables:
//!   dp[c] = best value achievable with capacity c using items seen so far
//!
//! Equations:
//!   per item (w, v):  dp[c] = max(dp[c], dp[c - w] + v)  for c from cap down to w
//!   (descending c so each item is used at most once)
//!
//!   Complexity: O(items * capacity) time, O(capacity) space.

pub fn knapsack_01(items: &[(u64, u64)], capacity: u64) -> u64 {
    let cap = capacity as usize;
    let mut dp = vec![0u64; cap + 1];

    for &(weight, value) in items {
        let w = weight as usize;
        if w > cap {
            continue;
        }
        for c in (w..=cap).rev() {
            dp[c] = dp[c].max(dp[c - w] + value);
        }
    }
    dp[cap]
}

#[cfg(test)]
mod tests {
    use super::knapsack_01;

    #[test]
    fn textbook_instance() {
        // weights/values: (1,1) (3,4) (4,5) (5,7), cap 7 -> best 9
        let items = [(1, 1), (3, 4), (4, 5), (5, 7)];
        assert_eq!(knapsack_01(&items, 7), 9);
    }

    #[test]
    fn zero_capacity_and_oversized_items() {
        assert_eq!(knapsack_01(&[(2, 10)], 0), 0);
        assert_eq!(knapsack_01(&[(5, 100), (1, 1)], 3), 1);
        assert_eq!(knapsack_01(&[], 10), 0);
    }

    #[test]
    fn each_item_used_once() {
        // one item of value 10; repeating it would give 20
        assert_eq!(knapsack_01(&[(1, 10)], 5), 10);
    }
}
