//! Held-Karp exact travelling salesman over bitmask subsets.
//!
//! Variables:
//!   n          = number of cities (n <= 20 or the table won't fit)
//!   dist[i][j] = cost of travelling i -> j
//!   dp[mask][j] = cheapest path that starts at city 0, visits exactly
//!                 the cities in mask, and ends at j (0 and j in mask)
//!
//! Equations:
//!   dp[{0}][0] = 0
//!   dp[mask][j] = min over k in mask\{j} of dp[mask\{j}][k] + dist[k][j]
//!   tour = min over j != 0 of dp[full][j] + dist[j][0]
//!
//!   Complexity: O(2^n * n^2) time, O(2^n * n) space.

use tracing::debug;

const INF: u64 = u64::MAX / 2;

/// Cost of the cheapest tour visiting every city once and returning to 0.
/// `None` for an empty matrix or when no tour exists (INF-priced edges).
/// Asymmetric matrices are fine. Single city tours cost 0.
pub fn held_karp(dist: &[Vec<u64>]) -> Option<u64> {
    let n = dist.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0);
    }
    debug_assert!(n <= 20, "held_karp table is 2^n * n");

    let full = 1usize << n;
    let mut dp = vec![vec![INF; n]; full];
    dp[1][0] = 0;

    for mask in 1..full {
        if mask & 1 == 0 {
            continue; // every path starts at city 0
        }
        for j in 1..n {
            if mask & (1 << j) == 0 {
                continue;
            }
            let prev_mask = mask ^ (1 << j);
            let mut best = INF;
            for k in 0..n {
                if prev_mask & (1 << k) == 0 {
                    continue;
                }
                let cost = dp[prev_mask][k].saturating_add(dist[k][j]);
                if cost < best {
                    best = cost;
                }
            }
            dp[mask][j] = best;
        }
    }

    let mut tour = INF;
    for j in 1..n {
        let cost = dp[full - 1][j].saturating_add(dist[j][0]);
        if cost < tour {
            tour = cost;
        }
    }

    debug!(cities = n, cost = tour, "held_karp tour evaluated");
    if tour >= INF {
        None
    } else {
        Some(tour)
    }
}

#[cfg(test)]
mod tests {
    use super::{held_karp, INF};

    fn brute_force(dist: &[Vec<u64>]) -> Option<u64> {
        let n = dist.len();
        let mut cities: Vec<usize> = (1..n).collect();
        let mut best: Option<u64> = None;
        permute(&mut cities, 0, &mut |perm| {
            let mut cost = 0u64;
            let mut cur = 0;
            for &c in perm {
                cost = cost.saturating_add(dist[cur][c]);
                cur = c;
            }
            cost = cost.saturating_add(dist[cur][0]);
            if cost < INF && best.map_or(true, |b| cost < b) {
                best = Some(cost);
            }
        });
        best
    }

    fn permute(v: &mut Vec<usize>, k: usize, f: &mut impl FnMut(&[usize])) {
        if k == v.len() {
            f(v);
            return;
        }
        for i in k..v.len() {
            v.swap(k, i);
            permute(v, k + 1, f);
            v.swap(k, i);
        }
    }

    #[test]
    fn four_city_square() {
        let dist = vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ];
        assert_eq!(held_karp(&dist), Some(80));
    }

    #[test]
    fn matches_brute_force() {
        // deterministic pseudo-random 6-city asymmetric instance
        let n = 6;
        let mut dist = vec![vec![0u64; n]; n];
        let mut x = 0x2545_f491_4f6c_dd1du64;
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    x ^= x << 13;
                    x ^= x >> 7;
                    x ^= x << 17;
                    dist[i][j] = x % 97 + 1;
                }
            }
        }
        assert_eq!(held_karp(&dist), brute_force(&dist));
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(held_karp(&[]), None);
        assert_eq!(held_karp(&[vec![0]]), Some(0));
        assert_eq!(held_karp(&[vec![0, 3], vec![4, 0]]), Some(7));
    }

    #[test]
    fn missing_edges_mean_no_tour() {
        let dist = vec![vec![0, 1, INF], vec![1, 0, INF], vec![INF, INF, 0]];
        assert_eq!(held_karp(&dist), None);
    }
}
