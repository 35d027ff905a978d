//! Suffix array by prefix doubling, with Kasai LCP.
//!
//! Variables:
//!   sa[i]   = start of the i-th smallest suffix
//!   rank[p] = position of suffix p in the current k-prefix order
//!   lcp[i]  = longest common prefix of suffixes sa[i-1] and sa[i]
//!
//! Each round sorts by (rank[p], rank[p+k]) and doubles k, so ranks
//! converge after O(log n) rounds — O(n log^2 n) total with the
//! comparison sort.

use tracing::trace;

pub fn suffix_array(s: &str) -> Vec<usize> {
    let s = s.as_bytes();
    let n = s.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = s.iter().map(|&b| b as usize).collect();
    let mut tmp = vec![0usize; n];

    let mut k = 1;
    while k < n {
        let key = |p: usize| (rank[p], if p + k < n { rank[p + k] + 1 } else { 0 });
        sa.sort_by_key(|&p| key(p));

        tmp[sa[0]] = 0;
        for i in 1..n {
            tmp[sa[i]] = tmp[sa[i - 1]] + usize::from(key(sa[i - 1]) != key(sa[i]));
        }
        rank.copy_from_slice(&tmp);

        if rank[sa[n - 1]] == n - 1 {
            break; // all ranks distinct, order is final
        }
        k *= 2;
    }
    trace!(len = n, "suffix array built");
    sa
}

/// Kasai: lcp[i] = lcp(suffix sa[i-1], suffix sa[i]); lcp[0] = 0. O(n).
pub fn lcp_array(s: &str, sa: &[usize]) -> Vec<usize> {
    let s = s.as_bytes();
    let n = s.len();
    let mut lcp = vec![0; n];
    if n == 0 {
        return lcp;
    }

    let mut rank = vec![0; n];
    for (i, &p) in sa.iter().enumerate() {
        rank[p] = i;
    }

    let mut h = 0usize;
    for p in 0..n {
        if rank[p] == 0 {
            h = 0;
            continue;
        }
        let q = sa[rank[p] - 1];
        while p + h < n && q + h < n && s[p + h] == s[q + h] {
            h += 1;
        }
        lcp[rank[p]] = h;
        h = h.saturating_sub(1);
    }
    lcp
}
