//! Rabin-Karp rolling-hash search.
//!
//! Window hash h = sum of t[i] * BASE^(m-1-i) mod MOD; sliding drops
//! the leading term and shifts in the next byte. Hash hits are
//! verified byte-for-byte, so collisions cannot produce false matches.

pub fn rabin_karp(text: &str, pattern: &str) -> Vec<usize> {
    const BASE: u64 = 256;
    const MOD: u64 = 1_000_000_007;

    let t = text.as_bytes();
    let p = pattern.as_bytes();
    let n = t.len();
    let m = p.len();
    if m == 0 || m > n {
        return vec![];
    }

    let mut hash_p = 0;
    let mut hash_t = 0;
    let mut power = 1; // BASE^(m-1) mod MOD

    for i in 0..m {
        hash_p = (hash_p * BASE + p[i] as u64) % MOD;
        hash_t = (hash_t * BASE + t[i] as u64) % MOD;
        if i < m - 1 {
            power = (power * BASE) % MOD;
        }
    }

    let mut result = Vec::new();
    for i in 0..=n - m {
        if hash_p == hash_t && &t[i..i + m] == p {
            result.push(i);
        }
        if i < n - m {
            hash_t = (MOD + hash_t - (t[i] as u64 * power) % MOD) % MOD;
            hash_t = (hash_t * BASE + t[i + m] as u64) % MOD;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::rabin_karp;
    use crate::string_algorithms::kmp::kmp_search;

    #[test]
    fn finds_all_occurrences() {
        assert_eq!(rabin_karp("abracadabra", "abra"), vec![0, 7]);
        assert_eq!(rabin_karp("aaaa", "aa"), vec![0, 1, 2]);
    }

    #[test]
    fn pattern_longer_than_text() {
        assert_eq!(rabin_karp("ab", "abc"), Vec::<usize>::new());
        assert_eq!(rabin_karp("ab", ""), Vec::<usize>::new());
    }

    #[test]
    fn agrees_with_kmp() {
        let text = "mississippi mississippi";
        for pattern in ["ss", "issi", "ppi", "q"] {
            assert_eq!(rabin_karp(text, pattern), kmp_search(text, pattern));
        }
    }
}
