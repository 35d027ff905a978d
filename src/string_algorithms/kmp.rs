//! Knuth-Morris-Pratt pattern search.
//!
//! lps[i] = length of the longest proper prefix of pattern[..=i] that
//! is also a suffix. On mismatch the pattern slides by its own
//! structure instead of rescanning the text. O(n + m).

pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    if p.is_empty() {
        return vec![];
    }

    let lps = lps_table(p);

    let mut res = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < t.len() {
        if t[i] == p[j] {
            i += 1;
            j += 1;
            if j == p.len() {
                res.push(i - j);
                j = lps[j - 1];
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
    res
}

fn lps_table(p: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; p.len()];
    let mut len = 0;
    for i in 1..p.len() {
        while len > 0 && p[i] != p[len] {
            len = lps[len - 1];
        }
        if p[i] == p[len] {
            len += 1;
            lps[i] = len;
        }
    }
    lps
}

#[cfg(test)]
mod tests {
    use super::kmp_search;

    #[test]
    fn finds_overlapping_matches() {
        assert_eq!(kmp_search("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(kmp_search("ababab", "abab"), vec![0, 2]);
    }

    #[test]
    fn textbook_pattern() {
        assert_eq!(
            kmp_search("ABABDABACDABABCABAB", "ABABCABAB"),
            vec![10]
        );
    }

    #[test]
    fn empty_and_missing() {
        assert_eq!(kmp_search("abc", ""), Vec::<usize>::new());
        assert_eq!(kmp_search("abc", "xyz"), Vec::<usize>::new());
        assert_eq!(kmp_search("", "a"), Vec::<usize>::new());
    }
}
