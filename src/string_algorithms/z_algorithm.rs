//! Z-array: z[i] = length of the longest common prefix of s and s[i..].
//!
//! The [l, r) window is the rightmost segment already matched against
//! the prefix; positions inside it reuse earlier answers before
//! extending by direct comparison. O(n).

pub fn z_array(s: &str) -> Vec<usize> {
    let s = s.as_bytes();
    let n = s.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;

    let (mut l, mut r) = (0, 0);
    for i in 1..n {
        if i < r {
            z[i] = z[i - l].min(r - i);
        }
        while i + z[i] < n && s[z[i]] == s[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > r {
            l = i;
            r = i + z[i];
        }
    }
    z
}

/// Pattern search by Z-decomposition of pattern + separator + text.
pub fn z_search(text: &str, pattern: &str) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }
    let m = pattern.len();
    let joined = format!("{pattern}\u{0}{text}");
    let z = z_array(&joined);

    z[m + 1..]
        .iter()
        .enumerate()
        .filter_map(|(i, &len)| if len >= m { Some(i) } else { None })
        .collect()
}
