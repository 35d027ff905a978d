//! Levenshtein edit distance, two-row tabulation.
//!
//! Equations:
//!   dp[i][j] = dp[i-1][j-1]                         if a[i-1] == b[j-1]
//!            = 1 + min(dp[i-1][j-1],                (substitute)
//!                      dp[i-1][j],                  (delete)
//!                      dp[i][j-1])                  (insert)
//!
//!   Only the previous row is ever read, so O(min side) space.

pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=b.len() {
            cur[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(prev[j]).min(cur[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}
