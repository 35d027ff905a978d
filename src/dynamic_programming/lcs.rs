//! Longest common subsequence with reconstruction.
//!
//! Equations:
//!   dp[i][j] = dp[i-1][j-1] + 1                 if a[i-1] == b[j-1]
//!            = max(dp[i-1][j], dp[i][j-1])      otherwise
//!
//!   Reconstruction walks from dp[n][m] back to dp[0][0] following
//!   whichever case produced each cell.
//!
//! Inputs are compared per char, so multi-byte text is handled whole.

pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_table(&a, &b)[a.len()][b.len()]
}

/// The subsequence itself (one of possibly several of maximal length).
pub fn lcs(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let dp = lcs_table(&a, &b);

    let mut out = Vec::with_capacity(dp[a.len()][b.len()]);
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.into_iter().rev().collect()
}

fn lcs_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}
