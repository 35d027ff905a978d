//! Dense i64 matrix product, ikj loop order for row-major locality.

pub fn matrix_multiply(a: &[Vec<i64>], b: &[Vec<i64>]) -> Vec<Vec<i64>> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let n = a.len();
    let m = b[0].len();
    let mut result = vec![vec![0; m]; n];

    for i in 0..n {
        for k in 0..b.len() {
            let aik = a[i][k];
            for j in 0..m {
                result[i][j] += aik * b[k][j];
            }
        }
    }
    result
}

/// n x n identity, useful as a multiplication unit in tests and demos.
pub fn identity(n: usize) -> Vec<Vec<i64>> {
    let mut m = vec![vec![0; n]; n];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1;
    }
    m
}
