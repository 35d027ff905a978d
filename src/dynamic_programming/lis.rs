//! Longest strictly increasing subsequence, patience method.
//!
//! tails[k] = smallest possible tail of an increasing subsequence of
//! length k+1. Each element replaces its lower_bound in tails, so
//! tails stays sorted and its length is the LIS length. O(n log n).

pub fn lis_length<T: Ord>(arr: &[T]) -> usize {
    let mut tails: Vec<&T> = Vec::new();
    for v in arr {
        // first tail >= v gets replaced; equal tails too, keeping it strict
        let pos = tails.partition_point(|&t| t < v);
        if pos == tails.len() {
            tails.push(v);
        } else {
            tails[pos] = v;
        }
    }
    tails.len()
}

/// One longest increasing subsequence, by predecessor links — O(n log n).
pub fn lis<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.is_empty() {
        return Vec::new();
    }
    // tails_idx[k] = index of the best tail for length k+1
    let mut tails_idx: Vec<usize> = Vec::new();
    let mut prev = vec![usize::MAX; arr.len()];

    for (i, v) in arr.iter().enumerate() {
        let pos = tails_idx
            .binary_search_by(|&t| arr[t].cmp(v))
            .unwrap_or_else(|e| e);
        if pos > 0 {
            prev[i] = tails_idx[pos - 1];
        }
        if pos == tails_idx.len() {
            tails_idx.push(i);
        } else {
            tails_idx[pos] = i;
        }
    }

    let mut out = Vec::with_capacity(tails_idx.len());
    let mut cur = *tails_idx.last().expect("non-empty input");
    loop {
        out.push(arr[cur].clone());
        if prev[cur] == usize::MAX {
            break;
        }
        cur = prev[cur];
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::{lis, lis_length};

    #[test]
    fn classic_instance() {
        let v = [10, 9, 2, 5, 3, 7, 101, 18];
        assert_eq!(lis_length(&v), 4);
        let seq = lis(&v);
        assert_eq!(seq.len(), 4);
        assert!(seq.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn strictness_on_duplicates() {
        assert_eq!(lis_length(&[7, 7, 7]), 1);
        assert_eq!(lis(&[7, 7, 7]), vec![7]);
    }

    #[test]
    fn monotone_inputs() {
        assert_eq!(lis_length(&[1, 2, 3, 4]), 4);
        assert_eq!(lis_length(&[4, 3, 2, 1]), 1);
        assert_eq!(lis_length::<i32>(&[]), 0);
        assert!(lis::<i32>(&[]).is_empty());
    }
}
