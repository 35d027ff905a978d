//! Counting sort for unsigned keys.
//!
//! Variables:
//!   counts[v] = number of occurrences of value v
//!   max       = largest key in the input
//!
//! Complexity: O(n + max) time and O(max) extra space, so only sensible
//! when the key range is comparable to n.

pub fn counting_sort(arr: &[usize]) -> Vec<usize> {
    let Some(&max) = arr.iter().max() else {
        return Vec::new();
    };

    let mut counts = vec![0usize; max + 1];
    for &v in arr {
        counts[v] += 1;
    }

    let mut out = Vec::with_capacity(arr.len());
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::counting_sort;

    #[test]
    fn sorts_small_range() {
        assert_eq!(counting_sort(&[4, 2, 2, 8, 3, 3, 1]), vec![1, 2, 2, 3, 3, 4, 8]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(counting_sort(&[]), Vec::<usize>::new());
    }

    #[test]
    fn zeros_are_valid_keys() {
        assert_eq!(counting_sort(&[0, 5, 0]), vec![0, 0, 5]);
    }
}
