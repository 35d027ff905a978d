//! Bubble sort with early exit.
//!
//! Each pass bubbles the largest unsorted element to position n-1-pass.
//! A pass with zero swaps means the slice is sorted.
//!
//! Complexity: O(n^2) worst, O(n) on already-sorted input.

pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for pass in 0..n {
        let mut swapped = false;
        for i in 1..n - pass {
            if arr[i - 1] > arr[i] {
                arr.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::bubble_sort;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![5, 1, 4, 2, 8];
        bubble_sort(&mut v);
        assert_eq!(v, vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: Vec<i32> = vec![];
        bubble_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![7];
        bubble_sort(&mut one);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn already_sorted_stays_sorted() {
        let mut v = vec![1, 2, 3, 4];
        bubble_sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4]);
    }
}
