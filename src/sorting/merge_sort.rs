//! Merge sort — out-of-place, stable.
//!
//! Variables:
//!   arr : &[T]   — input, untouched
//!   out : Vec<T> — sorted copy
//!
//! Equations:
//!   merge_sort([])      = []
//!   merge_sort([x])     = [x]
//!   merge_sort(a)       = merge(merge_sort(left), merge_sort(right))
//!   merge keeps the left run's element on ties — stability.
//!
//!   Complexity: O(n log n) time, O(n) extra space.

pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                // <= keeps ties on the left: stable
                if l <= r {
                    out.push(left.next().unwrap());
                } else {
                    out.push(right.next().unwrap());
                }
            }
            (Some(_), None) => out.push(left.next().unwrap()),
            (None, Some(_)) => out.push(right.next().unwrap()),
            (None, None) => break,
        }
    }
    out
}
