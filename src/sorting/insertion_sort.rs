//! Insertion sort.
//!
//! Invariant: arr[..i] is sorted before iteration i; element i is walked
//! left until it sits in order.

pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::insertion_sort;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![9, 3, 7, 1, 1, 6];
        insertion_sort(&mut v);
        assert_eq!(v, vec![1, 1, 3, 6, 7, 9]);
    }

    #[test]
    fn reverse_sorted_input() {
        let mut v = vec![5, 4, 3, 2, 1];
        insertion_sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }
}
