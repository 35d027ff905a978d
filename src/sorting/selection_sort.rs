//! Selection sort.
//!
//! Iteration i selects the minimum of arr[i..] and swaps it into slot i,
//! so arr[..i] always holds the i smallest elements in order.

pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::selection_sort;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![64, 25, 12, 22, 11];
        selection_sort(&mut v);
        assert_eq!(v, vec![11, 12, 22, 25, 64]);
    }

    #[test]
    fn all_equal_is_stable_under_value() {
        let mut v = vec![3, 3, 3];
        selection_sort(&mut v);
        assert_eq!(v, vec![3, 3, 3]);
    }
}
