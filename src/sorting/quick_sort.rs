//! Quick sort — in-place, Lomuto partition on the last element.

pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot_index = arr.len() - 1;
    let mut i = 0;
    for j in 0..pivot_index {
        if arr[j] <= arr[pivot_index] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, pivot_index);
    i
}

#[cfg(test)]
mod tests {
    use super::quick_sort;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![10, 7, 8, 9, 1, 5];
        quick_sort(&mut v);
        assert_eq!(v, vec![1, 5, 7, 8, 9, 10]);
    }

    #[test]
    fn duplicates_and_sorted_runs() {
        let mut v = vec![2, 2, 1, 1, 3, 3];
        quick_sort(&mut v);
        assert_eq!(v, vec![1, 1, 2, 2, 3, 3]);

        let mut sorted = vec![1, 2, 3, 4, 5];
        quick_sort(&mut sorted);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }
}
