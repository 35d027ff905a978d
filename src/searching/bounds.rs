//! Lower/upper bound on a sorted slice.
//!
//! Equations:
//!   lower_bound(a, x) = min { i | a[i] >= x }   (a.len() if none)
//!   upper_bound(a, x) = min { i | a[i] >  x }   (a.len() if none)
//!
//! Together they bracket the run of elements equal to x:
//!   count(x) = upper_bound(a, x) - lower_bound(a, x)

pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        if &arr[m] < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}

pub fn upper_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        if &arr[m] <= target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}
