pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    for (i, v) in arr.iter().enumerate() {
        if v == target {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::linear_search;

    #[test]
    fn finds_first_occurrence() {
        assert_eq!(linear_search(&[3, 1, 3], &3), Some(0));
    }

    #[test]
    fn missing_target() {
        assert_eq!(linear_search(&[1, 2, 3], &9), None);
        assert_eq!(linear_search::<i32>(&[], &9), None);
    }
}
