//! Bottom-up DP: fill the table in dependency order.

pub fn fib_tab(n: usize) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    let mut dp = vec![0u64; n + 1];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
    }
    dp[n]
}

#[cfg(test)]
mod tests {
    use super::fib_tab;
    use crate::dynamic_programming::memoization::fib_memo;
    use std::collections::HashMap;

    #[test]
    fn known_values() {
        assert_eq!(fib_tab(0), 0);
        assert_eq!(fib_tab(1), 1);
        assert_eq!(fib_tab(10), 55);
    }

    #[test]
    fn agrees_with_memoized_variant() {
        let mut memo = HashMap::new();
        for n in 0..30 {
            assert_eq!(fib_tab(n as usize), fib_memo(n, &mut memo));
        }
    }
}
