//! Minimum coins to reach an amount, unbounded supply per denomination.
//!
//! dp[a] = fewest coins summing to a, None while unreachable.

pub fn coin_change(coins: &[u64], amount: u64) -> Option<u64> {
    let amount = amount as usize;
    let mut dp: Vec<Option<u64>> = vec![None; amount + 1];
    dp[0] = Some(0);

    for a in 1..=amount {
        for &c in coins {
            let c = c as usize;
            if c == 0 || c > a {
                continue;
            }
            if let Some(sub) = dp[a - c] {
                dp[a] = Some(dp[a].map_or(sub + 1, |best| best.min(sub + 1)));
            }
        }
    }
    dp[amount]
}
