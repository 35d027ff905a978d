pub mod coin_change;
pub mod edit_distance;
pub mod held_karp;
pub mod knapsack;
pub mod lcs;
pub mod lis;
pub mod memoization;
pub mod tabulation;
