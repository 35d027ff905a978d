//! Property-based checks over randomized inputs.

use proptest::prelude::*;

use algokit::dynamic_programming::lis::{lis, lis_length};
use algokit::searching::binary_search::binary_search;
use algokit::searching::bounds::{lower_bound, upper_bound};
use algokit::sorting::merge_sort::merge_sort;
use algokit::sorting::quick_sort::quick_sort;
use algokit::string_algorithms::kmp::kmp_search;
use algokit::string_algorithms::rabin_karp::rabin_karp;
use algokit::string_algorithms::suffix_array::{lcp_array, suffix_array};
use algokit::string_algorithms::z_algorithm::z_search;

proptest! {
    #[test]
    fn sorted_output_is_a_sorted_permutation(input in prop::collection::vec(any::<i32>(), 0..200)) {
        let merged = merge_sort(&input);
        let mut quicked = input.clone();
        quick_sort(&mut quicked);

        let mut expected = input.clone();
        expected.sort_unstable();

        prop_assert_eq!(&merged, &expected);
        prop_assert_eq!(&quicked, &expected);
    }

    #[test]
    fn binary_search_finds_every_member(mut input in prop::collection::vec(any::<i16>(), 1..100)) {
        input.sort_unstable();
        for &x in &input {
            let idx = binary_search(&input, &x).expect("member must be found");
            prop_assert_eq!(input[idx], x);
        }
    }

    #[test]
    fn bounds_bracket_equal_runs(mut input in prop::collection::vec(0i32..20, 0..100), probe in 0i32..20) {
        input.sort_unstable();
        let lo = lower_bound(&input, &probe);
        let hi = upper_bound(&input, &probe);
        prop_assert!(lo <= hi);
        let count = input.iter().filter(|&&v| v == probe).count();
        prop_assert_eq!(hi - lo, count);
        prop_assert!(input[..lo].iter().all(|&v| v < probe));
        prop_assert!(input[hi..].iter().all(|&v| v > probe));
    }

    #[test]
    fn pattern_searches_agree(text in "[ab]{0,60}", pattern in "[ab]{1,6}") {
        let expected = kmp_search(&text, &pattern);
        prop_assert_eq!(&rabin_karp(&text, &pattern), &expected);
        prop_assert_eq!(&z_search(&text, &pattern), &expected);
    }

    #[test]
    fn suffix_array_is_sorted_and_lcp_consistent(s in "[abc]{0,40}") {
        let sa = suffix_array(&s);
        let bytes = s.as_bytes();
        for w in sa.windows(2) {
            prop_assert!(bytes[w[0]..] < bytes[w[1]..]);
        }
        let lcp = lcp_array(&s, &sa);
        for (i, &l) in lcp.iter().enumerate().skip(1) {
            let x = &bytes[sa[i - 1]..];
            let y = &bytes[sa[i]..];
            let common = x.iter().zip(y.iter()).take_while(|(a, b)| a == b).count();
            prop_assert_eq!(l, common);
        }
    }

    #[test]
    fn lis_matches_quadratic_reference(input in prop::collection::vec(0i32..30, 0..40)) {
        // O(n^2) reference
        let n = input.len();
        let mut dp = vec![1usize; n];
        let mut best = 0;
        for i in 0..n {
            for j in 0..i {
                if input[j] < input[i] {
                    dp[i] = dp[i].max(dp[j] + 1);
                }
            }
            best = best.max(dp[i]);
        }

        prop_assert_eq!(lis_length(&input), best);

        let seq = lis(&input);
        prop_assert_eq!(seq.len(), best);
        prop_assert!(seq.windows(2).all(|w| w[0] < w[1]));
    }
}
