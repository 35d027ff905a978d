pub mod kmp;
pub mod rabin_karp;
pub mod suffix_array;
pub mod trie;
pub mod z_algorithm;
