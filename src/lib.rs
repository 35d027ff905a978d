//! # algokit
//!
//! Classic algorithm and data-structure library organized by category.
//!
//! ## Modules
//!
//! - `sorting` – Ordering algorithms (bubble, insertion, selection, merge, quick, heap, counting)
//! - `searching` – Lookup algorithms (linear, binary, bounds, hash-based)
//! - `graph` – Traversal & pathfinding (BFS, DFS, Dijkstra, Bellman-Ford, topological sort,
//!   Kruskal/Prim MSTs, Kosaraju SCC, Tarjan bridges, Hierholzer)
//! - `tree` – Tree structures (BST, segment tree, Fenwick, link-cut tree)
//! - `dynamic_programming` – Memoization and tabulation strategies (knapsack, LCS, edit
//!   distance, LIS, coin change, Held-Karp)
//! - `string_algorithms` – Pattern matching & indexing (KMP, Rabin–Karp, Z, trie, suffix array)
//! - `data_structures` – Core structural containers (stack, queue, heap, linked list,
//!   hash table, disjoint set)
//! - `numerical` – Mathematical algorithms (GCD, fast power, sieve, matrix multiply)
//! - `catalog` – Machine-readable index of everything above
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algokit::sorting::merge_sort::merge_sort;
//!
//! let sorted = merge_sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! ```
//!
//! ---
//!
//! Each algorithm file is self-contained and independently testable.

pub mod catalog;
pub mod data_structures;
pub mod dynamic_programming;
pub mod graph;
pub mod numerical;
pub mod searching;
pub mod sorting;
pub mod string_algorithms;
pub mod tree;
