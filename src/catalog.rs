//! Machine-readable index of every algorithm in the crate.
//!
//! One entry per algorithm file, serializable so tooling can consume
//! the inventory as JSON.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    Tree,
    DynamicProgramming,
    StringAlgorithms,
    DataStructures,
    Numerical,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Sorting,
        Category::Searching,
        Category::Graph,
        Category::Tree,
        Category::DynamicProgramming,
        Category::StringAlgorithms,
        Category::DataStructures,
        Category::Numerical,
    ];

    /// Module directory under src/ holding this category.
    pub fn module(self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graph => "graph",
            Category::Tree => "tree",
            Category::DynamicProgramming => "dynamic_programming",
            Category::StringAlgorithms => "string_algorithms",
            Category::DataStructures => "data_structures",
            Category::Numerical => "numerical",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Path of the implementing file relative to src/.
    pub path: &'static str,
    pub category: Category,
    pub computation: &'static str,
    pub deterministic: bool,
    pub complexity: &'static str,
}

const fn entry(
    path: &'static str,
    category: Category,
    computation: &'static str,
    complexity: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        path,
        category,
        computation,
        deterministic: true,
        complexity,
    }
}

/// Mapping of modules in src/ to type of computation and cost.
pub const CATALOG: &[CatalogEntry] = &[
    // Sorting
    entry("sorting/bubble_sort.rs", Category::Sorting, "Sorting", "O(n^2)"),
    entry("sorting/insertion_sort.rs", Category::Sorting, "Sorting", "O(n^2)"),
    entry("sorting/selection_sort.rs", Category::Sorting, "Sorting", "O(n^2)"),
    entry("sorting/merge_sort.rs", Category::Sorting, "Sorting", "O(n log n)"),
    entry("sorting/quick_sort.rs", Category::Sorting, "Sorting", "O(n log n) expected"),
    entry("sorting/heap_sort.rs", Category::Sorting, "Sorting", "O(n log n)"),
    entry("sorting/counting_sort.rs", Category::Sorting, "Sorting", "O(n + max)"),
    // Searching
    entry("searching/linear_search.rs", Category::Searching, "Search", "O(n)"),
    entry("searching/binary_search.rs", Category::Searching, "Search", "O(log n)"),
    entry("searching/bounds.rs", Category::Searching, "Search", "O(log n)"),
    entry("searching/hash_lookup.rs", Category::Searching, "Search", "O(1) expected"),
    // Graph
    entry("graph/adj_list.rs", Category::Graph, "Graph representation", "O(V + E)"),
    entry("graph/csr.rs", Category::Graph, "Graph representation", "O(V + E)"),
    entry("graph/bfs.rs", Category::Graph, "Graph traversal", "O(V + E)"),
    entry("graph/dfs.rs", Category::Graph, "Graph traversal", "O(V + E)"),
    entry("graph/dijkstra.rs", Category::Graph, "Shortest path", "O(E log V)"),
    entry("graph/bellman_ford.rs", Category::Graph, "Shortest path", "O(V * E)"),
    entry("graph/topological_sort.rs", Category::Graph, "Topological ordering", "O(V + E)"),
    entry("graph/kruskal.rs", Category::Graph, "Minimum spanning tree", "O(E log E)"),
    entry("graph/prim.rs", Category::Graph, "Minimum spanning tree", "O(E log E)"),
    entry("graph/scc.rs", Category::Graph, "Strongly connected components", "O(V + E)"),
    entry("graph/bridges.rs", Category::Graph, "Bridge finding", "O(V + E)"),
    entry("graph/euler.rs", Category::Graph, "Eulerian trail", "O(V + E)"),
    // Tree
    entry("tree/bst.rs", Category::Tree, "Ordered set operations", "O(h) per op"),
    entry("tree/segment_tree.rs", Category::Tree, "Range queries", "O(log n) per op"),
    entry("tree/fenwick.rs", Category::Tree, "Prefix sums", "O(log n) per op"),
    entry("tree/link_cut.rs", Category::Tree, "Dynamic connectivity", "O(log n) amortised"),
    // Dynamic programming
    entry("dynamic_programming/memoization.rs", Category::DynamicProgramming, "DP computation", "O(n)"),
    entry("dynamic_programming/tabulation.rs", Category::DynamicProgramming, "DP computation", "O(n)"),
    entry("dynamic_programming/knapsack.rs", Category::DynamicProgramming, "DP computation", "O(n * cap)"),
    entry("dynamic_programming/lcs.rs", Category::DynamicProgramming, "DP computation", "O(n * m)"),
    entry("dynamic_programming/edit_distance.rs", Category::DynamicProgramming, "DP computation", "O(n * m)"),
    entry("dynamic_programming/lis.rs", Category::DynamicProgramming, "DP computation", "O(n log n)"),
    entry("dynamic_programming/coin_change.rs", Category::DynamicProgramming, "DP computation", "O(n * amount)"),
    entry("dynamic_programming/held_karp.rs", Category::DynamicProgramming, "Exact TSP", "O(2^n * n^2)"),
    // String algorithms
    entry("string_algorithms/kmp.rs", Category::StringAlgorithms, "Pattern matching", "O(n + m)"),
    entry("string_algorithms/rabin_karp.rs", Category::StringAlgorithms, "Pattern matching", "O(n + m) expected"),
    entry("string_algorithms/z_algorithm.rs", Category::StringAlgorithms, "Pattern matching", "O(n + m)"),
    entry("string_algorithms/trie.rs", Category::StringAlgorithms, "Prefix indexing", "O(len) per op"),
    entry("string_algorithms/suffix_array.rs", Category::StringAlgorithms, "Suffix indexing", "O(n log^2 n)"),
    // Data structures
    entry("data_structures/stack.rs", Category::DataStructures, "Container operations", "O(1) per op"),
    entry("data_structures/queue.rs", Category::DataStructures, "Container operations", "O(1) per op"),
    entry("data_structures/heap.rs", Category::DataStructures, "Priority queue", "O(log n) per op"),
    entry("data_structures/linked_list.rs", Category::DataStructures, "Container operations", "O(1) front ops"),
    entry("data_structures/hash_table.rs", Category::DataStructures, "Associative lookup", "O(1) expected"),
    entry("data_structures/disjoint_set.rs", Category::DataStructures, "Set union", "O(alpha(n)) amortised"),
    // Numerical
    entry("numerical/gcd.rs", Category::Numerical, "Number theory", "O(log min(a, b))"),
    entry("numerical/fast_exponentiation.rs", Category::Numerical, "Number theory", "O(log exp)"),
    entry("numerical/sieve.rs", Category::Numerical, "Prime generation", "O(n log log n)"),
    entry("numerical/matrix_multiplication.rs", Category::Numerical, "Linear algebra", "O(n^3)"),
];

/// Entries belonging to one category, in catalog order.
pub fn entries_for(category: Category) -> Vec<&'static CatalogEntry> {
    CATALOG.iter().filter(|e| e.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::{entries_for, Category, CATALOG};

    #[test]
    fn every_category_is_populated() {
        for cat in Category::ALL {
            assert!(!entries_for(cat).is_empty(), "{cat:?} has no entries");
        }
    }

    #[test]
    fn paths_are_unique_and_match_categories() {
        let mut seen = std::collections::HashSet::new();
        for e in CATALOG {
            assert!(seen.insert(e.path), "duplicate path {}", e.path);
            assert!(
                e.path.starts_with(e.category.module()),
                "{} not under {}",
                e.path,
                e.category.module()
            );
        }
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_string(&CATALOG[0]).unwrap();
        assert!(json.contains("\"category\":\"sorting\""));
    }
}
