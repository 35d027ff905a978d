use std::collections::HashMap;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use algokit::catalog::{entries_for, Category, CATALOG};
use algokit::data_structures::disjoint_set::DisjointSet;
use algokit::data_structures::heap::MinHeap;
use algokit::dynamic_programming::{
    coin_change::coin_change, edit_distance::edit_distance, held_karp::held_karp,
    knapsack::knapsack_01, lcs::lcs_length, lis::lis_length, memoization::fib_memo,
    tabulation::fib_tab,
};
use algokit::graph::{
    bellman_ford::bellman_ford, bfs::bfs, bridges::tarjan_bridges, dfs::dfs, dijkstra::dijkstra,
    euler::hierholzer, kruskal::kruskal, prim::prim, scc::kosaraju_scc,
    topological_sort::topological_sort,
};
use algokit::numerical::{
    fast_exponentiation::fast_pow, gcd::gcd, matrix_multiplication::matrix_multiply, sieve::sieve,
};
use algokit::searching::{
    binary_search::binary_search, bounds::lower_bound, linear_search::linear_search,
};
use algokit::sorting::{heap_sort::heap_sort, merge_sort::merge_sort, quick_sort::quick_sort};
use algokit::string_algorithms::{
    kmp::kmp_search, rabin_karp::rabin_karp, suffix_array::suffix_array, trie::Trie,
    z_algorithm::z_search,
};
use algokit::tree::{bst::Bst, fenwick::Fenwick, link_cut::LinkCutTree, segment_tree::SegmentTree};

#[derive(Parser, Debug)]
#[command(name = "algokit", version, about = "Classic algorithms catalog and demo runner")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the algorithm catalog.
    List,
    /// Run fixed sanity inputs through one category, or all of them.
    Demo {
        #[arg(value_enum)]
        category: Option<CategoryArg>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CategoryArg {
    Sorting,
    Searching,
    Graph,
    Tree,
    DynamicProgramming,
    StringAlgorithms,
    DataStructures,
    Numerical,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Sorting => Category::Sorting,
            CategoryArg::Searching => Category::Searching,
            CategoryArg::Graph => Category::Graph,
            CategoryArg::Tree => Category::Tree,
            CategoryArg::DynamicProgramming => Category::DynamicProgramming,
            CategoryArg::StringAlgorithms => Category::StringAlgorithms,
            CategoryArg::DataStructures => Category::DataStructures,
            CategoryArg::Numerical => Category::Numerical,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List => list(cli.json),
        Commands::Demo { category } => demo(category.map(Category::from), cli.json),
    }
}

fn list(json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(CATALOG).context("serializing catalog")?;
        println!("{out}");
        return Ok(());
    }
    println!("{:<42} | {:<30} | {}", "path", "computation", "complexity");
    println!("{}", "-".repeat(96));
    for e in CATALOG {
        println!("{:<42} | {:<30} | {}", e.path, e.computation, e.complexity);
    }
    Ok(())
}

fn demo(category: Option<Category>, json: bool) -> Result<()> {
    let selected: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    let mut results: Vec<(&'static str, usize)> = Vec::new();
    for cat in selected {
        info!(category = cat.module(), "running demo");
        let checks = match cat {
            Category::Sorting => demo_sorting()?,
            Category::Searching => demo_searching()?,
            Category::Graph => demo_graph()?,
            Category::Tree => demo_tree()?,
            Category::DynamicProgramming => demo_dynamic_programming()?,
            Category::StringAlgorithms => demo_strings()?,
            Category::DataStructures => demo_data_structures()?,
            Category::Numerical => demo_numerical()?,
        };
        results.push((cat.module(), checks));
    }

    if json {
        let map: HashMap<&str, usize> = results.iter().copied().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (module, checks) in &results {
            println!("{module}: {checks} checks passed ({} algorithms)",
                entries_for_len(module));
        }
    }
    Ok(())
}

fn entries_for_len(module: &str) -> usize {
    Category::ALL
        .iter()
        .find(|c| c.module() == module)
        .map(|&c| entries_for(c).len())
        .unwrap_or(0)
}

fn demo_sorting() -> Result<usize> {
    let input = [5u32, 3, 8, 1, 9, 2, 7];
    let expected = {
        let mut v = input.to_vec();
        v.sort_unstable();
        v
    };

    ensure!(merge_sort(&input) == expected, "merge sort mismatch");

    let mut quick = input.to_vec();
    quick_sort(&mut quick);
    ensure!(quick == expected, "quick sort mismatch");

    let mut heap = input.to_vec();
    heap_sort(&mut heap);
    ensure!(heap == expected, "heap sort mismatch");

    Ok(3)
}

fn demo_searching() -> Result<usize> {
    let sorted = [1, 3, 5, 7, 9];
    ensure!(binary_search(&sorted, &7) == Some(3), "binary search mismatch");
    ensure!(linear_search(&sorted, &9) == Some(4), "linear search mismatch");
    ensure!(lower_bound(&sorted, &4) == 2, "lower bound mismatch");
    Ok(3)
}

fn demo_graph() -> Result<usize> {
    let adj = vec![vec![1, 2], vec![3], vec![3], vec![]];
    ensure!(bfs(&adj, 0) == vec![0, 1, 2, 3], "bfs mismatch");
    ensure!(dfs(&adj, 0) == vec![0, 1, 3, 2], "dfs mismatch");
    ensure!(topological_sort(&adj)? == vec![0, 1, 2, 3], "topo sort mismatch");

    let weighted = vec![vec![(1, 4), (2, 1)], vec![(3, 1)], vec![(1, 2), (3, 5)], vec![]];
    ensure!(dijkstra(&weighted, 0) == vec![0, 3, 1, 4], "dijkstra mismatch");

    let edges = [(0usize, 1usize, 1i64), (1, 2, 2), (0, 2, 4)];
    ensure!(bellman_ford(3, &edges, 0)? == vec![0, 1, 3], "bellman-ford mismatch");

    let mst_edges = [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)];
    let k = kruskal(4, &mst_edges)?;
    let mut padj = vec![Vec::new(); 4];
    for &(a, b, w) in &mst_edges {
        padj[a].push((b, w));
        padj[b].push((a, w));
    }
    let p = prim(&padj)?;
    ensure!(k.total_weight == 19 && p.total_weight == 19, "mst weight mismatch");

    let cyclic = vec![vec![1], vec![2], vec![0, 3], vec![4], vec![3]];
    ensure!(kosaraju_scc(&cyclic).len() == 2, "scc count mismatch");

    let bridged = vec![vec![1], vec![0, 2], vec![1]];
    ensure!(tarjan_bridges(&bridged).len() == 2, "bridge count mismatch");

    let circuit = vec![vec![1], vec![2], vec![0]];
    ensure!(hierholzer(&circuit)?.len() == 4, "euler trail mismatch");

    Ok(9)
}

fn demo_tree() -> Result<usize> {
    let mut bst = Bst::new();
    for v in [5, 2, 8, 1, 9] {
        bst.insert(v);
    }
    ensure!(bst.in_order() == vec![&1, &2, &5, &8, &9], "bst order mismatch");

    let seg = SegmentTree::from_slice(&[1, 2, 3, 4, 5]);
    ensure!(seg.query(1, 4) == 9, "segment tree mismatch");

    let mut fen = Fenwick::new(5);
    for (i, v) in [1i64, 2, 3, 4, 5].into_iter().enumerate() {
        fen.add(i, v);
    }
    ensure!(fen.range_sum(1, 4) == 9, "fenwick mismatch");

    let mut lct = LinkCutTree::new(4);
    lct.link(0, 1)?;
    lct.link(1, 2)?;
    ensure!(lct.connected(0, 2), "link-cut connectivity mismatch");
    lct.cut(1, 2)?;
    ensure!(!lct.connected(0, 2), "link-cut cut mismatch");

    Ok(5)
}

fn demo_dynamic_programming() -> Result<usize> {
    let mut memo = HashMap::new();
    ensure!(fib_memo(20, &mut memo) == 6765, "fib memo mismatch");
    ensure!(fib_tab(20) == 6765, "fib tab mismatch");
    ensure!(knapsack_01(&[(1, 1), (3, 4), (4, 5), (5, 7)], 7) == 9, "knapsack mismatch");
    ensure!(lcs_length("ABCBDAB", "BDCABA") == 4, "lcs mismatch");
    ensure!(edit_distance("kitten", "sitting") == 3, "edit distance mismatch");
    ensure!(lis_length(&[10, 9, 2, 5, 3, 7, 101, 18]) == 4, "lis mismatch");
    ensure!(coin_change(&[1, 10, 25], 30) == Some(3), "coin change mismatch");

    let dist = vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ];
    ensure!(held_karp(&dist) == Some(80), "held-karp mismatch");

    Ok(8)
}

fn demo_strings() -> Result<usize> {
    ensure!(kmp_search("abracadabra", "abra") == vec![0, 7], "kmp mismatch");
    ensure!(rabin_karp("aaaa", "aa") == vec![0, 1, 2], "rabin-karp mismatch");
    ensure!(z_search("ababab", "abab") == vec![0, 2], "z search mismatch");

    let mut trie = Trie::new();
    for w in ["car", "card", "care"] {
        trie.insert(w);
    }
    ensure!(trie.count_prefix("car") == 3, "trie prefix mismatch");

    ensure!(suffix_array("banana") == vec![5, 3, 1, 0, 4, 2], "suffix array mismatch");
    Ok(5)
}

fn demo_data_structures() -> Result<usize> {
    let mut heap = MinHeap::new();
    for v in [4, 1, 3] {
        heap.push(v);
    }
    ensure!(heap.pop_min() == Some(1), "min-heap mismatch");

    let mut ds = DisjointSet::new(4);
    ds.union(0, 1);
    ds.union(2, 3);
    ensure!(ds.component_count() == 2, "disjoint set mismatch");
    ensure!(ds.connected(0, 1) && !ds.connected(1, 2), "connectivity mismatch");

    Ok(3)
}

fn demo_numerical() -> Result<usize> {
    ensure!(gcd(48, 18) == 6, "gcd mismatch");
    ensure!(fast_pow(2, 10) == 1024, "fast pow mismatch");
    ensure!(sieve(30).len() == 10, "sieve mismatch");

    let a = vec![vec![1, 2], vec![3, 4]];
    let b = vec![vec![5, 6], vec![7, 8]];
    ensure!(matrix_multiply(&a, &b) == vec![vec![19, 22], vec![43, 50]], "matrix mismatch");

    Ok(4)
}
