//! Bridges of an undirected graph (Tarjan low-link).
//!
//! Variables:
//!   disc[v] = DFS discovery time of v
//!   low[v]  = min discovery time reachable from v's subtree using at
//!             most one back edge
//!
//! Equations:
//!   tree edge (u, v):  low[u] = min(low[u], low[v])
//!   back edge (u, v):  low[u] = min(low[u], disc[v])
//!   (u, v) is a bridge  iff  low[v] > disc[u]

const UNVISITED: usize = usize::MAX;

/// All bridges as (u, v) pairs with u < v. Handles disconnected graphs.
pub fn tarjan_bridges(adj: &[Vec<usize>]) -> Vec<(usize, usize)> {
    let n = adj.len();
    let mut disc = vec![UNVISITED; n];
    let mut low = vec![0; n];
    let mut timer = 0;
    let mut bridges = Vec::new();

    #[allow(clippy::too_many_arguments)]
    fn visit(
        u: usize,
        parent: usize,
        adj: &[Vec<usize>],
        disc: &mut [usize],
        low: &mut [usize],
        timer: &mut usize,
        bridges: &mut Vec<(usize, usize)>,
    ) {
        disc[u] = *timer;
        low[u] = *timer;
        *timer += 1;

        let mut parent_skipped = false;
        for &v in &adj[u] {
            // skip exactly one copy of the parent edge so parallel
            // edges still count as a cycle
            if v == parent && !parent_skipped {
                parent_skipped = true;
                continue;
            }
            if disc[v] == UNVISITED {
                visit(v, u, adj, disc, low, timer, bridges);
                low[u] = low[u].min(low[v]);
                if low[v] > disc[u] {
                    bridges.push((u.min(v), u.max(v)));
                }
            } else {
                low[u] = low[u].min(disc[v]);
            }
        }
    }

    for v in 0..n {
        if disc[v] == UNVISITED {
            visit(v, UNVISITED, adj, &mut disc, &mut low, &mut timer, &mut bridges);
        }
    }
    bridges.sort_unstable();
    bridges
}
