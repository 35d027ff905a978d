//! Prim's minimum spanning tree from a weighted adjacency list.
//!
//! Grows the tree from vertex 0; the heap holds candidate crossing
//! edges keyed by weight, stale entries are skipped on pop.
//!
//! Complexity: O(E log E).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{GraphError, Mst};

/// Undirected graph: every edge (u, v, w) must appear in both adj[u] and adj[v].
pub fn prim(adj: &[Vec<(usize, u64)>]) -> Result<Mst, GraphError> {
    if adj.is_empty() {
        return Ok(Mst {
            edges: Vec::new(),
            total_weight: 0,
        });
    }

    let mut in_tree = vec![false; adj.len()];
    let mut heap = BinaryHeap::new(); // Reverse((weight, to, from))
    let mut chosen = Vec::with_capacity(adj.len() - 1);
    let mut total = 0u64;

    in_tree[0] = true;
    for &(to, w) in &adj[0] {
        heap.push(Reverse((w, to, 0)));
    }

    while let Some(Reverse((w, to, from))) = heap.pop() {
        if in_tree[to] {
            continue;
        }
        in_tree[to] = true;
        chosen.push((from, to, w));
        total += w;

        for &(next, nw) in &adj[to] {
            if !in_tree[next] {
                heap.push(Reverse((nw, next, to)));
            }
        }
    }

    if chosen.len() != adj.len() - 1 {
        return Err(GraphError::Disconnected);
    }
    Ok(Mst {
        edges: chosen,
        total_weight: total,
    })
}

#[cfg(test)]
mod tests {
    use super::prim;
    use crate::graph::GraphError;

    fn undirected(v: usize, edges: &[(usize, usize, u64)]) -> Vec<Vec<(usize, u64)>> {
        let mut adj = vec![Vec::new(); v];
        for &(a, b, w) in edges {
            adj[a].push((b, w));
            adj[b].push((a, w));
        }
        adj
    }

    #[test]
    fn finds_minimum_total() {
        let adj = undirected(
            4,
            &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
        );
        let mst = prim(&adj).unwrap();
        assert_eq!(mst.total_weight, 19);
        assert_eq!(mst.edges.len(), 3);
    }

    #[test]
    fn rejects_disconnected_graph() {
        let adj = undirected(3, &[(0, 1, 1)]);
        assert_eq!(prim(&adj), Err(GraphError::Disconnected));
    }
}
