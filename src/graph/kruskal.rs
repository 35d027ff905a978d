//! Kruskal's minimum spanning tree over an undirected edge list.
//!
//! Edges are scanned in ascending weight; union-find rejects any edge
//! that would close a cycle. A spanning tree of V vertices has exactly
//! V-1 edges, so fewer accepted edges means the graph is disconnected.
//!
//! Complexity: O(E log E) for the sort, near-O(E) for the unions.

use tracing::debug;

use super::{GraphError, Mst};
use crate::data_structures::disjoint_set::DisjointSet;

pub fn kruskal(v: usize, edges: &[(usize, usize, u64)]) -> Result<Mst, GraphError> {
    if v == 0 {
        return Ok(Mst {
            edges: Vec::new(),
            total_weight: 0,
        });
    }

    let mut sorted: Vec<(usize, usize, u64)> = edges.to_vec();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut ds = DisjointSet::new(v);
    let mut chosen = Vec::with_capacity(v - 1);
    let mut total = 0u64;

    for &(a, b, w) in &sorted {
        if ds.union(a, b) {
            chosen.push((a, b, w));
            total += w;
            if chosen.len() == v - 1 {
                break;
            }
        }
    }

    if chosen.len() != v - 1 {
        return Err(GraphError::Disconnected);
    }

    debug!(vertices = v, weight = total, "kruskal mst complete");
    Ok(Mst {
        edges: chosen,
        total_weight: total,
    })
}
