//! Bellman-Ford single-source shortest paths with negative weights.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = edge list as (u, v, weight)
//!   dist[v] = shortest known distance from source to v
//!   INF     = i64::MAX / 2  (sentinel for unreachable, safe to add to)
//!
//! Equations:
//!   Initialise: dist[source] = 0,  dist[v] = INF  for v != source
//!
//!   Relax (repeated V-1 times):
//!     for each (u, v, w) in E:
//!       dist[v] = min(dist[v], dist[u] + w)
//!
//!   Negative cycle detection (pass V):
//!     if any edge still relaxes => negative cycle exists
//!
//!   Complexity: O(V * E)

use super::GraphError;

pub const INF: i64 = i64::MAX / 2;

/// dist[v] = shortest path length source -> v, INF for unreachable.
/// Errors when a negative-weight cycle is reachable from source.
pub fn bellman_ford(
    v: usize,
    edges: &[(usize, usize, i64)],
    source: usize,
) -> Result<Vec<i64>, GraphError> {
    let mut dist = vec![INF; v];
    if v == 0 {
        return Ok(dist);
    }
    dist[source] = 0;

    for _ in 0..v - 1 {
        let mut updated = false;
        for &(u, w, weight) in edges {
            if dist[u] != INF && dist[u] + weight < dist[w] {
                dist[w] = dist[u] + weight;
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    // V-th pass: anything still relaxing sits on a negative cycle
    for &(u, w, weight) in edges {
        if dist[u] != INF && dist[u] + weight < dist[w] {
            return Err(GraphError::NegativeCycle);
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::{bellman_ford, INF};
    use crate::graph::GraphError;

    #[test]
    fn handles_negative_edges() {
        let edges = [(0, 1, 4), (0, 2, 5), (1, 2, -3), (2, 3, 4)];
        let dist = bellman_ford(4, &edges, 0).unwrap();
        assert_eq!(dist, vec![0, 4, 1, 5]);
    }

    #[test]
    fn detects_negative_cycle() {
        let edges = [(0, 1, 1), (1, 2, -5), (2, 1, 2)];
        assert_eq!(bellman_ford(3, &edges, 0), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn unreachable_stays_inf() {
        let dist = bellman_ford(2, &[], 0).unwrap();
        assert_eq!(dist, vec![0, INF]);
    }
}
