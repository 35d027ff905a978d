//! Eulerian trail of a directed graph (Hierholzer).
//!
//! A trail using every edge exactly once exists iff:
//!   - at most one vertex has out_degree - in_degree == 1  (the start),
//!   - at most one vertex has in_degree - out_degree == 1  (the end),
//!   - every other vertex is balanced,
//!   - all edges lie in a single connected component.
//!
//! Hierholzer walks greedily, pushing the path onto a stack; when a
//! vertex runs out of unused edges it is emitted. Reversing the emit
//! order yields the trail. O(V + E).

use super::GraphError;

/// Vertex sequence of length E+1 visiting every edge once.
/// An edgeless graph yields an empty trail.
pub fn hierholzer(adj: &[Vec<usize>]) -> Result<Vec<usize>, GraphError> {
    let n = adj.len();
    let edge_count: usize = adj.iter().map(|e| e.len()).sum();
    if edge_count == 0 {
        return Ok(Vec::new());
    }

    let mut in_degree = vec![0usize; n];
    for edges in adj {
        for &v in edges {
            in_degree[v] += 1;
        }
    }

    let mut start = None;
    let mut end = None;
    for v in 0..n {
        let out = adj[v].len();
        if out == in_degree[v] {
            continue;
        }
        if out == in_degree[v] + 1 {
            if start.replace(v).is_some() {
                return Err(GraphError::NoEulerianTrail("more than one surplus-out vertex"));
            }
        } else if in_degree[v] == out + 1 {
            if end.replace(v).is_some() {
                return Err(GraphError::NoEulerianTrail("more than one surplus-in vertex"));
            }
        } else {
            return Err(GraphError::NoEulerianTrail("vertex degree imbalance exceeds one"));
        }
    }
    if start.is_some() != end.is_some() {
        return Err(GraphError::NoEulerianTrail("unpaired trail endpoints"));
    }

    // circuit case: start anywhere with an outgoing edge
    let start = match start {
        Some(s) => s,
        None => (0..n).find(|&v| !adj[v].is_empty()).unwrap_or(0),
    };

    let mut next_edge = vec![0usize; n];
    let mut stack = vec![start];
    let mut trail = Vec::with_capacity(edge_count + 1);

    while let Some(&v) = stack.last() {
        if next_edge[v] < adj[v].len() {
            let u = adj[v][next_edge[v]];
            next_edge[v] += 1;
            stack.push(u);
        } else {
            trail.push(v);
            stack.pop();
        }
    }
    trail.reverse();

    // a short trail means some edges were unreachable from start
    if trail.len() != edge_count + 1 {
        return Err(GraphError::NoEulerianTrail("edges are not connected"));
    }
    Ok(trail)
}

#[cfg(test)]
mod tests {
    use super::hierholzer;
    use crate::graph::GraphError;

    fn assert_uses_every_edge_once(adj: &[Vec<usize>], trail: &[usize]) {
        let mut remaining: Vec<Vec<usize>> = adj.to_vec();
        for w in trail.windows(2) {
            let pos = remaining[w[0]]
                .iter()
                .position(|&v| v == w[1])
                .expect("trail uses edge not in graph");
            remaining[w[0]].swap_remove(pos);
        }
        assert!(remaining.iter().all(|e| e.is_empty()));
    }

    #[test]
    fn finds_circuit() {
        let adj = vec![vec![1], vec![2], vec![0]];
        let trail = hierholzer(&adj).unwrap();
        assert_eq!(trail.len(), 4);
        assert_eq!(trail.first(), trail.last());
        assert_uses_every_edge_once(&adj, &trail);
    }

    #[test]
    fn finds_open_trail() {
        // 0 -> 1 -> 2 -> 0 -> 3
        let adj = vec![vec![1, 3], vec![2], vec![0], vec![]];
        let trail = hierholzer(&adj).unwrap();
        assert_eq!(trail.first(), Some(&0));
        assert_eq!(trail.last(), Some(&3));
        assert_uses_every_edge_once(&adj, &trail);
    }

    #[test]
    fn rejects_imbalanced_degrees() {
        let adj = vec![vec![1, 1], vec![]];
        assert!(matches!(
            hierholzer(&adj),
            Err(GraphError::NoEulerianTrail(_))
        ));
    }

    #[test]
    fn rejects_disconnected_edges() {
        // two disjoint cycles cannot share one trail
        let adj = vec![vec![1], vec![0], vec![3], vec![2]];
        assert_eq!(
            hierholzer(&adj),
            Err(GraphError::NoEulerianTrail("edges are not connected"))
        );
    }

    #[test]
    fn edgeless_graph_is_trivial() {
        assert_eq!(hierholzer(&[vec![], vec![]]), Ok(vec![]));
    }
}
