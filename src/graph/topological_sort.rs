//! Topological ordering via Kahn's algorithm.
//!
//! A cycle leaves some vertex with non-zero indegree forever, so an
//! order shorter than V means the input was not a DAG.

use std::collections::VecDeque;

use super::GraphError;

pub fn topological_sort(adj: &[Vec<usize>]) -> Result<Vec<usize>, GraphError> {
    let mut indegree = vec![0; adj.len()];
    for edges in adj {
        for &v in edges {
            indegree[v] += 1;
        }
    }

    let mut queue = VecDeque::new();
    for i in 0..adj.len() {
        if indegree[i] == 0 {
            queue.push_back(i);
        }
    }

    let mut order = Vec::new();
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adj[u] {
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() != adj.len() {
        return Err(GraphError::CycleDetected);
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::topological_sort;
    use crate::graph::GraphError;

    #[test]
    fn orders_a_dag() {
        let adj = vec![vec![1, 2], vec![3], vec![3], vec![]];
        let order = topological_sort(&adj).unwrap();
        // every edge must point forward in the order
        let pos: Vec<usize> = {
            let mut p = vec![0; adj.len()];
            for (i, &v) in order.iter().enumerate() {
                p[v] = i;
            }
            p
        };
        for (u, edges) in adj.iter().enumerate() {
            for &v in edges {
                assert!(pos[u] < pos[v]);
            }
        }
    }

    #[test]
    fn rejects_cycles() {
        let adj = vec![vec![1], vec![2], vec![0]];
        assert_eq!(topological_sort(&adj), Err(GraphError::CycleDetected));
    }

    #[test]
    fn empty_graph() {
        assert_eq!(topological_sort(&[]), Ok(vec![]));
    }
}
