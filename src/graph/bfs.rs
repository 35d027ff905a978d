use std::collections::VecDeque;

/// Breadth-first visit order from `start`.
pub fn bfs(adj: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &n in &adj[node] {
            if !visited[n] {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    order
}

/// Hop distance from `start` to every vertex, `None` for unreachable.
pub fn bfs_distances(adj: &[Vec<usize>], start: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; adj.len()];
    let mut queue = VecDeque::new();

    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let d = dist[node].unwrap_or(0);
        for &n in &adj[node] {
            if dist[n].is_none() {
                dist[n] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::{bfs, bfs_distances};

    #[test]
    fn visits_in_level_order() {
        let adj = vec![vec![1, 2], vec![3], vec![3], vec![]];
        assert_eq!(bfs(&adj, 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn distances_mark_unreachable() {
        let adj = vec![vec![1], vec![], vec![1]];
        assert_eq!(bfs_distances(&adj, 0), vec![Some(0), Some(1), None]);
    }
}
