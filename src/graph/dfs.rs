/// Depth-first preorder from `start`.
pub fn dfs(adj: &[Vec<usize>], start: usize) -> Vec<usize> {
    fn visit(node: usize, adj: &[Vec<usize>], visited: &mut [bool], out: &mut Vec<usize>) {
        visited[node] = true;
        out.push(node);
        for &n in &adj[node] {
            if !visited[n] {
                visit(n, adj, visited, out);
            }
        }
    }

    let mut visited = vec![false; adj.len()];
    let mut order = Vec::new();
    visit(start, adj, &mut visited, &mut order);
    order
}

/// Iterative variant for graphs deep enough to threaten the call stack.
pub fn dfs_iterative(adj: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut visited = vec![false; adj.len()];
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        // push in reverse so the first neighbour is visited first
        for &n in adj[node].iter().rev() {
            if !visited[n] {
                stack.push(n);
            }
        }
    }
    order
}
