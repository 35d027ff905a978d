//! Dijkstra single-source shortest paths over non-negative weights.
//!
//! The binary heap is ordered by reversed cost so pop yields the
//! cheapest frontier vertex; stale entries are skipped when their cost
//! exceeds the settled distance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    position: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// dist[v] = shortest path length start -> v, u64::MAX if unreachable.
pub fn dijkstra(adj: &[Vec<(usize, u64)>], start: usize) -> Vec<u64> {
    let mut dist = vec![u64::MAX; adj.len()];
    let mut heap = BinaryHeap::new();

    dist[start] = 0;
    heap.push(State {
        cost: 0,
        position: start,
    });

    while let Some(State { cost, position }) = heap.pop() {
        if cost > dist[position] {
            continue;
        }

        for &(next, weight) in &adj[position] {
            let next_cost = cost + weight;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                heap.push(State {
                    cost: next_cost,
                    position: next,
                });
            }
        }
    }
    dist
}

/// Shortest path itself, as a vertex sequence start..=goal.
pub fn dijkstra_path(adj: &[Vec<(usize, u64)>], start: usize, goal: usize) -> Option<Vec<usize>> {
    let mut dist = vec![u64::MAX; adj.len()];
    let mut prev = vec![usize::MAX; adj.len()];
    let mut heap = BinaryHeap::new();

    dist[start] = 0;
    heap.push(State {
        cost: 0,
        position: start,
    });

    while let Some(State { cost, position }) = heap.pop() {
        if cost > dist[position] {
            continue;
        }
        if position == goal {
            break;
        }
        for &(next, weight) in &adj[position] {
            let next_cost = cost + weight;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                prev[next] = position;
                heap.push(State {
                    cost: next_cost,
                    position: next,
                });
            }
        }
    }

    if dist[goal] == u64::MAX {
        return None;
    }
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = prev[cur];
        path.push(cur);
    }
    path.reverse();
    Some(path)
}
