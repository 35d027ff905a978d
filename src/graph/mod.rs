use thiserror::Error;

pub mod adj_list;
pub mod bellman_ford;
pub mod bfs;
pub mod bridges;
pub mod csr;
pub mod dfs;
pub mod dijkstra;
pub mod euler;
pub mod kruskal;
pub mod prim;
pub mod scc;
pub mod topological_sort;

/// Failure modes shared by the graph algorithms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph contains a cycle")]
    CycleDetected,
    #[error("graph is not connected")]
    Disconnected,
    #[error("negative-weight cycle reachable from source")]
    NegativeCycle,
    #[error("no eulerian trail: {0}")]
    NoEulerianTrail(&'static str),
}

/// A minimum spanning tree: the chosen edges and their summed weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mst {
    pub edges: Vec<(usize, usize, u64)>,
    pub total_weight: u64,
}
