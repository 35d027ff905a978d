//! Compressed Sparse Row (CSR) graph representation.
//!
//! Variables:
//!   V        = number of vertices
//!   E        = number of edges
//!   row_ptr  = prefix-sum of out-degrees, length V+1
//!   col_idx  = concatenated neighbour lists, length E
//!
//! Equations:
//!   row_ptr[0] = 0
//!   row_ptr[v+1] = row_ptr[v] + out_degree(v)
//!   neighbours(v) = col_idx[ row_ptr[v] .. row_ptr[v+1] ]

pub struct Csr {
    pub row_ptr: Vec<usize>, // length V+1
    pub col_idx: Vec<usize>, // length E
}

impl Csr {
    /// Build CSR from an adjacency list (each inner vec is a neighbour list).
    pub fn from_adj(adj: &[Vec<usize>]) -> Self {
        let mut row_ptr = Vec::with_capacity(adj.len() + 1);
        let mut col_idx = Vec::new();

        row_ptr.push(0);
        for neighbours in adj {
            col_idx.extend_from_slice(neighbours);
            row_ptr.push(col_idx.len());
        }

        Self { row_ptr, col_idx }
    }

    pub fn vertex_count(&self) -> usize {
        self.row_ptr.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.col_idx.len()
    }

    /// Neighbours of vertex v as a slice.
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.col_idx[self.row_ptr[v]..self.row_ptr[v + 1]]
    }
}
