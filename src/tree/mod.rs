use thiserror::Error;

pub mod bst;
pub mod fenwick;
pub mod link_cut;
pub mod segment_tree;

/// Failure modes for dynamic-tree operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("vertices {0} and {1} are already connected")]
    AlreadyConnected(usize, usize),
    #[error("no tree edge between {0} and {1}")]
    EdgeNotFound(usize, usize),
}
