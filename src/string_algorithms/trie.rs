//! Byte trie with word and prefix counts.
//!
//! Variables:
//!   children : HashMap<u8, usize>  — arena indices, per node
//!   pass[n]  = words whose path runs through node n
//!   end[n]   = words terminating exactly at node n
//!
//! Nodes live in a flat arena Vec so the structure owns no recursive
//! boxes; index 0 is the root.

use std::collections::HashMap;

struct TrieNode {
    children: HashMap<u8, usize>,
    pass: usize,
    end: usize,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            pass: 0,
            end: 0,
        }
    }
}

pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
        }
    }

    pub fn insert(&mut self, word: &str) {
        let mut cur = 0;
        self.nodes[0].pass += 1;
        for &b in word.as_bytes() {
            let next = match self.nodes[cur].children.get(&b) {
                Some(&n) => n,
                None => {
                    self.nodes.push(TrieNode::new());
                    let n = self.nodes.len() - 1;
                    self.nodes[cur].children.insert(b, n);
                    n
                }
            };
            cur = next;
            self.nodes[cur].pass += 1;
        }
        self.nodes[cur].end += 1;
    }

    fn walk(&self, s: &str) -> Option<usize> {
        let mut cur = 0;
        for &b in s.as_bytes() {
            cur = *self.nodes[cur].children.get(&b)?;
        }
        Some(cur)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| self.nodes[n].end > 0)
    }

    /// Number of inserted words starting with `prefix` (multiplicity counts).
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.walk(prefix).map_or(0, |n| self.nodes[n].pass)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
