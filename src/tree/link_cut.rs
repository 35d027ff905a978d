//! Link-cut tree over a fixed set of indexed vertices.
//!
//! The forest of preferred paths is stored as splay trees keyed by
//! depth; path-parent pointers stitch the splay trees together.
//!
//! Variables:
//!   ch[x]     = [left, right] splay children (NIL if absent)
//!   parent[x] = splay parent, or path-parent when x is a splay root
//!   rev[x]    = lazy reversal mark (flips the represented path)
//!
//! Equations:
//!   access(x):    expose the root..x path as one splay tree, splay x
//!   make_root(x): access(x) then toggle rev — x becomes tree root
//!   link(u, v):   make_root(u), parent[u] = v      (u, v disjoint)
//!   cut(u, v):    make_root(u), access(v); edge exists iff v's left
//!                 splay child is u and u has no right child
//!
//!   All operations are O(log n) amortised.

use super::TreeError;

const NIL: usize = usize::MAX;

struct Node {
    ch: [usize; 2],
    parent: usize,
    rev: bool,
}

pub struct LinkCutTree {
    nodes: Vec<Node>,
}

impl LinkCutTree {
    pub fn new(n: usize) -> Self {
        let nodes = (0..n)
            .map(|_| Node {
                ch: [NIL, NIL],
                parent: NIL,
                rev: false,
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True while parent[x] is a path-parent pointer, not a splay edge.
    fn is_splay_root(&self, x: usize) -> bool {
        let p = self.nodes[x].parent;
        p == NIL || (self.nodes[p].ch[0] != x && self.nodes[p].ch[1] != x)
    }

    fn push_down(&mut self, x: usize) {
        if self.nodes[x].rev {
            self.nodes[x].ch.swap(0, 1);
            for c in self.nodes[x].ch {
                if c != NIL {
                    self.nodes[c].rev ^= true;
                }
            }
            self.nodes[x].rev = false;
        }
    }

    fn rotate(&mut self, x: usize) {
        let p = self.nodes[x].parent;
        let g = self.nodes[p].parent;
        let dir = usize::from(self.nodes[p].ch[1] == x);
        let child = self.nodes[x].ch[1 - dir];

        if !self.is_splay_root(p) {
            let gdir = usize::from(self.nodes[g].ch[1] == p);
            self.nodes[g].ch[gdir] = x;
        }
        self.nodes[x].parent = g;

        self.nodes[p].ch[dir] = child;
        if child != NIL {
            self.nodes[child].parent = p;
        }

        self.nodes[x].ch[1 - dir] = p;
        self.nodes[p].parent = x;
    }

    fn splay(&mut self, x: usize) {
        // clear lazy marks from the splay root down to x first
        let mut path = vec![x];
        let mut cur = x;
        while !self.is_splay_root(cur) {
            cur = self.nodes[cur].parent;
            path.push(cur);
        }
        for &v in path.iter().rev() {
            self.push_down(v);
        }

        while !self.is_splay_root(x) {
            let p = self.nodes[x].parent;
            if !self.is_splay_root(p) {
                let g = self.nodes[p].parent;
                let zig_zig =
                    (self.nodes[g].ch[1] == p) == (self.nodes[p].ch[1] == x);
                if zig_zig {
                    self.rotate(p);
                } else {
                    self.rotate(x);
                }
            }
            self.rotate(x);
        }
    }

    /// Make the path from x's tree root to x preferred, splay x to the top.
    fn access(&mut self, x: usize) {
        let mut last = NIL;
        let mut cur = x;
        while cur != NIL {
            self.splay(cur);
            self.nodes[cur].ch[1] = last;
            last = cur;
            cur = self.nodes[cur].parent;
        }
        self.splay(x);
    }

    fn make_root(&mut self, x: usize) {
        self.access(x);
        self.nodes[x].rev ^= true;
    }

    /// Root of the represented tree containing x.
    pub fn find_root(&mut self, x: usize) -> usize {
        self.access(x);
        let mut cur = x;
        loop {
            self.push_down(cur);
            let l = self.nodes[cur].ch[0];
            if l == NIL {
                break;
            }
            cur = l;
        }
        self.splay(cur); // keep the structure balanced for the next query
        cur
    }

    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        u == v || self.find_root(u) == self.find_root(v)
    }

    /// Attach the tree rooted at u under v.
    pub fn link(&mut self, u: usize, v: usize) -> Result<(), TreeError> {
        if self.connected(u, v) {
            return Err(TreeError::AlreadyConnected(u, v));
        }
        self.make_root(u);
        self.nodes[u].parent = v;
        Ok(())
    }

    /// Remove the edge (u, v) if it exists.
    pub fn cut(&mut self, u: usize, v: usize) -> Result<(), TreeError> {
        if u == v {
            return Err(TreeError::EdgeNotFound(u, v));
        }
        self.make_root(u);
        self.access(v);
        // with u as root, the u..v path collapses to an edge exactly
        // when u is v's left splay child and u has no right child
        if self.nodes[v].ch[0] != u || self.nodes[u].ch[1] != NIL {
            return Err(TreeError::EdgeNotFound(u, v));
        }
        self.nodes[v].ch[0] = NIL;
        self.nodes[u].parent = NIL;
        Ok(())
    }
}
