//! Binary search tree with owned boxed nodes.
//!
//! Variables:
//!   root : Option<Box<Node<T>>>
//!   N    : usize — number of keys
//!
//! Equations:
//!   BST invariant: left subtree < node < right subtree (no duplicates)
//!   insert/contains/remove: O(h), h = tree height
//!   remove of a two-child node swaps in the minimum of the right subtree

struct Node<T: Ord> {
    key: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

#[derive(Default)]
pub struct Bst<T: Ord> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns false if the key was already present.
    pub fn insert(&mut self, key: T) -> bool {
        let mut cur = &mut self.root;
        loop {
            match cur {
                None => {
                    *cur = Some(Box::new(Node {
                        key,
                        left: None,
                        right: None,
                    }));
                    self.len += 1;
                    return true;
                }
                Some(node) => {
                    if key < node.key {
                        cur = &mut node.left;
                    } else if key > node.key {
                        cur = &mut node.right;
                    } else {
                        return false;
                    }
                }
            }
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        let mut cur = &self.root;
        while let Some(node) = cur {
            if *key < node.key {
                cur = &node.left;
            } else if *key > node.key {
                cur = &node.right;
            } else {
                return true;
            }
        }
        false
    }

    /// Returns false if the key was not present.
    pub fn remove(&mut self, key: &T) -> bool {
        fn remove_node<T: Ord>(slot: &mut Option<Box<Node<T>>>, key: &T) -> bool {
            let Some(node) = slot else {
                return false;
            };
            if *key < node.key {
                return remove_node(&mut node.left, key);
            }
            if *key > node.key {
                return remove_node(&mut node.right, key);
            }
            // found: splice out depending on child count
            match (node.left.take(), node.right.take()) {
                (None, None) => *slot = None,
                (Some(l), None) => *slot = Some(l),
                (None, Some(r)) => *slot = Some(r),
                (Some(l), Some(r)) => {
                    node.left = Some(l);
                    node.right = Some(r);
                    node.key = pop_min(&mut node.right);
                }
            }
            true
        }

        fn pop_min<T: Ord>(slot: &mut Option<Box<Node<T>>>) -> T {
            let node = slot.as_mut().unwrap();
            if node.left.is_some() {
                pop_min(&mut node.left)
            } else {
                let node = slot.take().unwrap();
                *slot = node.right;
                node.key
            }
        }

        if remove_node(&mut self.root, key) {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        fn walk<'a, T: Ord>(node: &'a Option<Box<Node<T>>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                walk(&n.left, out);
                out.push(&n.key);
                walk(&n.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    pub fn min(&self) -> Option<&T> {
        let mut cur = self.root.as_ref()?;
        while let Some(l) = cur.left.as_ref() {
            cur = l;
        }
        Some(&cur.key)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
