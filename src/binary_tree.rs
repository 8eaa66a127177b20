use crate::arena::{Arena, Link, NodeId};
use crate::tree::{Probe, SearchTree};
use std::cmp::Ordering;
use std::fmt;

/// Inserts `key` below `root` without rebalancing and returns the root of the
/// resulting subtree. A duplicate key leaves the subtree untouched.
pub fn insert(nodes: &mut Arena, root: Link, key: i32) -> NodeId {
    let Some(root) = root else {
        return nodes.alloc(key);
    };

    let mut cur = root;
    loop {
        let node = &nodes[cur];
        let (next, ord) = match key.cmp(&node.key) {
            Ordering::Less => (node.left, Ordering::Less),
            Ordering::Greater => (node.right, Ordering::Greater),
            Ordering::Equal => return root,
        };
        match next {
            Some(child) => cur = child,
            None => {
                let new = nodes.alloc(key);
                if ord == Ordering::Less {
                    nodes[cur].left = Some(new);
                } else {
                    nodes[cur].right = Some(new);
                }
                return root;
            }
        }
    }
}

/// Iterative descent counting one comparison per visited node, including the
/// node that matches.
pub fn search(nodes: &Arena, root: Link, key: i32) -> Probe {
    let mut probe = Probe::default();
    let mut cur = root;
    while let Some(id) = cur {
        probe.comparisons += 1;
        let node = &nodes[id];
        match key.cmp(&node.key) {
            Ordering::Equal => {
                probe.found = true;
                return probe;
            }
            Ordering::Less => cur = node.left,
            Ordering::Greater => cur = node.right,
        }
    }
    probe
}

/// Unbalanced binary search tree over `i32` keys.
#[derive(Default)]
pub struct BinaryTree {
    nodes: Arena,
    root: Link,
}

impl SearchTree for BinaryTree {
    const NAME: &'static str = "Bin";

    fn new() -> Self {
        BinaryTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    fn insert(&mut self, key: i32) -> bool {
        let before = self.nodes.len();
        self.root = Some(insert(&mut self.nodes, self.root, key));
        self.nodes.len() > before
    }

    fn search(&self, key: i32) -> Probe {
        search(&self.nodes, self.root, key)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn height(&self) -> i32 {
        self.nodes.depth(self.root)
    }

    fn keys(&self) -> Vec<i32> {
        self.nodes.keys(self.root)
    }

    fn teardown(&mut self) -> usize {
        self.root = None;
        self.nodes.clear()
    }
}

impl BinaryTree {
    pub fn root(&self) -> Link {
        self.root
    }

    pub fn nodes(&self) -> &Arena {
        &self.nodes
    }
}

impl fmt::Debug for BinaryTree {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("BinaryTree")
            .field("len", &self.nodes.len())
            .field("root", &self.root.map(|id| self.nodes[id].key))
            .field("keys", &self.keys())
            .finish()
    }
}
