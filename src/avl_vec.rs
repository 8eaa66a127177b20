use crate::arena::{Arena, Link, NodeId};
use crate::binary_tree;
use crate::tree::{Probe, SearchTree};
use std::cmp::Ordering;
use std::fmt;

/// Inserts `key` below `root`, rebalancing on the way back up, and returns the
/// root of the resulting subtree. The caller must store the returned id in
/// place of `root`, since a rotation may have promoted another node.
pub fn insert(nodes: &mut Arena, root: Link, key: i32) -> NodeId {
    let Some(id) = root else {
        return nodes.alloc(key);
    };

    match key.cmp(&nodes[id].key) {
        Ordering::Less => {
            let left = nodes[id].left;
            nodes[id].left = Some(insert(nodes, left, key));
        }
        Ordering::Greater => {
            let right = nodes[id].right;
            nodes[id].right = Some(insert(nodes, right, key));
        }
        Ordering::Equal => return id,
    }

    update_height(nodes, id);
    rebalance(nodes, id, key)
}

/// Identical descent to the unbalanced tree; only the shape differs.
pub fn search(nodes: &Arena, root: Link, key: i32) -> Probe {
    binary_tree::search(nodes, root, key)
}

pub fn balance_factor(nodes: &Arena, link: Link) -> i32 {
    match link {
        Some(id) => nodes.height(nodes[id].left) - nodes.height(nodes[id].right),
        None => 0,
    }
}

/// Applies at most one single or double rotation at `id`, chosen by which side
/// is heavy and on which side of the heavy child `key` was inserted.
fn rebalance(nodes: &mut Arena, id: NodeId, key: i32) -> NodeId {
    let balance = balance_factor(nodes, Some(id));
    if balance > 1 {
        let Some(left) = nodes[id].left else {
            return id;
        };
        if key > nodes[left].key {
            let left = rotate_left(nodes, left);
            nodes[id].left = Some(left);
        }
        rotate_right(nodes, id)
    } else if balance < -1 {
        let Some(right) = nodes[id].right else {
            return id;
        };
        if key < nodes[right].key {
            let right = rotate_right(nodes, right);
            nodes[id].right = Some(right);
        }
        rotate_left(nodes, id)
    } else {
        id
    }
}

/// Promotes the left child of `y` and returns it. Heights are refreshed for
/// `y` first because the new root's height depends on it.
pub fn rotate_right(nodes: &mut Arena, y: NodeId) -> NodeId {
    let Some(x) = nodes[y].left else {
        return y;
    };
    let t2 = nodes[x].right;

    nodes[x].right = Some(y);
    nodes[y].left = t2;

    update_height(nodes, y);
    update_height(nodes, x);
    x
}

pub fn rotate_left(nodes: &mut Arena, x: NodeId) -> NodeId {
    let Some(y) = nodes[x].right else {
        return x;
    };
    let t2 = nodes[y].left;

    nodes[y].left = Some(x);
    nodes[x].right = t2;

    update_height(nodes, x);
    update_height(nodes, y);
    y
}

fn update_height(nodes: &mut Arena, id: NodeId) {
    let left_height = nodes.height(nodes[id].left);
    let right_height = nodes.height(nodes[id].right);
    nodes[id].height = 1 + left_height.max(right_height);
}

/// Height-balanced binary search tree over `i32` keys.
#[derive(Default)]
pub struct AvlTree {
    nodes: Arena,
    root: Link,
}

impl SearchTree for AvlTree {
    const NAME: &'static str = "AVL";

    fn new() -> Self {
        AvlTree {
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
        self.nodes.height(self.root)
    }

    fn keys(&self) -> Vec<i32> {
        self.nodes.keys(self.root)
    }

    fn teardown(&mut self) -> usize {
        self.root = None;
        self.nodes.clear()
    }
}

impl AvlTree {
    pub fn root(&self) -> Link {
        self.root
    }

    pub fn nodes(&self) -> &Arena {
        &self.nodes
    }
}

impl fmt::Debug for AvlTree {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("AvlTree")
            .field("len", &self.nodes.len())
            .field("height", &self.height())
            .field("root", &self.root.map(|id| self.nodes[id].key))
            .field("keys", &self.keys())
            .finish()
    }
}
