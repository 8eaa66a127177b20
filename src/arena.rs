use std::ops::{Index, IndexMut};

/// Position of a node inside the arena of the tree that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

pub type Link = Option<NodeId>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub key: i32,
    /// Only maintained by the AVL engine. Stays 1 in an unbalanced tree.
    pub height: i32,
    pub left: Link,
    pub right: Link,
}

impl Node {
    pub fn leaf(key: i32) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }
}

/// Backing storage for every node of one tree.
///
/// Nodes are only ever appended, so a `NodeId` stays valid until the whole
/// arena is cleared. There is no per-node removal.
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Arena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn alloc(&mut self, key: i32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::leaf(key));
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node and returns how many were released. Capacity is kept
    /// for the next batch.
    pub fn clear(&mut self) -> usize {
        self.nodes.drain(..).count()
    }

    /// Cached height of a subtree, 0 for an empty one.
    pub fn height(&self, link: Link) -> i32 {
        match link {
            Some(id) => self[id].height,
            None => 0,
        }
    }

    /// Keys of the subtree in ascending order.
    pub fn keys(&self, root: Link) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cur = root;
        loop {
            while let Some(id) = cur {
                stack.push(id);
                cur = self[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            keys.push(self[id].key);
            cur = self[id].right;
        }
        keys
    }

    /// Length of the longest root-to-leaf path, measured by walking the links
    /// rather than trusting the cached heights.
    pub fn depth(&self, root: Link) -> i32 {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, i32)> = root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_after_creation() {
        let arena = Arena::new();
        assert_eq!(arena.len(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.height(None), 0);
        assert_eq!(arena.depth(None), 0);
        assert!(arena.keys(None).is_empty());
    }

    #[test]
    fn alloc_yields_leaf() {
        let mut arena = Arena::new();
        let id = arena.alloc(7);
        assert_eq!(arena[id], Node::leaf(7));
        assert_eq!(arena[id].height, 1);
        assert_eq!(arena.height(Some(id)), 1);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn keys_in_order_and_depth() {
        let mut arena = Arena::new();
        let root = arena.alloc(20);
        let left = arena.alloc(10);
        let right = arena.alloc(30);
        let deep = arena.alloc(25);
        arena[root].left = Some(left);
        arena[root].right = Some(right);
        arena[right].left = Some(deep);

        assert_eq!(arena.keys(Some(root)), vec![10, 20, 25, 30]);
        assert_eq!(arena.depth(Some(root)), 3);
    }

    #[test]
    fn clear_releases_every_node() {
        let mut arena = Arena::with_capacity(4);
        for key in 0..4 {
            arena.alloc(key);
        }
        assert_eq!(arena.clear(), 4);
        assert!(arena.is_empty());
        assert_eq!(arena.clear(), 0);
    }
}
