use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::Label;

/// Binary tree node in the arena.
///
/// Children are owned exclusively by their parent; there is no back edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Label of this node
    pub value: Label,
    /// Index of the left child in the arena, None if absent
    pub left: Option<Index>,
    /// Index of the right child in the arena, None if absent
    pub right: Option<Index>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are only inserted while the tree is being built, bottom-up, so a
/// parent is always inserted after both of its children. Once handed out the
/// tree is read-only.
#[derive(Debug, Clone)]
pub struct BinaryTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::empty()
    }
}

impl BinaryTree {
    pub fn empty() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
            root: None,
        }
    }

    /// Inserts a node owning the given (already inserted) children.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn attach(&mut self, value: Label, left: Option<Index>, right: Option<Index>) -> Index {
        self.arena.insert(TreeNode { value, left, right })
    }

    pub(crate) fn set_root(&mut self, root: Option<Index>) {
        self.root = root;
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root_node(&self) -> Option<&TreeNode> {
        self.root.and_then(|idx| self.node(idx))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.node(idx) {
                for child in [node.left, node.right].into_iter().flatten() {
                    stack.push((child, depth + 1));
                }
            }
        }
        max_depth
    }

    pub fn iter_preorder(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    pub fn iter_inorder(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    pub fn preorder(&self) -> Vec<Label> {
        self.iter_preorder().map(|(_, n)| n.value).collect()
    }

    pub fn inorder(&self) -> Vec<Label> {
        self.iter_inorder().map(|(_, n)| n.value).collect()
    }

    pub fn postorder(&self) -> Vec<Label> {
        self.iter_postorder().map(|(_, n)| n.value).collect()
    }

    /// Labels of all childless nodes, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<Label> {
        self.iter_preorder()
            .filter(|(_, n)| n.is_leaf())
            .map(|(_, n)| n.value)
            .collect()
    }
}

/// Structural equality: same shape and same labels in the same positions.
/// Arena indices are not compared.
impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root, other.root)];

        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => match (self.node(a), other.node(b)) {
                    (Some(na), Some(nb)) if na.value == nb.value => {
                        stack.push((na.left, nb.left));
                        stack.push((na.right, nb.right));
                    }
                    _ => return false,
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for BinaryTree {}

pub struct PreOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_idx) {
                // right first so that left is popped first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct InOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            current: tree.root(),
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.tree.node(idx).and_then(|n| n.left);
        }
        let idx = self.stack.pop()?;
        let node = self.tree.node(idx)?;
        self.current = node.right;
        Some((idx, node))
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_idx) {
                if visited {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                if let Some(right) = node.right {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.left {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //     2
    //    / \
    //   1   4
    //      /
    //     3
    fn sample() -> BinaryTree {
        let mut tree = BinaryTree::empty();
        let one = tree.attach(1, None, None);
        let three = tree.attach(3, None, None);
        let four = tree.attach(4, Some(three), None);
        let two = tree.attach(2, Some(one), Some(four));
        tree.set_root(Some(two));
        tree
    }

    #[test]
    fn given_empty_tree_when_queried_then_everything_is_empty() {
        let tree = BinaryTree::empty();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.inorder().is_empty());
        assert!(tree.postorder().is_empty());
        assert!(tree.root_node().is_none());
    }

    #[test]
    fn given_sample_tree_when_traversed_then_orders_match() {
        let tree = sample();
        assert_eq!(tree.preorder(), vec![2, 1, 4, 3]);
        assert_eq!(tree.inorder(), vec![1, 2, 3, 4]);
        assert_eq!(tree.postorder(), vec![1, 3, 4, 2]);
        assert_eq!(tree.leaf_values(), vec![1, 3]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn given_same_shape_built_in_different_order_when_compared_then_equal() {
        let mut other = BinaryTree::empty();
        let three = other.attach(3, None, None);
        let four = other.attach(4, Some(three), None);
        let one = other.attach(1, None, None);
        let two = other.attach(2, Some(one), Some(four));
        other.set_root(Some(two));

        assert_eq!(sample(), other);
    }

    #[test]
    fn given_mirrored_shape_when_compared_then_not_equal() {
        let mut mirrored = BinaryTree::empty();
        let one = mirrored.attach(1, None, None);
        let three = mirrored.attach(3, None, None);
        let four = mirrored.attach(4, None, Some(three));
        let two = mirrored.attach(2, Some(one), Some(four));
        mirrored.set_root(Some(two));

        assert_ne!(sample(), mirrored);
        assert_ne!(sample(), BinaryTree::empty());
    }
}
