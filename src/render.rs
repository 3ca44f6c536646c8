/*
Text renderings of a BinaryTree for terminal output.

The sideways form lays the tree on its side: right subtree above the node,
left subtree below, four spaces of indent per level.
 */
use clap::ValueEnum;
use generational_arena::Index;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::BinaryTree;

const INDENT: &str = "    ";
const ABSENT: &str = "∅";

/// Deepest tree rendered with [`RenderStyle::Tree`]. Building (and dropping)
/// the `termtree` output recurses once per level, so taller trees fall back
/// to the iterative sideways rendering.
pub const TREE_STYLE_MAX_HEIGHT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Indented, right subtree on top
    #[default]
    Sideways,
    /// Box-drawing tree, up to [`TREE_STYLE_MAX_HEIGHT`] levels
    Tree,
}

pub trait TreeRender {
    /// Recurses once per level; see [`TREE_STYLE_MAX_HEIGHT`].
    fn to_tree_string(&self) -> Tree<String>;
    fn to_sideways_string(&self) -> String;

    /// `requested`, unless that is `Tree` and the tree is too tall for it.
    fn style_for(&self, requested: RenderStyle) -> RenderStyle;

    fn render(&self, style: RenderStyle) -> String {
        match self.style_for(style) {
            RenderStyle::Sideways => self.to_sideways_string(),
            RenderStyle::Tree => self.to_tree_string().to_string(),
        }
    }
}

impl TreeRender for BinaryTree {
    fn style_for(&self, requested: RenderStyle) -> RenderStyle {
        match requested {
            RenderStyle::Tree if self.height() > TREE_STYLE_MAX_HEIGHT => RenderStyle::Sideways,
            style => style,
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            fn build_tree(tree: &BinaryTree, node_idx: Index) -> Tree<String> {
                let Some(node) = tree.node(node_idx) else {
                    return Tree::new(ABSENT.to_string());
                };
                let mut out = Tree::new(node.value.to_string());
                if !node.is_leaf() {
                    for child in [node.left, node.right] {
                        match child {
                            Some(child_idx) => out.push(build_tree(tree, child_idx)),
                            None => out.push(Tree::new(ABSENT.to_string())),
                        };
                    }
                }
                out
            }

            build_tree(self, root_idx)
        } else {
            Tree::new("Empty tree".to_string())
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn to_sideways_string(&self) -> String {
        let mut out = String::new();
        // reverse inorder: right, node, left
        let mut stack: Vec<(Index, usize)> = Vec::new();
        let mut current = self.root().map(|r| (r, 0));

        loop {
            while let Some((idx, depth)) = current {
                stack.push((idx, depth));
                current = self
                    .node(idx)
                    .and_then(|n| n.right)
                    .map(|r| (r, depth + 1));
            }
            let Some((idx, depth)) = stack.pop() else {
                break;
            };
            let Some(node) = self.node(idx) else {
                continue;
            };
            out.push_str(&INDENT.repeat(depth));
            out.push_str(&node.value.to_string());
            out.push('\n');
            current = node.left.map(|l| (l, depth + 1));
        }
        out
    }
}
