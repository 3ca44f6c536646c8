//! Rebuilds a binary tree from its inorder and postorder sequences.
//!
//! The decomposition works on index ranges into the caller's slices and is
//! driven by an explicit work stack, so arbitrarily skewed inputs cannot
//! exhaust the call stack. Checks run in the same order a recursive
//! decomposition would run them: node, left subtree, right subtree.

use std::collections::HashSet;
use std::ops::Range;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::BinaryTree;
use crate::domain::error::{ReconstructResult, ReconstructionError, Side};
use crate::domain::Label;

/// Reconstructs the unique tree with the given inorder and postorder sequences.
///
/// Empty sequences yield the empty tree. The first failed check aborts the
/// whole reconstruction; no partial tree is returned.
///
/// # Errors
///
/// * [`ReconstructionError::LengthMismatch`] if the slices at some level differ in length.
/// * [`ReconstructionError::RootNotFound`] if the postorder root is missing from the inorder slice.
/// * [`ReconstructionError::LabelSetMismatch`] if a split side holds different labels in the two slices.
#[instrument(level = "debug", skip_all, fields(inorder_len = inorder.len(), postorder_len = postorder.len()))]
pub fn reconstruct(inorder: &[Label], postorder: &[Label]) -> ReconstructResult<BinaryTree> {
    let tree = Reconstructor::new(inorder, postorder).run()?;
    debug!(nodes = tree.len(), height = tree.height(), "tree reconstructed");
    Ok(tree)
}

enum Frame {
    /// Validate one sub-problem and schedule its halves.
    Resolve {
        inorder: Range<usize>,
        postorder: Range<usize>,
    },
    /// Both subtrees of this label are built; create the node.
    Assemble(Label),
}

struct Reconstructor<'a> {
    inorder: &'a [Label],
    postorder: &'a [Label],
    tree: BinaryTree,
    work: Vec<Frame>,
    /// Roots of finished subtrees, None for empty ones
    built: Vec<Option<Index>>,
}

impl<'a> Reconstructor<'a> {
    fn new(inorder: &'a [Label], postorder: &'a [Label]) -> Self {
        Self {
            inorder,
            postorder,
            tree: BinaryTree::with_capacity(inorder.len()),
            work: vec![Frame::Resolve {
                inorder: 0..inorder.len(),
                postorder: 0..postorder.len(),
            }],
            built: Vec::new(),
        }
    }

    fn run(mut self) -> ReconstructResult<BinaryTree> {
        while let Some(frame) = self.work.pop() {
            match frame {
                Frame::Resolve { inorder, postorder } => self.resolve(inorder, postorder)?,
                Frame::Assemble(value) => {
                    let right = self.built.pop().flatten();
                    let left = self.built.pop().flatten();
                    let idx = self.tree.attach(value, left, right);
                    self.built.push(Some(idx));
                }
            }
        }

        let root = self.built.pop().flatten();
        self.tree.set_root(root);
        Ok(self.tree)
    }

    fn resolve(&mut self, in_range: Range<usize>, post_range: Range<usize>) -> ReconstructResult<()> {
        let inorder = &self.inorder[in_range.clone()];
        let postorder = &self.postorder[post_range.clone()];

        if inorder.len() != postorder.len() {
            debug!(inorder_len = inorder.len(), postorder_len = postorder.len(), "lengths differ");
            return Err(ReconstructionError::LengthMismatch {
                inorder_len: inorder.len(),
                postorder_len: postorder.len(),
            });
        }

        let n = inorder.len();
        let Some(&root) = postorder.last() else {
            self.built.push(None);
            return Ok(());
        };

        let k = position_of(root, inorder).ok_or_else(|| {
            debug!(root, "root not in inorder");
            ReconstructionError::RootNotFound {
                root,
                inorder: inorder.to_vec(),
            }
        })?;
        trace!(root, k, n, "split");

        // The postorder split is derived from k, never searched for separately.
        let (in_left, in_right) = (&inorder[..k], &inorder[k + 1..]);
        let (post_left, post_right) = (&postorder[..k], &postorder[k..n - 1]);

        for (side, ino, post) in [
            (Side::Left, in_left, post_left),
            (Side::Right, in_right, post_right),
        ] {
            if !same_label_set(ino, post) {
                debug!(%side, "labels mismatch");
                return Err(ReconstructionError::LabelSetMismatch {
                    side,
                    inorder: ino.to_vec(),
                    postorder: post.to_vec(),
                });
            }
        }

        let (i0, p0) = (in_range.start, post_range.start);
        self.work.push(Frame::Assemble(root));
        self.work.push(Frame::Resolve {
            inorder: i0 + k + 1..in_range.end,
            postorder: p0 + k..post_range.end - 1,
        });
        self.work.push(Frame::Resolve {
            inorder: i0..i0 + k,
            postorder: p0..p0 + k,
        });
        Ok(())
    }
}

/// First position of `value` in `labels`.
fn position_of(value: Label, labels: &[Label]) -> Option<usize> {
    labels.iter().position(|&l| l == value)
}

/// Labels are unique, so equal length plus equal sets means equal content.
fn same_label_set(a: &[Label], b: &[Label]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let sa: HashSet<Label> = a.iter().copied().collect();
    let sb: HashSet<Label> = b.iter().copied().collect();
    sa == sb
}
