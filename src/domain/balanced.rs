//! Input generation for well-formed sequence pairs of any size.

use tracing::instrument;

use crate::domain::Label;

/// Inorder sequence `0..n-1`, the counterpart of [`balanced_postorder`].
pub fn inorder_sequence(n: usize) -> Vec<Label> {
    (0..n).map(|i| i as Label).collect()
}

/// Postorder of the height-balanced search tree over `0..n-1`.
///
/// Every index range is split at its lower-biased midpoint, so paired with
/// [`inorder_sequence`] the result decodes to the same balanced shape for a
/// given `n`. Recursion depth is logarithmic in `n`.
#[instrument(level = "debug")]
pub fn balanced_postorder(n: usize) -> Vec<Label> {
    let mut out = Vec::with_capacity(n);
    push_postorder(0, n, &mut out);
    out
}

/// Emits the postorder of the half-open range `lo..end`.
fn push_postorder(lo: usize, end: usize, out: &mut Vec<Label>) {
    if lo >= end {
        return;
    }
    let mid = lo + (end - 1 - lo) / 2;
    push_postorder(lo, mid, out);
    push_postorder(mid + 1, end, out);
    out.push(mid as Label);
}
