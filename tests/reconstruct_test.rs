//! Tests for reconstructing trees from inorder + postorder sequences

use rstest::{fixture, rstest};

use retree::domain::{
    balanced_postorder, inorder_sequence, reconstruct, BinaryTree, ErrorKind, Label,
    ReconstructionError, Side,
};
use retree::util::testing;

#[fixture]
fn logging() {
    testing::init_test_setup();
}

// ============================================================
// Success cases
// ============================================================

#[rstest]
fn given_empty_sequences_when_reconstructing_then_returns_empty_tree(#[from(logging)] _l: ()) {
    let tree = reconstruct(&[], &[]).expect("empty input is valid");

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
}

#[rstest]
fn given_single_label_when_reconstructing_then_returns_lone_node(#[from(logging)] _l: ()) {
    let tree = reconstruct(&[7], &[7]).expect("single node is valid");

    let root = tree.root_node().expect("root present");
    assert_eq!(root.value, 7);
    assert!(root.left.is_none());
    assert!(root.right.is_none());
    assert_eq!(tree.len(), 1);
}

#[rstest]
fn given_textbook_example_when_reconstructing_then_shape_is_recovered(#[from(logging)] _l: ()) {
    //     3
    //    / \
    //   9   20
    //      /  \
    //     15   7
    let tree = reconstruct(&[9, 3, 15, 20, 7], &[9, 15, 7, 20, 3]).unwrap();

    assert_eq!(tree.preorder(), vec![3, 9, 20, 15, 7]);
    assert_eq!(tree.leaf_values(), vec![9, 15, 7]);
    assert_eq!(tree.height(), 3);
}

#[rstest]
fn given_negative_labels_when_reconstructing_then_succeeds(#[from(logging)] _l: ()) {
    let tree = reconstruct(&[-5, -1, 4], &[-5, 4, -1]).unwrap();
    assert_eq!(tree.preorder(), vec![-1, -5, 4]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(20)]
#[case(50)]
fn given_balanced_postorder_when_reconstructing_then_traversals_round_trip(
    #[from(logging)] _l: (),
    #[case] n: usize,
) {
    // Arrange
    let inorder = inorder_sequence(n);
    let post = balanced_postorder(n);

    // Act
    let tree = reconstruct(&inorder, &post).expect("generated input is valid");

    // Assert
    assert_eq!(tree.len(), n);
    assert_eq!(tree.inorder(), inorder);
    assert_eq!(tree.postorder(), post);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(20)]
#[case(50)]
#[case(100)]
#[case(200)]
fn given_balanced_postorder_when_reconstructing_then_height_is_minimal(
    #[from(logging)] _l: (),
    #[case] n: usize,
) {
    let tree = reconstruct(&inorder_sequence(n), &balanced_postorder(n)).unwrap();

    // ceil(log2(n + 1)) == floor(log2(n)) + 1 for n >= 1
    let expected = (usize::BITS - n.leading_zeros()) as usize;
    assert_eq!(tree.height(), expected, "n = {n}");
}

#[rstest]
fn given_same_input_when_reconstructing_twice_then_trees_are_identical(#[from(logging)] _l: ()) {
    let inorder = inorder_sequence(50);
    let post = balanced_postorder(50);

    let first = reconstruct(&inorder, &post).unwrap();
    let second = reconstruct(&inorder, &post).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.preorder(), second.preorder());
}

#[rstest]
fn given_deep_left_chain_when_reconstructing_then_no_stack_overflow(#[from(logging)] _l: ()) {
    // every node is the left child of the next one
    let n = 3000;
    let labels = inorder_sequence(n);

    let tree = reconstruct(&labels, &labels).unwrap();

    assert_eq!(tree.height(), n);
    assert_eq!(tree.leaf_values(), vec![0]);
}

#[rstest]
fn given_deep_right_chain_when_reconstructing_then_no_stack_overflow(#[from(logging)] _l: ()) {
    let n = 3000;
    let inorder = inorder_sequence(n);
    let post: Vec<Label> = inorder.iter().rev().copied().collect();

    let tree = reconstruct(&inorder, &post).unwrap();

    assert_eq!(tree.height(), n);
    assert_eq!(tree.root_node().map(|r| r.value), Some(0));
    assert_eq!(tree.postorder(), post);
}

// ============================================================
// Failure cases
// ============================================================

#[rstest]
fn given_different_lengths_when_reconstructing_then_length_mismatch(#[from(logging)] _l: ()) {
    let err = reconstruct(&[1, 2], &[1]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    assert_eq!(
        err,
        ReconstructionError::LengthMismatch {
            inorder_len: 2,
            postorder_len: 1,
        }
    );
    assert!(err.to_string().contains("lengths differ"));
}

#[rstest]
fn given_one_empty_side_when_reconstructing_then_length_mismatch(#[from(logging)] _l: ()) {
    let err = reconstruct(&[], &[1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
}

#[rstest]
fn given_root_absent_from_inorder_when_reconstructing_then_root_not_found(#[from(logging)] _l: ()) {
    let err = reconstruct(&[1, 2, 3], &[1, 2, 9]).unwrap_err();

    assert_eq!(
        err,
        ReconstructionError::RootNotFound {
            root: 9,
            inorder: vec![1, 2, 3],
        }
    );
}

#[rstest]
fn given_inconsistent_labels_when_reconstructing_then_label_set_mismatch(#[from(logging)] _l: ()) {
    let result: Result<BinaryTree, _> = reconstruct(&[0, 2, 4, 6, 8], &[1, 3, 5, 7, 4]);

    let err = result.expect_err("no tree must be returned");
    assert_eq!(err.kind(), ErrorKind::LabelSetMismatch);
    assert_eq!(
        err,
        ReconstructionError::LabelSetMismatch {
            side: Side::Left,
            inorder: vec![0, 2],
            postorder: vec![1, 3],
        }
    );
}

#[rstest]
fn given_permuted_but_invalid_postorder_when_reconstructing_then_fails(#[from(logging)] _l: ()) {
    // same labels; root 2 splits inorder [1] against postorder [3]
    let err = reconstruct(&[1, 2, 3], &[3, 1, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LabelSetMismatch);
}
