//! Rebuild binary trees from their inorder and postorder traversals.
//!
//! The reconstruction validates every level of the decomposition and reports
//! a typed [`ReconstructionError`](domain::ReconstructionError) when no
//! unique tree is derivable:
//!
//! ```
//! use retree::domain::{balanced_postorder, inorder_sequence, reconstruct};
//!
//! let post = balanced_postorder(7);
//! let tree = reconstruct(&inorder_sequence(7), &post).unwrap();
//! assert_eq!(tree.postorder(), post);
//! assert_eq!(tree.height(), 3);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;

pub use domain::{reconstruct, BinaryTree, Label, ReconstructionError};
