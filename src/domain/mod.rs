//! Domain layer: tree model, reconstruction and input generation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod balanced;
pub mod error;
pub mod reconstruct;

/// Node value. Labels are unique within one tree and double as node identity.
pub type Label = i64;

pub use arena::{BinaryTree, TreeNode};
pub use balanced::{balanced_postorder, inorder_sequence};
pub use error::{ErrorKind, ReconstructResult, ReconstructionError, Side};
pub use reconstruct::reconstruct;
