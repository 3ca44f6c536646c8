//! Domain-level errors (no external dependencies)

use std::fmt;
use thiserror::Error;

use crate::domain::Label;

/// Which half of a split failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Plain discriminant of a [`ReconstructionError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LengthMismatch,
    RootNotFound,
    LabelSetMismatch,
}

/// No unique tree is derivable from the given sequence pair.
///
/// Each variant carries the offending slice or value of the level where the
/// check failed, so the message alone is enough to diagnose the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructionError {
    #[error("lengths differ: inorder has {inorder_len} labels, postorder has {postorder_len}")]
    LengthMismatch {
        inorder_len: usize,
        postorder_len: usize,
    },

    #[error("root {root} not in inorder {inorder:?}")]
    RootNotFound { root: Label, inorder: Vec<Label> },

    #[error("{side} labels mismatch: inorder {inorder:?} vs postorder {postorder:?}")]
    LabelSetMismatch {
        side: Side,
        inorder: Vec<Label>,
        postorder: Vec<Label>,
    },
}

impl ReconstructionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReconstructionError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            ReconstructionError::RootNotFound { .. } => ErrorKind::RootNotFound,
            ReconstructionError::LabelSetMismatch { .. } => ErrorKind::LabelSetMismatch,
        }
    }
}

/// Result type for reconstruction.
pub type ReconstructResult<T> = Result<T, ReconstructionError>;
