//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by concrete
//! backend implementations (blstrs, Arkworks) as well as the element-facing
//! `Error` type returned by contexts, elements and pairings.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code. Protocols built on top of this crate are
//! expected to translate [`Error::Decode`] and [`Error::NotInvertible`] into
//! their own rejection vocabulary (for instance "invalid signature").
//!
//! # Examples
//!
//! ```rust
//! use pairing_arith::errors::{Error, Mismatch};
//! use pairing_arith::Group;
//!
//! let err = Error::GroupMismatch(Mismatch::Group {
//!     expected: Group::G1,
//!     found: Group::Zr,
//! });
//! assert_eq!(err.to_string(), "group mismatch: expected G1, found Zr");
//! ```

use thiserror::Error;

use crate::Group;

/// Errors bubbled up from backend implementations (blstrs, Arkworks).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
    #[error("{0}")]
    Other(String),
}

/// Why two operands could not be combined.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Mismatch {
    #[error("expected {expected}, found {found}")]
    Group { expected: Group, found: Group },
    #[error("operands belong to different pairing contexts")]
    Context,
}

/// Errors returned by contexts, elements and pairing evaluation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("group mismatch: {0}")]
    GroupMismatch(Mismatch),
    #[error("element is not invertible")]
    NotInvertible,
    #[error("decode error: {0}")]
    Decode(String),
    #[error("{operation} is not supported for {group}")]
    UnsupportedOperation {
        operation: &'static str,
        group: Group,
    },
    #[error("length mismatch: {left} G1 terms, {right} G2 terms")]
    LengthMismatch { left: usize, right: usize },
    #[error("product pairing needs at least one term")]
    EmptyInput,
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

impl Error {
    pub(crate) fn group_mismatch(expected: Group, found: Group) -> Self {
        Error::GroupMismatch(Mismatch::Group { expected, found })
    }

    pub(crate) fn unsupported(operation: &'static str, group: Group) -> Self {
        Error::UnsupportedOperation { operation, group }
    }
}
