//! Error types for dome operations.
//!
//! Only failures the host document itself would raise are reported; the
//! collection layer adds no validation of its own.

use thiserror::Error;

use crate::dom::NodeId;

/// Errors that can occur while querying or mutating a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid selector {query:?}: {reason}")]
    InvalidSelector { query: String, reason: String },

    #[error("cannot insert {child} into {parent}: {reason}")]
    Hierarchy {
        parent: NodeId,
        child: NodeId,
        reason: &'static str,
    },

    #[error("unknown read target: {0}")]
    UnknownRead(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
