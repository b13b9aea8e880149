//! Error types for Synnet Core

use std::path::PathBuf;

use thiserror::Error;

use crate::synset::{SynsetId, VertexId};

/// Result type alias using Synnet's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Synnet error types
///
/// Data-quality problems (malformed lines, duplicate ids, self-loops) are not
/// errors: they are reported through `BatchOutcome`, `LoadReport` or a `false`
/// return. The variants below are either input-shape failures that stop an
/// operation before any parsing, or contract violations by a caller.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("Synset already exists: {0}")]
    SynsetExists(SynsetId),

    #[error("Rejected hypernym: {from} -> {to}")]
    RejectedEdge { from: VertexId, to: VertexId },
}

impl Error {
    /// Whether this error signals a caller defect rather than bad input
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::VertexNotFound(_) | Self::SynsetExists(_) | Self::RejectedEdge { .. }
        )
    }
}
