//! Error types for skeleton merging and shard write-back.
//!
//! Compression, re-evaluation and selection cannot fail; only caller contract
//! violations that would silently corrupt a skeleton are reported.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Chunks can only be merged with their immediate chronological successor
    #[error("chunk ending at ordinal {left_last} cannot be merged with chunk starting at ordinal {right_first}: chunks must be adjacent and in order")]
    NotAdjacent { left_last: u64, right_first: u64 },

    /// Nothing to merge
    #[error("no chunks to merge")]
    NoChunks,

    /// Recomputed diffs don't line up with the skeleton's transitions
    #[error("expected {expected} transition diffs, got {actual}")]
    DiffCountMismatch { expected: usize, actual: usize },
}
