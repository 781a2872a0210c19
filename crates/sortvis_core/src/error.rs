//! Core error types

use thiserror::Error;

/// Errors raised when parsing user-facing names into core types.
///
/// Tracing and playback themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortvisError {
    /// Algorithm name not recognised
    #[error("unknown algorithm `{0}` (expected bubble, selection or quick)")]
    UnknownAlgorithm(String),

    /// Partition shading mode not recognised
    #[error("unknown shading mode `{0}` (expected dim or flat)")]
    UnknownShading(String),

    /// Playback command not recognised
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}
