//! Error types for bodytext.
//!
//! This module defines the error types returned by formatting operations.

/// Error type for formatting operations.
///
/// Only `TreeRead` is recoverable; the renderer and lead extractor catch it
/// per node, log it, and continue. Everything else is fatal for the call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node's text could not be materialized (empty or detached selection).
    #[error("tree read failed: {0}")]
    TreeRead(String),

    /// The subtree nests deeper than the supported maximum.
    ///
    /// Trips the defensive guard in depth computation instead of recursing
    /// without bound on pathological input.
    #[error("tree depth exceeded: {depth} levels")]
    TreeTooDeep {
        /// Depth at which the guard tripped.
        depth: usize,
    },
}

/// Result type alias for formatting operations.
pub type Result<T> = std::result::Result<T, Error>;
