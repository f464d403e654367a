//! # Centralized Error Handling
//!
//! Workspace-wide error type [`PropagateError`] used by both the pure
//! logic crate and the browser bindings. It follows the `thiserror`
//! pattern for ergonomic error handling.
//!
//! All failures are synchronous and caller-visible; nothing is retried or
//! recovered internally, and an operation that fails never performs its
//! side effect.

use thiserror::Error;

use crate::sink::SinkKind;

/// Convenience type alias for `Result<T, PropagateError>`.
pub type Result<T> = std::result::Result<T, PropagateError>;

/// Error type covering every failure the propagation helpers can raise.
#[derive(Debug, Error)]
pub enum PropagateError {
    /// The base URL could not be parsed as an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A supplied element does not satisfy the expected sink capability.
    #[error("Provided element is not a valid {0}")]
    TypeMismatch(SinkKind),

    /// The global window object is unavailable.
    #[error("Browser window is not available")]
    NoWindow,

    /// The host environment rejected a navigation-target assignment.
    #[error("Navigation failed: {0}")]
    Navigation(String),
}
