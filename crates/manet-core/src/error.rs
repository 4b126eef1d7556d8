//! Simulator-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `manet-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `manet-core`.
pub type CoreResult<T> = Result<T, CoreError>;
