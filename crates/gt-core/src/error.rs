//! Shared error type.
//!
//! Sub-crates define their own error enums and convert `GtError` into them
//! via `From` impls where a core failure can surface.

use thiserror::Error;

/// The top-level error type for `gt-core`.
#[derive(Debug, Error)]
pub enum GtError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gt-core`.
pub type GtResult<T> = Result<T, GtError>;
