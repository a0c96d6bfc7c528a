//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! bounding box and body count validation, invalid configuration, malformed scenario text
//! and IO.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed scenario at token {token}: {message}")]
    Parse { token: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
