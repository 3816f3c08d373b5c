//! Error types shared by every hasher in the crate.

use thiserror::Error;

/// Errors produced while configuring or driving a hasher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor parameter or a `roll` argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] from any message.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, Error>;
