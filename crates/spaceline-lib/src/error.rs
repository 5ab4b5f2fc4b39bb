use thiserror::Error;

/// Convenient result alias for the Spaceline library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when a caller-supplied argument is outside its valid domain.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl Error {
    pub(crate) fn invalid_argument(name: &str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
