/// Errors that can occur during richpath operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an `InvalidArgument` error naming the offending parameter
    pub(crate) fn invalid_argument(name: &str) -> Self {
        Self::InvalidArgument(format!("{name} must be a non-empty string"))
    }
}

/// Result type alias for richpath operations
pub type Result<T> = std::result::Result<T, Error>;
