// file: src/error.rs
// version: 1.0.0
// guid: bd5a9804-7f82-41f3-9bdc-6f9b93198315

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, MenuError>;

/// Error types for the Linux Utilities Menu
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Menu has no options to choose from")]
    EmptyMenu,

    #[error("Command execution error: {0}")]
    Execution(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl MenuError {
    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: MenuError = io.into();
        assert!(matches!(err, MenuError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }

    #[test]
    fn test_constructor_helpers() {
        assert_eq!(
            MenuError::execution("sh missing").to_string(),
            "Command execution error: sh missing"
        );
        assert_eq!(
            MenuError::logging("already set").to_string(),
            "Logging error: already set"
        );
    }
}
