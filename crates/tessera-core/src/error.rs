//! Error types for Tessera core systems.

use std::fmt;

/// The main error type for Tessera core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TesseraError {
    /// Signal-related error.
    Signal(SignalError),
}

impl fmt::Display for TesseraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(err) => write!(f, "Signal error: {err}"),
        }
    }
}

impl std::error::Error for TesseraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Signal(err) => Some(err),
        }
    }
}

impl From<SignalError> for TesseraError {
    fn from(err: SignalError) -> Self {
        Self::Signal(err)
    }
}

/// Signal-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

/// A specialized Result type for Tessera core operations.
pub type Result<T> = std::result::Result<T, TesseraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_error_converts_and_chains() {
        let err: TesseraError = SignalError::InvalidConnection.into();
        assert_eq!(
            err.to_string(),
            "Signal error: Invalid or disconnected connection ID"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
