//! # Console Error Type
//!
//! Unified error type for the console application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Bad keystrokes ──► re-prompted inside input.rs, never an error         │
//! │                                                                         │
//! │  Missing product ─► Option/bool from the core, "Item not found!"        │
//! │                                                                         │
//! │  CoreError ───────► AppError::Core, printed, menu continues             │
//! │                                                                         │
//! │  Config problems ─► AppError::Config / ConfigParse at startup           │
//! │                                                                         │
//! │  stdin closed ────► AppError::InputClosed, session ends cleanly         │
//! │                                                                         │
//! │  Terminal I/O ────► AppError::Io, main exits with status 1              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the console application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configuration file is not valid TOML for `ConfigState`.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Input reached end-of-file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    /// True for errors after which the menu loop can keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Core(_))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through_message() {
        let err: AppError = CoreError::IdsExhausted.into();
        assert_eq!(err.to_string(), "No product ids left to issue");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_closed_input_is_not_recoverable() {
        assert!(!AppError::InputClosed.is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(!AppError::from(io).is_recoverable());
    }
}
