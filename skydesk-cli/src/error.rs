//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use skydesk::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// The operation succeeded in memory but could not be saved.
    SaveFailed(String),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Library error for a missing record, no room, or a conflicting state
    /// - 3: Changes could not be saved
    /// - 4: Invalid arguments
    /// - 5: I/O error or unreadable snapshot
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::DuplicateFlight(_)
                | LibError::DuplicatePassport(_)
                | LibError::AlreadyBooked { .. }
                | LibError::FlightHasQueue { .. }
                | LibError::CustomerHasBookings { .. } => 1,
                e if e.is_not_found() || e.is_capacity() => 1,
                LibError::InvalidUpdate(_)
                | LibError::InvalidFlight(_)
                | LibError::Validation { .. } => 4,
                e if e.is_storage() => 5,
                LibError::Configuration(_) => 7,
                _ => 6,
            },
            CliError::SaveFailed(_) => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::SaveFailed(msg) => {
                write!(f, "Changes were applied but could not be saved: {msg}")
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
