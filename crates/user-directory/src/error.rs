//! Error types for the user-directory crate.
//!
//! Lookups never fail: a missing identifier is reported as `None`. The
//! enums here cover the shared directory handle and the CLI surface.

use thiserror::Error;

/// Errors raised by [`crate::SharedUserDirectory`] and the directory ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A previous lock holder panicked, leaving the directory unusable.
    #[error("user directory lock poisoned during {operation}")]
    LockPoisoned {
        /// Operation that attempted to take the lock.
        operation: &'static str,
    },
}

impl DirectoryError {
    /// Build a [`DirectoryError::LockPoisoned`] for the named operation.
    #[must_use]
    pub const fn lock_poisoned(operation: &'static str) -> Self {
        Self::LockPoisoned { operation }
    }
}

/// Errors surfaced by the `user-directory` command-line entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from arguments or the environment.
    #[error("failed to load user directory settings: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },

    /// Only one of the settings required to create a user was supplied.
    #[error("cannot create user: missing {missing}")]
    IncompleteUser {
        /// Name of the setting that was not supplied.
        missing: &'static str,
    },

    /// The directory rejected the operation.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The listing could not be serialised or written.
    #[error("failed to write user listing: {message}")]
    Output {
        /// Description of the output failure.
        message: String,
    },
}
