//! Driving ports for user directory consumers.
//!
//! Callers that only need to read or create users depend on these traits
//! rather than on a concrete store. Both return owned records so that no
//! lock guard leaks out of an implementation.

use crate::error::DirectoryError;
use crate::user::{User, UserId};

/// Read-side port: lookups and listings.
pub trait UsersQuery: Send + Sync {
    /// Fetch a user by identifier; `Ok(None)` when it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the backing store is unusable.
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, DirectoryError>;

    /// Every known user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the backing store is unusable.
    fn find_all(&self) -> Result<Vec<User>, DirectoryError>;
}

/// Write-side port: user creation.
pub trait UsersCommand: Send + Sync {
    /// Create and store a user with a newly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the backing store is unusable.
    fn create_user(&self, email: &str, display_name: &str) -> Result<User, DirectoryError>;
}
