//! Thread-safe handle over a [`UserDirectory`].
//!
//! Creations take the write lock; reads take the read lock and hand back
//! cloned snapshots.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::directory::UserDirectory;
use crate::error::DirectoryError;
use crate::ports::{UsersCommand, UsersQuery};
use crate::user::{User, UserId};

/// Cloneable, shareable user directory.
///
/// Clones refer to the same underlying directory.
#[derive(Debug, Clone, Default)]
pub struct SharedUserDirectory {
    inner: Arc<RwLock<UserDirectory>>,
}

impl SharedUserDirectory {
    /// Wrap an existing directory.
    #[must_use]
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    /// Copy of the current directory state.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::LockPoisoned`] if a writer panicked.
    pub fn snapshot(&self) -> Result<UserDirectory, DirectoryError> {
        Ok(self.read("snapshot")?.clone())
    }

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<RwLockReadGuard<'_, UserDirectory>, DirectoryError> {
        self.inner
            .read()
            .map_err(|err| poisoned(operation, &err))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, UserDirectory>, DirectoryError> {
        self.inner
            .write()
            .map_err(|err| poisoned(operation, &err))
    }
}

impl From<UserDirectory> for SharedUserDirectory {
    fn from(directory: UserDirectory) -> Self {
        Self::new(directory)
    }
}

fn poisoned<T>(operation: &'static str, err: &PoisonError<T>) -> DirectoryError {
    warn!(operation, error = %err, "user directory lock poisoned");
    DirectoryError::lock_poisoned(operation)
}

impl UsersQuery for SharedUserDirectory {
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, DirectoryError> {
        Ok(self.read("find_by_id")?.find_by_id(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self.read("find_all")?.find_all().to_vec())
    }
}

impl UsersCommand for SharedUserDirectory {
    fn create_user(&self, email: &str, display_name: &str) -> Result<User, DirectoryError> {
        Ok(self.write("create_user")?.create_user(email, display_name))
    }
}
