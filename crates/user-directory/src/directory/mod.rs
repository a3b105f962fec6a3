//! In-memory user directory.
//!
//! Purpose: own every [`User`] known to the process, seeded with two fixture
//! records at construction. Records are kept in insertion order and are
//! never mutated or removed; the directory only grows through
//! [`UserDirectory::create_user`].

use std::slice;

use tracing::debug;

use crate::user::{User, UserId};

/// Fixture record created by [`UserDirectory::new`].
struct SeedUser {
    id: u64,
    email: &'static str,
    display_name: &'static str,
}

const SEED_USERS: [SeedUser; 2] = [
    SeedUser {
        id: 1,
        email: "john.doe@example.com",
        display_name: "John Doe",
    },
    SeedUser {
        id: 2,
        email: "jane.smith@example.com",
        display_name: "Jane Smith",
    },
];

/// Registry of users owned by a single caller.
///
/// Mutation requires `&mut self`; wrap the directory in
/// [`crate::SharedUserDirectory`] to share it between threads.
///
/// # Examples
/// ```
/// use user_directory::{UserDirectory, UserId};
///
/// let mut directory = UserDirectory::new();
/// assert_eq!(directory.find_all().len(), 2);
///
/// let created = directory.create_user("test@example.com", "Test User");
/// assert_eq!(directory.find_by_id(created.id()), Some(&created));
/// assert!(directory.find_by_id(UserId::new(999)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: u64,
}

impl UserDirectory {
    /// Build a directory holding the two fixture users.
    #[must_use]
    pub fn new() -> Self {
        let users: Vec<User> = SEED_USERS
            .iter()
            .map(|seed| User::new(UserId::new(seed.id), seed.email, seed.display_name))
            .collect();
        let highest = SEED_USERS.iter().map(|seed| seed.id).max().unwrap_or(0);

        Self {
            users,
            next_id: highest.saturating_add(1),
        }
    }

    /// Look up a user by identifier.
    ///
    /// Unknown identifiers yield `None`; this is a normal outcome.
    #[must_use]
    pub fn find_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Every known user in insertion order, fixtures first.
    #[must_use]
    pub fn find_all(&self) -> &[User] {
        &self.users
    }

    /// Create a user with a freshly assigned identifier and store it.
    ///
    /// Inputs are stored verbatim. The returned record is a copy of the one
    /// retained by the directory.
    ///
    /// Identifiers are unique for every creation up to and including the one
    /// assigned `u64::MAX`; the counter does not wrap past that value.
    pub fn create_user(
        &mut self,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> User {
        let id = self.allocate_id();
        let user = User::new(id, email, display_name);
        self.users.push(user.clone());
        debug!(user_id = %id, total = self.users.len(), "created user");
        user
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no users. Never true for a seeded directory.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over users in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, User> {
        self.users.iter()
    }

    // Stops at u64::MAX; see the uniqueness bound on `create_user`.
    fn allocate_id(&mut self) -> UserId {
        let id = UserId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a UserDirectory {
    type Item = &'a User;
    type IntoIter = slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
