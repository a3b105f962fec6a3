//! In-memory user directory.
//!
//! The directory owns a small, insertion-ordered collection of users seeded
//! with two fixture records. It supports lookup by identifier, listing every
//! record, and creating records with freshly assigned identifiers. Lookups of
//! unknown identifiers return `None` rather than failing.
//!
//! # Example
//!
//! ```
//! use user_directory::{UserDirectory, UserId};
//!
//! let mut directory = UserDirectory::new();
//! let john = directory.find_by_id(UserId::new(1)).expect("seed user");
//! assert_eq!(john.email(), "john.doe@example.com");
//!
//! let created = directory.create_user("test@example.com", "Test User");
//! assert_eq!(created.email(), "test@example.com");
//! assert_eq!(directory.find_all().len(), 3);
//! ```
//!
//! [`SharedUserDirectory`] wraps the directory for use from several threads
//! and implements the [`UsersQuery`] and [`UsersCommand`] ports.

pub mod cli;
mod config;
mod directory;
mod error;
pub mod ports;
mod shared;
mod user;

pub use directory::UserDirectory;
pub use error::{CliError, DirectoryError};
pub use ports::{UsersCommand, UsersQuery};
pub use shared::SharedUserDirectory;
pub use user::{User, UserId};
