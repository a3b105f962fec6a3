//! Command-line settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::CliError;

/// Settings for the `user-directory` binary.
///
/// Supplying both `email` and `name` creates one user before the listing is
/// printed. Values layer as defaults, then `USER_DIRECTORY_*` environment
/// variables, then command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct DirectorySettings {
    /// Print the listing as single-line JSON instead of pretty JSON.
    #[ortho_config(default = false)]
    pub compact: bool,
    /// Email address of the user to create.
    pub email: Option<String>,
    /// Display name of the user to create.
    pub name: Option<String>,
}

/// User requested through settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewUser<'a> {
    /// Email address to store.
    pub email: &'a str,
    /// Display name to store.
    pub name: &'a str,
}

impl DirectorySettings {
    /// The user to create, if any.
    ///
    /// Both settings must be present together; one without the other is an
    /// error naming the absent setting.
    pub fn new_user(&self) -> Result<Option<NewUser<'_>>, CliError> {
        match (self.email.as_deref(), self.name.as_deref()) {
            (Some(email), Some(name)) => Ok(Some(NewUser { email, name })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(CliError::IncompleteUser { missing: "name" }),
            (None, Some(_)) => Err(CliError::IncompleteUser { missing: "email" }),
        }
    }
}
