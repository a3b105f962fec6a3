//! Command-line entry point for the `user-directory` binary.
//!
//! Kept in the library so the behaviour is testable without spawning a
//! process. The binary only wires stdout, stderr and logging.

use std::ffi::OsString;
use std::io::Write;

use ortho_config::OrthoConfig;
use tracing::info;

use crate::config::DirectorySettings;
use crate::error::CliError;
use crate::ports::{UsersCommand, UsersQuery};
use crate::shared::SharedUserDirectory;
use crate::user::User;

/// Load settings from `args` and the environment, optionally create a user,
/// then write the directory listing to `out` as JSON.
///
/// `args` includes the program name in first position.
///
/// # Errors
///
/// Returns [`CliError`] when settings fail to load, only one of email and
/// name is supplied, the directory is unusable, or the listing cannot be
/// written.
pub fn run(args: Vec<OsString>, out: impl Write) -> Result<(), CliError> {
    let settings = DirectorySettings::load_from_iter(args).map_err(|err| CliError::Config {
        message: err.to_string(),
    })?;
    let directory = SharedUserDirectory::default();
    execute(&settings, &directory, out)
}

fn execute<D>(settings: &DirectorySettings, directory: &D, out: impl Write) -> Result<(), CliError>
where
    D: UsersQuery + UsersCommand,
{
    if let Some(request) = settings.new_user()? {
        let user = directory.create_user(request.email, request.name)?;
        info!(user_id = %user.id(), "created user from settings");
    }

    let users = directory.find_all()?;
    write_listing(out, &users, settings.compact)
}

fn write_listing(mut out: impl Write, users: &[User], compact: bool) -> Result<(), CliError> {
    let output_error = |message: String| CliError::Output { message };

    let written = if compact {
        serde_json::to_writer(&mut out, users)
    } else {
        serde_json::to_writer_pretty(&mut out, users)
    };
    written.map_err(|err| output_error(err.to_string()))?;
    writeln!(out).map_err(|err| output_error(err.to_string()))?;
    out.flush().map_err(|err| output_error(err.to_string()))
}
