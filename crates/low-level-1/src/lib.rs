//! Prints the `Low-level-1` greeting line.
//!
//! The routine writes to any [`Write`] sink so callers and tests can capture
//! the output instead of reading stdout.

use std::io::{self, Write};

/// Line written by [`say`], without its trailing newline.
pub const GREETING: &str = "Low-level-1";

/// Write the greeting followed by a newline.
///
/// # Errors
///
/// Returns any error raised by the sink.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// low_level_1::say(&mut out).expect("write to buffer");
/// assert_eq!(out, b"Low-level-1\n");
/// ```
pub fn say(mut out: impl Write) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}
