//! Prints the `Top-level-1` greeting and delegates to `low-level-1`.

use std::io::{self, Write};

/// Line written by [`say`], without its trailing newline.
pub const GREETING: &str = "Top-level-1";

/// Write this crate's greeting followed by a newline.
///
/// # Errors
///
/// Returns any error raised by the sink.
pub fn say(mut out: impl Write) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}

/// Write this crate's greeting, then the `low-level-1` greeting.
///
/// # Errors
///
/// Returns the first error raised by the sink; nothing further is written.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// top_level_1::run(&mut out).expect("write to buffer");
/// assert_eq!(out, b"Top-level-1\nLow-level-1\n");
/// ```
pub fn run(mut out: impl Write) -> io::Result<()> {
    say(&mut out)?;
    low_level_1::say(&mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn captured(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).expect("write to buffer");
        String::from_utf8(out).expect("utf-8")
    }

    #[rstest]
    fn say_writes_only_own_line() {
        assert_eq!(captured(|out| say(out)), "Top-level-1\n");
    }

    #[rstest]
    fn run_writes_both_lines_in_order() {
        assert_eq!(captured(|out| run(out)), "Top-level-1\nLow-level-1\n");
    }

    #[rstest]
    fn run_stops_after_first_failure() {
        // Room for the first line only.
        let mut sink = [0_u8; 12];
        let result = run(&mut sink[..]);

        assert!(result.is_err());
        assert_eq!(&sink[..], b"Top-level-1\n");
    }
}
