//! In-place console progress line
//!
//! Overwrites a single output line as reading progresses, padding with blanks
//! so a shorter message never leaves stale characters from a longer one.

use std::io::{self, Write};

/// Stateful single-line progress indicator
///
/// Tracks the length of the previously written message so each update can
/// blank it out before writing the new one. The writer is generic so tests
/// can capture output in a buffer.
pub struct ProgressLine<W: Write> {
    out: W,
    last_len: usize,
    enabled: bool,
}

impl ProgressLine<io::Stdout> {
    /// Create a progress line writing to standard output
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> ProgressLine<W> {
    /// Create a progress line writing to the given sink
    pub fn new(out: W, enabled: bool) -> Self {
        Self {
            out,
            last_len: 0,
            enabled,
        }
    }

    /// Overwrite the current line with `message`
    pub fn update(&mut self, message: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        write!(self.out, "\r{}", " ".repeat(self.last_len))?;
        write!(self.out, "\r{}", message)?;
        self.out.flush()?;
        self.last_len = message.len();
        Ok(())
    }

    /// Report `current` of `total` samples read
    pub fn report(&mut self, current: usize, total: usize) -> io::Result<()> {
        self.update(&format!("{}/{}", current, total))
    }

    /// Consume the progress line, returning its sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Terminate the progress line with a newline
    pub fn finish(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        writeln!(self.out)?;
        self.out.flush()?;
        self.last_len = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_overwrites_previous_message() {
        let mut progress = ProgressLine::new(Vec::new(), true);
        progress.update("1000/5000").unwrap();
        progress.update("2000/5000").unwrap();

        let output = String::from_utf8(progress.out).unwrap();
        // Second update blanks the nine characters of the first
        assert_eq!(output, "\r\r1000/5000\r         \r2000/5000");
    }

    #[test]
    fn test_shorter_message_leaves_no_stale_characters() {
        let mut progress = ProgressLine::new(Vec::new(), true);
        progress.update("9999/10000").unwrap();
        progress.update("done").unwrap();

        let output = String::from_utf8(progress.out).unwrap();
        assert!(output.ends_with("\r          \rdone"));
    }

    #[test]
    fn test_finish_emits_newline() {
        let mut progress = ProgressLine::new(Vec::new(), true);
        progress.report(42, 100).unwrap();
        progress.finish().unwrap();

        let output = String::from_utf8(progress.out).unwrap();
        assert!(output.contains("42/100"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_disabled_progress_writes_nothing() {
        let mut progress = ProgressLine::new(Vec::new(), false);
        progress.report(1, 2).unwrap();
        progress.finish().unwrap();
        assert!(progress.out.is_empty());
    }
}
