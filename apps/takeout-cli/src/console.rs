//! Terminal implementation of the core `Console` trait.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use takeout_core::Console;

/// A console over any buffered reader and writer.
///
/// Prompts stay on the same line as the cursor, like a shell prompt.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// The process's stdin and stdout.
    pub fn stdio() -> Self {
        StdConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StdConsole { reader, writer }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        self.read_line()
    }
}
