//! # Console Boundary
//!
//! The only way the ordering session talks to the outside world.
//!
//! ```text
//! OrderSession ──write_line / prompt──► impl Console ──► stdout (takeout-cli)
//!              ◄──────read_line──────── impl Console ◄── stdin  (takeout-cli)
//!                                       ScriptedConsole         (tests)
//! ```
//!
//! `read_line` returns `Ok(None)` at end of input. Line terminators are
//! stripped by the implementation.

use std::collections::VecDeque;
use std::io;

/// Line-oriented input and output.
pub trait Console {
    /// Reads one line, without its terminator. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes one full line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Shows `text` and reads the answer.
    ///
    /// The default writes `text` as its own line. Terminal implementations
    /// override this to keep the cursor on the prompt line.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write_line(text)?;
        self.read_line()
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        (**self).prompt(text)
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        (**self).prompt(text)
    }
}

// =============================================================================
// Scripted Console
// =============================================================================

/// In-memory console fed from a fixed list of answers.
///
/// Every line written, prompts included, is kept in [`transcript`](Self::transcript).
/// Once the answers run out `read_line` reports end of input.
///
/// ## Example
/// ```rust
/// use takeout_core::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["1"]);
/// assert_eq!(console.prompt("Type menu number: ").unwrap().as_deref(), Some("1"));
/// assert_eq!(console.read_line().unwrap(), None);
/// assert_eq!(console.transcript(), ["Type menu number: "]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every line written so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_answers() {
        let mut console = ScriptedConsole::new(["a", "b"]);
        assert_eq!(console.remaining(), 2);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_is_recorded() {
        let mut console = ScriptedConsole::new(["2"]);
        console.write_line("hello").unwrap();
        let answer = console.prompt("How many?").unwrap();
        assert_eq!(answer.as_deref(), Some("2"));
        assert_eq!(console.transcript(), ["hello", "How many?"]);
    }

    #[test]
    fn test_forwarding_through_mut_ref_and_box() {
        fn greet<C: Console>(mut console: C) {
            console.write_line("via ref").unwrap();
        }

        let mut console = ScriptedConsole::new(["x"]);
        greet(&mut console);
        let mut boxed: Box<dyn Console> = Box::new(ScriptedConsole::new(["y"]));
        assert_eq!(boxed.prompt("?").unwrap().as_deref(), Some("y"));

        assert_eq!(console.transcript(), ["via ref"]);
        assert_eq!(console.remaining(), 1);
    }
}
