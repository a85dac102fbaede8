//! Line-oriented interactive surface.

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use thiserror::Error;

/// Errors raised by the interactive surface.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The input stream reached end of file.
    #[error("console input closed")]
    InputClosed,
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Console reading lines from `R` and writing text to `W`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console bound to the process standard streams.
    #[must_use]
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout()).with_clear_screen(clear_screen)
    }
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a console over arbitrary streams with screen clearing off.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enables or disables clearing the screen in [`Console::clear`].
    #[must_use]
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Writes one line of text.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] when writing fails.
    pub fn line(&mut self, text: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] when writing fails.
    pub fn blank_line(&mut self) -> ConsoleResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Reads one line without its trailing line break.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] at end of input, or
    /// [`ConsoleError::Io`] when reading fails.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed_len = buffer.trim_end_matches(['\r', '\n']).len();
        buffer.truncate(trimmed_len);
        Ok(buffer)
    }

    /// Writes `message` without a line break and reads the answer.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when writing or reading fails.
    pub fn prompt(&mut self, message: &str) -> ConsoleResult<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Keeps prompting until `parse` accepts the answer.
    ///
    /// `retry_message` is written after every rejected answer. There is no
    /// attempt limit; only closed input ends the loop early.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when writing or reading fails.
    pub fn prompt_until<T>(
        &mut self,
        message: &str,
        retry_message: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> ConsoleResult<T> {
        loop {
            let answer = self.prompt(message)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.line(retry_message)?;
        }
    }

    /// Clears the screen when enabled, otherwise does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] when writing fails.
    pub fn clear(&mut self) -> ConsoleResult<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Waits for the user to press Enter.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when writing or reading fails.
    pub fn pause(&mut self) -> ConsoleResult<()> {
        self.blank_line()?;
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }

    /// Returns the output stream.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }
}
