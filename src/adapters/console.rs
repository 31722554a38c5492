use crate::domain::ports::Terminal;
use crate::utils::error::{GymError, Result};
use std::io::{self, BufRead, Write};

/// Line-based terminal over any reader/writer pair.
pub struct ConsoleTerminal<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl ConsoleTerminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GymError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_ending() {
        let mut terminal = ConsoleTerminal::new(Cursor::new("Basic\r\n2\n"), Vec::new());
        assert_eq!(terminal.prompt("Plan: ").unwrap(), "Basic");
        assert_eq!(terminal.prompt("Members: ").unwrap(), "2");
        assert!(matches!(
            terminal.prompt("More: "),
            Err(GymError::InputClosed)
        ));

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(output, "Plan: Members: More: ");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut terminal = ConsoleTerminal::new(Cursor::new(""), Vec::new());
        terminal.say("hello").unwrap();
        assert_eq!(terminal.into_output(), b"hello\n");
    }
}
