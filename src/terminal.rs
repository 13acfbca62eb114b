// ⌨️ Terminal - raw line I/O
// The session only ever reads and writes whole lines.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Terminal {
    /// Read one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line followed by a newline
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

fn trim_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Read one line as bytes; invalid UTF-8 is replaced rather than rejected
pub fn read_lossy_line<B: BufRead>(reader: &mut B) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    Ok(Some(trim_line_ending(String::from_utf8_lossy(&bytes).into_owned())))
}

// ============================================================================
// STDIN / STDOUT
// ============================================================================

#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    pub fn new() -> Self {
        StdTerminal
    }
}

impl Terminal for StdTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut io::stdin().lock())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

// ============================================================================
// SCRIPTED (in-memory)
// ============================================================================

/// Feeds canned input lines and captures everything written
#[derive(Debug, Default, Clone)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedTerminal {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines written so far
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front().map(trim_line_ending))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("add\r\n".to_string()), "add");
        assert_eq!(trim_line_ending("add\n".to_string()), "add");
        assert_eq!(trim_line_ending("hardest card ".to_string()), "hardest card ");
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() {
        let mut reader: &[u8] = b"add\n\xff\xfe\r\nexit";

        assert_eq!(read_lossy_line(&mut reader).unwrap(), Some("add".to_string()));
        assert_eq!(
            read_lossy_line(&mut reader).unwrap(),
            Some("\u{FFFD}\u{FFFD}".to_string())
        );
        assert_eq!(read_lossy_line(&mut reader).unwrap(), Some("exit".to_string()));
        assert_eq!(read_lossy_line(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_scripted_terminal() {
        let mut term = ScriptedTerminal::new(["one", "two\r"]);

        assert_eq!(term.read_line().unwrap(), Some("one".to_string()));
        assert_eq!(term.read_line().unwrap(), Some("two".to_string()));
        assert_eq!(term.read_line().unwrap(), None);

        term.write_line("hello").unwrap();
        assert_eq!(term.output(), ["hello".to_string()]);
    }
}
