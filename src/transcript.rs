// 📜 Transcript Logger
// Every line shown to the user and every line they type goes through here,
// so the LOG command can dump the whole session in order.

use crate::error::{FlashcardError, Result};
use crate::terminal::Terminal;
use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Typed by the user
    Input,
    /// Shown to the user
    Output,
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub direction: Direction,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// Append-only, chronological record of the dialogue
#[derive(Debug, Clone, Default)]
pub struct TranscriptLog {
    entries: Vec<Entry>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        TranscriptLog { entries: Vec::new() }
    }

    pub fn record(&mut self, direction: Direction, text: impl Into<String>) {
        self.entries.push(Entry {
            direction,
            text: text.into(),
            at: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time between the first and the last entry
    pub fn elapsed(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        Some(last.at - first.at)
    }

    /// Entry texts joined by newlines (timestamps and directions are not exported)
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A terminal whose traffic is recorded into a `TranscriptLog`
pub struct Transcript<T: Terminal> {
    terminal: T,
    log: TranscriptLog,
}

impl<T: Terminal> Transcript<T> {
    pub fn new(terminal: T) -> Self {
        Transcript {
            terminal,
            log: TranscriptLog::new(),
        }
    }

    /// Show a line to the user
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        let message = message.as_ref();
        self.log.record(Direction::Output, message);
        self.terminal.write_line(message).map_err(FlashcardError::Terminal)
    }

    /// Read a line from the user
    pub fn read(&mut self) -> Result<String> {
        let line = self
            .terminal
            .read_line()
            .map_err(FlashcardError::Terminal)?
            .ok_or(FlashcardError::InputClosed)?;

        self.log.record(Direction::Input, line.as_str());
        Ok(line)
    }

    /// Show a prompt and read the reply
    pub fn prompt(&mut self, message: impl AsRef<str>) -> Result<String> {
        self.say(message)?;
        self.read()
    }

    pub fn log(&self) -> &TranscriptLog {
        &self.log
    }

    /// Write the transcript so far to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.log.render()).map_err(|e| FlashcardError::from_io(path, e))?;
        let elapsed_secs = self.log.elapsed().map_or(0, |d| d.num_seconds());
        info!(path = %path.display(), entries = self.log.len(), elapsed_secs, "transcript saved");
        Ok(())
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedTerminal;
    use tempfile::tempdir;

    #[test]
    fn test_records_in_order() {
        let mut transcript = Transcript::new(ScriptedTerminal::new(["France"]));

        let answer = transcript.prompt("The card:").unwrap();
        transcript.say("done").unwrap();

        assert_eq!(answer, "France");
        let entries = transcript.log().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].direction, Direction::Output);
        assert_eq!(entries[1].direction, Direction::Input);
        assert_eq!(entries[2].text, "done");
        assert_eq!(transcript.log().render(), "The card:\nFrance\ndone");
    }

    #[test]
    fn test_elapsed_spans_first_to_last_entry() {
        let mut log = TranscriptLog::new();
        assert!(log.elapsed().is_none());

        log.record(Direction::Output, "first");
        log.record(Direction::Input, "second");

        let entries = log.entries();
        assert!(entries[0].at <= entries[1].at);
        assert_eq!(log.elapsed(), Some(entries[1].at - entries[0].at));
        assert!(log.elapsed().unwrap() >= Duration::zero());
    }

    #[test]
    fn test_end_of_input() {
        let mut transcript = Transcript::new(ScriptedTerminal::default());
        assert!(matches!(transcript.read(), Err(FlashcardError::InputClosed)));
        assert!(transcript.log().is_empty());
    }

    #[test]
    fn test_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.log");

        let mut transcript = Transcript::new(ScriptedTerminal::new(["log"]));
        transcript.say("Input the action:").unwrap();
        transcript.read().unwrap();
        transcript.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Input the action:\nlog");
    }
}
