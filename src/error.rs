// ⚠️ Error taxonomy - every failure a command can raise
// One enum, one catch site (the command loop). Only terminal failures are fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlashcardError>;

#[derive(Debug, Error)]
pub enum FlashcardError {
    /// Another card already uses this term
    #[error("The card \"{0}\" already exists.")]
    DuplicateTerm(String),

    /// Another card already uses this definition
    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),

    #[error("Can't remove \"{0}\": there is no such card.")]
    CardNotFound(String),

    #[error("File not found.")]
    FileNotFound(PathBuf),

    /// A line of a card file could not be decoded (line is 1-based)
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("There are no cards to ask about.")]
    EmptyStore,

    #[error("\"{0}\" is not a valid number.")]
    InvalidInteger(String),

    /// Reading or writing a card/log file failed for a reason other than absence
    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The console itself failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),

    #[error("Input closed.")]
    InputClosed,
}

impl FlashcardError {
    /// Map a file-level io error, keeping "not found" as its own kind
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            FlashcardError::FileNotFound(path)
        } else {
            FlashcardError::Io { path, source }
        }
    }

    /// Fatal errors end the command loop; everything else is shown and the loop resumes
    pub fn is_fatal(&self) -> bool {
        matches!(self, FlashcardError::Terminal(_) | FlashcardError::InputClosed)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_dialogue() {
        assert_eq!(
            FlashcardError::DuplicateTerm("France".to_string()).to_string(),
            "The card \"France\" already exists."
        );
        assert_eq!(
            FlashcardError::DuplicateDefinition("Paris".to_string()).to_string(),
            "The definition \"Paris\" already exists."
        );
        assert_eq!(
            FlashcardError::CardNotFound("Spain".to_string()).to_string(),
            "Can't remove \"Spain\": there is no such card."
        );
        assert_eq!(
            FlashcardError::FileNotFound(PathBuf::from("missing.txt")).to_string(),
            "File not found."
        );
        assert_eq!(
            FlashcardError::InvalidInteger("ten".to_string()).to_string(),
            "\"ten\" is not a valid number."
        );
    }

    #[test]
    fn test_from_io_separates_not_found() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            FlashcardError::from_io("a.txt", missing),
            FlashcardError::FileNotFound(_)
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            FlashcardError::from_io("a.txt", denied),
            FlashcardError::Io { .. }
        ));
    }

    #[test]
    fn test_only_terminal_failures_are_fatal() {
        assert!(FlashcardError::InputClosed.is_fatal());
        assert!(FlashcardError::Terminal(io::Error::new(io::ErrorKind::BrokenPipe, "x")).is_fatal());
        assert!(!FlashcardError::EmptyStore.is_fatal());
        assert!(!FlashcardError::CardNotFound("x".to_string()).is_fatal());
    }
}
