// Flashcards - Core Library
// Exposes the card store, codec, quiz and command loop for the CLI and tests

pub mod card;
pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod quiz;
pub mod session;
pub mod store;
pub mod terminal;
pub mod transcript;

// Re-export commonly used types
pub use card::Card;
pub use codec::{decode, encode, read_cards, write_cards, DELIMITER};
pub use command::Command;
pub use config::{Args, Settings};
pub use error::{FlashcardError, Result};
pub use quiz::{Quiz, QuizSummary, Verdict};
pub use session::{Session, State};
pub use store::CardStore;
pub use terminal::{ScriptedTerminal, StdTerminal, Terminal};
pub use transcript::{Direction, Entry, Transcript, TranscriptLog};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
