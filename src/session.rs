// 🔁 Command Loop - one interactive session
// Read a command, run it to completion, report any failure, repeat until exit.
//
// All state (cards, transcript, settings, random source) lives in the
// session and is passed explicitly to the operations that need it.

use crate::codec;
use crate::command::{Command, ACTION_PROMPT, INVALID_ACTION_PROMPT};
use crate::config::Settings;
use crate::error::{FlashcardError, Result};
use crate::quiz::Quiz;
use crate::store::CardStore;
use crate::terminal::Terminal;
use crate::transcript::Transcript;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

pub struct Session<T: Terminal, R: Rng> {
    store: CardStore,
    transcript: Transcript<T>,
    settings: Settings,
    rng: R,
    state: State,
}

impl<T: Terminal, R: Rng> Session<T, R> {
    pub fn new(terminal: T, settings: Settings, rng: R) -> Self {
        Session {
            store: CardStore::new(),
            transcript: Transcript::new(terminal),
            settings,
            rng,
            state: State::Running,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CardStore {
        &mut self.store
    }

    pub fn transcript(&self) -> &Transcript<T> {
        &self.transcript
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    // ========================================================================
    // LOOP
    // ========================================================================

    /// Startup import, then commands until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        let outcome = self.startup().and_then(|_| {
            while self.is_running() {
                self.step()?;
            }
            Ok(())
        });

        match outcome {
            Err(FlashcardError::InputClosed) => {
                info!("input closed, ending session");
                self.state = State::Terminated;
                Ok(())
            }
            other => other,
        }
    }

    /// Import the configured file, if any. A failed import is reported, not fatal.
    pub fn startup(&mut self) -> Result<()> {
        if let Some(path) = self.settings.import.clone() {
            let result = self.import(Some(path));
            self.contain(result)?;
        }
        Ok(())
    }

    /// Read and run one command
    pub fn step(&mut self) -> Result<()> {
        let command = self.next_command()?;
        let result = self.execute(command);
        self.contain(result)
    }

    /// Show a non-fatal failure and carry on; fatal ones are returned
    fn contain(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(err) if !err.is_fatal() => {
                debug!(error = %err, "command failed");
                self.transcript.say(err.to_string())
            }
            other => other,
        }
    }

    /// Prompt until the user types something in the command table
    fn next_command(&mut self) -> Result<Command> {
        self.transcript.say(ACTION_PROMPT)?;
        loop {
            let input = self.transcript.read()?;
            if let Some(command) = Command::parse(&input) {
                return Ok(command);
            }
            debug!(input = %input, "unrecognized command");
            self.transcript.say(INVALID_ACTION_PROMPT)?;
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!(command = command.as_str(), "dispatching");

        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::Import => self.import(None),
            Command::Export => self.export(None),
            Command::Ask => self.ask(),
            Command::Exit => self.exit(),
            Command::Log => self.save_log(),
            Command::HardestCard => self.hardest_card(),
            Command::ResetStats => self.reset_stats(),
        }
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    fn add(&mut self) -> Result<()> {
        let term = self.transcript.prompt("The card:")?;
        self.store.check_term(&term)?;

        let definition = self.transcript.prompt("The definition of the card:")?;
        let card = self.store.add(&term, &definition)?;

        let message = format!(
            "The pair (\"{}\":\"{}\") has been added.",
            card.term(),
            card.definition()
        );
        self.transcript.say(message)
    }

    fn remove(&mut self) -> Result<()> {
        let term = self.transcript.prompt("Which card?")?;
        self.store.remove(&term)?;
        self.transcript.say("The card has been removed.")
    }

    /// Use the configured path, or ask for one
    fn file_name(&mut self, configured: Option<PathBuf>) -> Result<PathBuf> {
        match configured {
            Some(path) => Ok(path),
            None => Ok(PathBuf::from(self.transcript.prompt("File name:")?)),
        }
    }

    fn import(&mut self, path: Option<PathBuf>) -> Result<()> {
        let path = self.file_name(path)?;
        let cards = codec::read_cards(&path)?;
        let count = self.store.append(cards);

        info!(path = %path.display(), count, "cards imported");
        self.transcript.say(format!("{} cards have been loaded.", count))
    }

    fn export(&mut self, path: Option<PathBuf>) -> Result<()> {
        let path = self.file_name(path)?;
        self.export_to(&path)
    }

    fn export_to(&mut self, path: &Path) -> Result<()> {
        let count = codec::write_cards(path, self.store.iter())?;

        info!(path = %path.display(), count, "cards exported");
        self.transcript.say(format!("{} cards have been saved.", count))
    }

    fn ask(&mut self) -> Result<()> {
        let raw = self.transcript.prompt("How many times to ask?")?;
        let times: u32 = raw
            .parse()
            .map_err(|_| FlashcardError::InvalidInteger(raw.clone()))?;

        let quiz = Quiz::new(&self.store);
        let summary = quiz.run(&mut self.store, times, &mut self.transcript, &mut self.rng)?;

        debug!(asked = summary.asked, correct = summary.correct, "quiz finished");
        Ok(())
    }

    fn save_log(&mut self) -> Result<()> {
        let path = PathBuf::from(self.transcript.prompt("File name:")?);
        self.transcript.save(&path)?;
        self.transcript.say("The log has been saved.")
    }

    fn hardest_card(&mut self) -> Result<()> {
        let hardest = self.store.hardest_cards();
        let max = self.store.max_missed();
        let names = hardest
            .iter()
            .map(|c| format!("\"{}\"", c.term()))
            .collect::<Vec<_>>()
            .join(", ");

        let message = match hardest.len() {
            0 => "There are no cards with errors.".to_string(),
            1 => format!("The hardest card is {}. You have {} errors answering it.", names, max),
            _ => format!("The hardest cards are {}. You have {} errors answering them.", names, max),
        };
        self.transcript.say(message)
    }

    fn reset_stats(&mut self) -> Result<()> {
        self.store.reset_stats();
        self.transcript.say("Card statistics have been reset.")
    }

    /// Export to the configured path (if any), say goodbye, stop the loop.
    /// A failed export keeps the session running.
    fn exit(&mut self) -> Result<()> {
        if let Some(path) = self.settings.export.clone() {
            self.export_to(&path)?;
        }

        self.transcript.say("Bye bye!")?;
        self.state = State::Terminated;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
