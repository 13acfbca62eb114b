use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use flashcards::{Args, Session, Settings, StdTerminal};

fn main() -> Result<()> {
    let args = Args::from_env();

    // Logs go to stderr; stdout carries the dialogue
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from(args);
    tracing::debug!(?settings, version = flashcards::VERSION, "starting session");

    let rng = settings.rng();
    let mut session = Session::new(StdTerminal::new(), settings, rng);
    session.run().context("Flashcards session failed")?;

    Ok(())
}
