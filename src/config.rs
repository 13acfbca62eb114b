// ⚙️ Startup configuration
// Two optional paths drive the session: a file imported before the first
// prompt, and a file exported when the user exits. The older single-dash
// spelling (`-import cards.txt -export out.txt`) is still accepted.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ffi::OsString;
use std::path::PathBuf;

/// Flashcards - terminal flashcard trainer
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flashcards", version, about)]
pub struct Args {
    /// Card file to import before the first prompt
    #[arg(long, value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Card file written on exit (skips the file name prompt)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Seed for quiz card selection (reproducible sessions)
    #[arg(long, env = "FLASHCARDS_SEED")]
    pub seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub debug: bool,
}

/// Single-dash long options still in use by older scripts
const LEGACY_FLAGS: [&str; 2] = ["-import", "-export"];

/// Rewrite `-import`/`-export` to their `--` forms; everything else passes through
pub fn normalize_legacy_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            let legacy = arg.to_str().map_or(false, |a| LEGACY_FLAGS.contains(&a));
            if legacy {
                let mut long = OsString::from("-");
                long.push(&arg);
                long
            } else {
                arg
            }
        })
        .collect()
}

impl Args {
    /// Parse the process arguments, accepting the legacy spelling
    pub fn from_env() -> Self {
        Args::parse_from(normalize_legacy_args(std::env::args_os()))
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

/// What the session needs from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub import: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Settings {
    /// Random source for quiz draws: seeded when a seed was given, entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            // An empty path means "not configured", same as leaving the flag out
            import: args.import.filter(|p| !p.as_os_str().is_empty()),
            export: args.export.filter(|p| !p.as_os_str().is_empty()),
            seed: args.seed,
        }
    }
}
