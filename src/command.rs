// 🧭 Command vocabulary
// Typed text is uppercased and spaces become underscores, then looked up in
// a fixed table. Anything else is not a command.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

/// Normalized spelling → command, in menu order
const COMMANDS: [(&str, Command); 9] = [
    ("ADD", Command::Add),
    ("REMOVE", Command::Remove),
    ("IMPORT", Command::Import),
    ("EXPORT", Command::Export),
    ("ASK", Command::Ask),
    ("EXIT", Command::Exit),
    ("LOG", Command::Log),
    ("HARDEST_CARD", Command::HardestCard),
    ("RESET_STATS", Command::ResetStats),
];

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

pub const INVALID_ACTION_PROMPT: &str =
    "Please select an action from the list (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

fn normalize(input: &str) -> String {
    input.to_uppercase().replace(' ', "_")
}

impl Command {
    /// Look up typed text; `None` if it names no command
    pub fn parse(input: &str) -> Option<Command> {
        let key = normalize(input);
        COMMANDS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, command)| *command)
    }

    /// Menu spelling (lowercase, with spaces)
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Import => "import",
            Command::Export => "export",
            Command::Ask => "ask",
            Command::Exit => "exit",
            Command::Log => "log",
            Command::HardestCard => "hardest card",
            Command::ResetStats => "reset stats",
        }
    }
}
