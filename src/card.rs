// 🃏 Card - a term/definition pair with an error counter
// Term and definition never change after creation; only the miss counter does.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    term: String,
    definition: String,

    /// How many times this card was answered wrong
    pub missed: u32,
}

impl Card {
    /// Create a fresh card with no misses
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Card::with_missed(term, definition, 0)
    }

    /// Create a card carrying a previously recorded miss count
    pub fn with_missed(term: impl Into<String>, definition: impl Into<String>, missed: u32) -> Self {
        Card {
            term: term.into(),
            definition: definition.into(),
            missed,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.definition
    }

    pub fn record_miss(&mut self) {
        self.missed = self.missed.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.missed = 0;
    }
}
