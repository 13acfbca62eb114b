// 🎯 Quiz Engine
// Random draws with replacement, exact-match grading, and a hint when the
// answer belongs to another card.

use crate::card::Card;
use crate::error::{FlashcardError, Result};
use crate::store::CardStore;
use crate::terminal::Terminal;
use crate::transcript::Transcript;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

// ============================================================================
// VERDICT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,

    /// Wrong, and the answer is nobody's definition
    Wrong { expected: String },

    /// Wrong, but the answer is the definition of `other_term`
    WrongButMatches { expected: String, other_term: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    pub fn message(&self) -> String {
        match self {
            Verdict::Correct => "Correct!".to_string(),
            Verdict::Wrong { expected } => {
                format!("Wrong. The right answer is \"{}\".", expected)
            }
            Verdict::WrongButMatches { expected, other_term } => format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, other_term
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSummary {
    pub asked: u32,
    pub correct: u32,
}

// ============================================================================
// QUIZ
// ============================================================================

pub struct Quiz {
    /// definition → term, taken once when the quiz starts
    hints: HashMap<String, String>,
}

impl Quiz {
    /// Snapshot the store's definitions. With duplicate definitions the later card wins.
    pub fn new(store: &CardStore) -> Self {
        let hints = store
            .iter()
            .map(|c| (c.definition().to_string(), c.term().to_string()))
            .collect();
        Quiz { hints }
    }

    /// Grade an answer without touching the card
    pub fn grade(&self, card: &Card, answer: &str) -> Verdict {
        if card.is_correct(answer) {
            return Verdict::Correct;
        }

        let expected = card.definition().to_string();
        match self.hints.get(answer) {
            Some(other_term) => Verdict::WrongButMatches {
                expected,
                other_term: other_term.clone(),
            },
            None => Verdict::Wrong { expected },
        }
    }

    /// Ask `times` questions, each on a card drawn uniformly from the store.
    /// Wrong answers bump the drawn card's miss counter.
    pub fn run<T, R>(
        &self,
        store: &mut CardStore,
        times: u32,
        transcript: &mut Transcript<T>,
        rng: &mut R,
    ) -> Result<QuizSummary>
    where
        T: Terminal,
        R: Rng + ?Sized,
    {
        let mut summary = QuizSummary::default();

        for _ in 0..times {
            let index = draw(store, rng)?;
            let term = store
                .get(index)
                .map(|c| c.term().to_string())
                .ok_or(FlashcardError::EmptyStore)?;

            let answer = transcript.prompt(format!("Print the definition of \"{}\":", term))?;

            let card = store.get_mut(index).ok_or(FlashcardError::EmptyStore)?;
            let verdict = self.grade(card, &answer);
            if !verdict.is_correct() {
                card.record_miss();
            } else {
                summary.correct += 1;
            }
            summary.asked += 1;

            debug!(term = %term, correct = verdict.is_correct(), missed = card.missed, "graded answer");
            transcript.say(verdict.message())?;
        }

        Ok(summary)
    }
}

/// Uniform index over the whole store
fn draw<R: Rng + ?Sized>(store: &CardStore, rng: &mut R) -> Result<usize> {
    if store.is_empty() {
        return Err(FlashcardError::EmptyStore);
    }
    Ok(rng.gen_range(0..store.len()))
}

// ============================================================================
// TESTS
// ============================================================================
