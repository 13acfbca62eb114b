// 🗂️ Card Store - the session's ordered collection of cards
// Insertion order is kept; it drives export order and nothing else.
//
// Uniqueness of terms and definitions is enforced by `add` only. Imported
// cards are appended as-is.

use crate::card::Card;
use crate::error::{FlashcardError, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        CardStore { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    /// Fail if a card already uses this term
    pub fn check_term(&self, term: &str) -> Result<()> {
        if self.cards.iter().any(|c| c.term() == term) {
            return Err(FlashcardError::DuplicateTerm(term.to_string()));
        }
        Ok(())
    }

    /// Fail if a card already uses this definition
    pub fn check_definition(&self, definition: &str) -> Result<()> {
        if self.cards.iter().any(|c| c.definition() == definition) {
            return Err(FlashcardError::DuplicateDefinition(definition.to_string()));
        }
        Ok(())
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Append a new card with zero misses. Term is checked before definition.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<&Card> {
        self.check_term(term)?;
        self.check_definition(definition)?;

        self.cards.push(Card::new(term, definition));
        info!(term, "card added");

        let last = self.cards.len() - 1;
        Ok(&self.cards[last])
    }

    /// Remove the card with this term
    pub fn remove(&mut self, term: &str) -> Result<Card> {
        let index = self
            .cards
            .iter()
            .position(|c| c.term() == term)
            .ok_or_else(|| FlashcardError::CardNotFound(term.to_string()))?;

        let card = self.cards.remove(index);
        info!(term, "card removed");
        Ok(card)
    }

    /// Append decoded cards in order without uniqueness checks
    pub fn append(&mut self, cards: Vec<Card>) -> usize {
        let count = cards.len();
        self.cards.extend(cards);
        debug!(count, total = self.cards.len(), "cards appended");
        count
    }

    /// Zero every miss counter; returns how many cards were touched
    pub fn reset_stats(&mut self) -> usize {
        self.cards.iter_mut().for_each(Card::reset);
        info!(count = self.cards.len(), "card statistics reset");
        self.cards.len()
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Highest miss count in the store (0 when empty)
    pub fn max_missed(&self) -> u32 {
        self.cards.iter().map(|c| c.missed).max().unwrap_or(0)
    }

    /// Cards sharing the highest positive miss count, in store order.
    /// Empty when no card has been missed (or the store is empty).
    pub fn hardest_cards(&self) -> Vec<&Card> {
        let max = self.max_missed();
        self.cards
            .iter()
            .filter(|c| c.missed > 0 && c.missed == max)
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_misses(misses: &[u32]) -> CardStore {
        let mut store = CardStore::new();
        store.append(
            misses
                .iter()
                .enumerate()
                .map(|(i, m)| Card::with_missed(format!("term{i}"), format!("def{i}"), *m))
                .collect(),
        );
        store
    }

    #[test]
    fn test_add_distinct_cards() {
        let mut store = CardStore::new();
        let pairs = [("France", "Paris"), ("Japan", "Tokyo"), ("Peru", "Lima")];

        for (term, definition) in pairs {
            let card = store.add(term, definition).unwrap();
            assert_eq!(card.term(), term);
            assert_eq!(card.definition(), definition);
            assert_eq!(card.missed, 0);
        }

        assert_eq!(store.len(), pairs.len());
        for (card, (term, definition)) in store.iter().zip(pairs) {
            assert_eq!(card.term(), term);
            assert_eq!(card.definition(), definition);
        }
    }

    #[test]
    fn test_add_duplicate_term() {
        let mut store = CardStore::new();
        store.add("France", "Paris").unwrap();

        let err = store.add("France", "Lyon").unwrap_err();
        assert!(matches!(err, FlashcardError::DuplicateTerm(ref t) if t == "France"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.cards()[0].definition(), "Paris");
    }

    #[test]
    fn test_add_duplicate_definition() {
        let mut store = CardStore::new();
        store.add("France", "Paris").unwrap();

        let err = store.add("Texas", "Paris").unwrap_err();
        assert!(matches!(err, FlashcardError::DuplicateDefinition(ref d) if d == "Paris"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_term_checked_before_definition() {
        let mut store = CardStore::new();
        store.add("France", "Paris").unwrap();

        let err = store.add("France", "Paris").unwrap_err();
        assert!(matches!(err, FlashcardError::DuplicateTerm(_)));
    }

    #[test]
    fn test_remove() {
        let mut store = CardStore::new();
        store.add("France", "Paris").unwrap();
        store.add("Japan", "Tokyo").unwrap();

        let removed = store.remove("France").unwrap();
        assert_eq!(removed.term(), "France");
        assert_eq!(store.len(), 1);
        assert!(store.iter().all(|c| c.term() != "France"));
    }

    #[test]
    fn test_remove_missing() {
        let mut store = CardStore::new();
        store.add("France", "Paris").unwrap();

        let err = store.remove("Spain").unwrap_err();
        assert!(matches!(err, FlashcardError::CardNotFound(ref t) if t == "Spain"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_append_skips_uniqueness() {
        let mut store = CardStore::new();
        store.add("France", "Paris").unwrap();

        let added = store.append(vec![Card::with_missed("France", "Paris", 4)]);
        assert_eq!(added, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_hardest_cards_none_missed() {
        let store = store_with_misses(&[0, 0, 0]);
        assert!(store.hardest_cards().is_empty());
        assert!(CardStore::new().hardest_cards().is_empty());
    }

    #[test]
    fn test_hardest_cards_ties() {
        let store = store_with_misses(&[3, 1, 3]);
        let hardest: Vec<&str> = store.hardest_cards().iter().map(|c| c.term()).collect();

        assert_eq!(hardest, vec!["term0", "term2"]);
        assert_eq!(store.max_missed(), 3);
    }

    #[test]
    fn test_reset_stats_idempotent() {
        let mut store = store_with_misses(&[3, 0, 7]);

        assert_eq!(store.reset_stats(), 3);
        assert!(store.iter().all(|c| c.missed == 0));

        let snapshot = store.cards().to_vec();
        store.reset_stats();
        assert_eq!(store.cards(), snapshot.as_slice());
    }
}
